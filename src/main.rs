//! prompt-enhancer - rewrite prompts from the command line or over MCP

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt_enhancer::config::{Config, ConfigOptions};
use prompt_enhancer::enhancer::{
    render_report, EnhancementResult, PromptEnhancer, StyleKey, REPORT_FILE_NAME,
};
use prompt_enhancer::mcp::{McpServer, TransportMode};

#[derive(ValueEnum, Debug, Copy, Clone)]
enum TransportArg {
    Auto,
    Lsp,
    Line,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum OutputFormat {
    /// Enhanced prompt followed by keywords and synonyms
    Text,
    /// The full result as JSON
    Json,
    /// Plain-text report with metadata
    Report,
}

#[derive(Parser, Debug)]
#[command(name = "prompt-enhancer")]
#[command(about = "Rewrite a short prompt into a fuller, style-consistent instruction")]
struct Args {
    /// Prompt to enhance (read from stdin when omitted)
    prompt: Option<String>,

    /// Enhancement style: professional, creative, detailed, simplified
    #[arg(long)]
    style: Option<String>,

    /// Append target audience, requirements and format guidance
    #[arg(long)]
    context_boost: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write output to this file instead of stdout (a directory gets the default report file name)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Newline-separated stopword list (overrides PROMPT_ENHANCER_STOPWORDS)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Synset file, one comma-separated sense group per line (overrides PROMPT_ENHANCER_THESAURUS)
    #[arg(long)]
    thesaurus: Option<PathBuf>,

    /// Run as an MCP server on stdio instead of enhancing one prompt
    #[arg(long)]
    serve: bool,

    /// Transport framing for --serve: auto, lsp, line
    #[arg(long, value_enum, default_value = "auto")]
    transport: TransportArg,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the result or the MCP protocol
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut options = Config::options_from_env();
    if args.stopwords.is_some() {
        options.stopwords_path = args.stopwords.clone();
    }
    if args.thesaurus.is_some() {
        options.thesaurus_path = args.thesaurus.clone();
    }
    if args.style.is_some() {
        options.default_style = args.style.clone();
    }
    let config = Config::new(options)?;

    let enhancer = Arc::new(PromptEnhancer::from_config(&config));

    if args.serve {
        let transport_mode = match args.transport {
            TransportArg::Auto => None,
            TransportArg::Lsp => Some(TransportMode::Lsp),
            TransportArg::Line => Some(TransportMode::Line),
        };

        info!("Starting prompt-enhancer MCP server");
        let server = McpServer::new(config, enhancer, transport_mode);
        if let Err(e) = server.run().await {
            error!("Server error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    run_once(&args, &config, &enhancer)
}

fn run_once(args: &Args, config: &Config, enhancer: &PromptEnhancer) -> Result<()> {
    let prompt = match &args.prompt {
        Some(p) => p.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read prompt from stdin")?;
            buf
        }
    };

    let style = config.default_style.as_str();
    if StyleKey::from_name(style).is_none() {
        warn!("Unknown style '{}', rewriting as professional", style);
    }

    let result = enhancer.enhance(&prompt, style, args.context_boost);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&result),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Report => render_report(prompt.trim(), &result),
    };

    match &args.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(REPORT_FILE_NAME)
            } else {
                path.clone()
            };
            std::fs::write(&path, &rendered)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}

fn render_text(result: &EnhancementResult) -> String {
    let mut out = result.enhanced_prompt.clone();

    if !result.keywords.is_empty() {
        out.push_str("\n\nKeywords: ");
        out.push_str(&result.keywords.join(", "));
    }

    let synonym_lines: Vec<String> = result
        .keywords
        .iter()
        .filter_map(|k| {
            result
                .synonyms
                .get(k)
                .map(|syns| format!("  {}: {}", k, syns.join(", ")))
        })
        .collect();
    if !synonym_lines.is_empty() {
        out.push_str("\n\nSynonyms:\n");
        out.push_str(&synonym_lines.join("\n"));
    }

    out
}

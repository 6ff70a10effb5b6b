//! TimeCraft Capture MCP Server - Main Entry Point
//!
//! This is the main entry point for the capture server application.
//! The actual implementation is in the `timecraft_capture` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use timecraft_capture::CaptureServerHandler;
use timecraft_capture::capture::{self, CaptureRequest, SystemClock};
use timecraft_capture::formatting;

/// TimeCraft Capture - quick-capture classification for a GTD inbox via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<String>,

    /// Analyze TEXT once, print the capture report and exit instead of serving
    #[arg(long, value_name = "TEXT")]
    analyze: Option<String>,

    /// Context for --analyze (e.g. "casa" or "@trabalho")
    #[arg(long, requires = "analyze")]
    context: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let handler = CaptureServerHandler::new(args.config.as_deref())?;

    if let Some(text) = args.analyze {
        let config = handler.config();
        let request = CaptureRequest {
            context: config
                .resolve_context(args.context.as_deref())
                .map(str::to_string),
            ..CaptureRequest::new(text)
        };
        let payload = capture::submit(&request, config.auto_expand, &SystemClock)?;
        print!("{}", formatting::format_payload(&payload));
        return Ok(());
    }

    tracing::info!("serving capture tools on stdio");
    serve_stdio(handler).await?;
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use content_generator::ai::GeminiTextClient;
use content_generator::handler::RequestHandler;
use content_generator::models::Config;
use content_generator::server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "content-generator")]
#[command(about = "Serve AI content generation over HTTP")]
struct CliArgs {
    /// Interface to bind; overrides HOST.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on; overrides PORT.
    #[arg(long, value_parser = parse_port_arg)]
    port: Option<u16>,
}

fn parse_port_arg(input: &str) -> std::result::Result<u16, String> {
    input
        .parse::<u16>()
        .map_err(|_| format!("Invalid port '{}'. Expected a number from 0 to 65535", input))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_generator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting content-generator");

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let provider = GeminiTextClient::new(
        config.google_api_key.clone(),
        config.model.clone(),
        config.timeout,
    );
    let handler = RequestHandler::new(Arc::new(provider));
    info!("Text provider: Gemini (model: {})", handler.model());

    server::serve(server::build(handler), &config.bind_addr()).await?;
    Ok(())
}

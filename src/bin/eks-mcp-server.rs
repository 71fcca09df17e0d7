//! EKS MCP Server Binary
//!
//! This binary provides a standalone MCP server that exposes Amazon EKS
//! cluster discovery via the Model Context Protocol using the rmcp crate.

use anyhow::Result;
use clap::Parser;
use eks_mcp_server::constants::{SERVER_NAME, TOOL_LIST_CLUSTERS};
use eks_mcp_server::{EksMcpServer, ServerConfig};
use rmcp::ServiceExt;

#[derive(Parser)]
#[command(name = "eks-mcp-server")]
#[command(about = "EKS MCP Server - Exposes Amazon EKS cluster listing via Model Context Protocol")]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// AWS region used for EKS calls
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// AWS profile used to resolve credentials
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Override the EKS endpoint (e.g. a local emulator)
    #[arg(long)]
    endpoint_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Filter out empty arguments that some MCP clients may pass
    let args: Vec<String> = std::env::args()
        .filter(|arg| !arg.is_empty())
        .collect();

    let args = Args::parse_from(args);

    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting {} v{} (rmcp)", SERVER_NAME, env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::new(args.region, args.profile).with_endpoint_url(args.endpoint_url);
    tracing::debug!("Server config: {:?}", config);

    let server = EksMcpServer::new(config);
    let service = server.serve(rmcp::transport::io::stdio()).await?;

    tracing::info!("MCP Server initialized with tools:");
    tracing::info!("  - {}: List EKS clusters in the current AWS account and region", TOOL_LIST_CLUSTERS);

    tracing::info!("Server ready, listening on stdio...");

    service.waiting().await?;

    tracing::info!("MCP Server shutting down");
    Ok(())
}

//! EKS MCP Server
//!
//! This module provides an MCP (Model Context Protocol) server implementation
//! using the rmcp crate. It exposes Amazon EKS cluster discovery to AI agents
//! and other MCP clients.

use rmcp::{
    model::{CallToolResult, ErrorData as McpError, ServerCapabilities, ServerInfo, ToolsCapability},
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer, ServerHandler,
};
use std::future::Future;
use std::sync::Arc;

use crate::aws::SdkEksClientFactory;
use crate::config::ServerConfig;
use crate::logging::{LogContext, TracingLogger};
use crate::tools::{ClusterListTool, ListClustersRequest};

/// EKS MCP Server
///
/// Registers a single tool, `list_clusters`, backed by a [`ClusterListTool`].
#[derive(Clone)]
pub struct EksMcpServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    cluster_list_tool: Arc<ClusterListTool>,
}

#[tool_router]
impl EksMcpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_tool(ClusterListTool::new(
            Arc::new(SdkEksClientFactory::new(config)),
            Arc::new(TracingLogger),
        ))
    }

    pub fn with_tool(cluster_list_tool: ClusterListTool) -> Self {
        Self {
            tool_router: Self::tool_router(),
            cluster_list_tool: Arc::new(cluster_list_tool),
        }
    }

    /// Names of the tools this server answers to.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }

    /// List all EKS clusters in the current AWS account and region
    ///
    /// Useful for discovering available clusters before performing operations on them.
    /// Requires valid AWS credentials with permission to list EKS clusters. The response
    /// includes the cluster names, their count and a pagination token when more remain.
    #[tool(description = "List all EKS clusters in the current AWS account and region. Returns cluster names, the total count and a next_token for pagination. Requires valid AWS credentials with EKS list permissions.")]
    async fn list_clusters(
        &self,
        params: rmcp::handler::server::tool::Parameters<ListClustersRequest>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.cluster_list_tool
            .list_clusters(LogContext::from(&ctx), params.0)
            .await
            .into_call_tool_result()
    }
}

#[tool_handler]
impl ServerHandler for EksMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("EKS MCP Server - Lists Amazon EKS clusters in the current AWS account and region".to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: Some(false) }),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

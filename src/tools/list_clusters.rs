//! The `list_clusters` tool.

use rmcp::model::{CallToolResult, Content, ErrorData as McpError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aws::{EksClientFactory, ListClustersInput, ListClustersOutput};
use crate::errors::EksResult;
use crate::logging::{LogContext, LogLevel, RequestLogger};

/// Request parameters for listing EKS clusters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ListClustersRequest {
    /// Maximum number of results (1-100)
    pub max_results: Option<i32>,
    /// Token for pagination
    pub next_token: Option<String>,
    /// List containing 'all' to include external clusters
    pub include: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub r#type: String,
    pub text: String,
}

impl TextContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            r#type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Envelope returned by every `list_clusters` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListClustersResponse {
    #[serde(rename = "isError")]
    pub is_error: bool,
    pub content: Vec<TextContent>,
    pub clusters: Vec<String>,
    pub count: usize,
    pub next_token: Option<String>,
}

impl ListClustersResponse {
    pub fn success(clusters: Vec<String>, next_token: Option<String>) -> Self {
        let count = clusters.len();
        Self {
            is_error: false,
            content: vec![TextContent::text(format!(
                "Successfully listed {} EKS clusters",
                count
            ))],
            clusters,
            count,
            next_token,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            is_error: true,
            content: vec![TextContent::text(message)],
            clusters: Vec::new(),
            count: 0,
            next_token: None,
        }
    }

    pub fn message(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Wraps the envelope as an MCP tool result, carrying the error flag over.
    pub fn into_call_tool_result(self) -> Result<CallToolResult, McpError> {
        let is_error = self.is_error;
        let content = vec![Content::json(&self)?];
        if is_error {
            Ok(CallToolResult::error(content))
        } else {
            Ok(CallToolResult::success(content))
        }
    }
}

/// Lists the EKS clusters visible to the configured AWS account and region.
pub struct ClusterListTool {
    client_factory: Arc<dyn EksClientFactory>,
    logger: Arc<dyn RequestLogger>,
}

impl ClusterListTool {
    pub fn new(client_factory: Arc<dyn EksClientFactory>, logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            client_factory,
            logger,
        }
    }

    /// Never fails: upstream errors are folded into an error envelope.
    pub async fn list_clusters(
        &self,
        ctx: LogContext,
        request: ListClustersRequest,
    ) -> ListClustersResponse {
        self.logger.log(&ctx, LogLevel::Info, "Listing EKS clusters");

        match self.fetch(&request).await {
            Ok(ListClustersOutput {
                clusters,
                next_token,
            }) => {
                self.logger.log(
                    &ctx,
                    LogLevel::Info,
                    &format!("Found {} EKS clusters", clusters.len()),
                );
                ListClustersResponse::success(clusters, next_token)
            }
            Err(e) => {
                let error_msg = format!("Failed to list EKS clusters: {}", e);
                self.logger.log(&ctx, LogLevel::Error, &error_msg);
                ListClustersResponse::error(error_msg)
            }
        }
    }

    async fn fetch(&self, request: &ListClustersRequest) -> EksResult<ListClustersOutput> {
        let client = self.client_factory.create_client().await?;
        client
            .list_clusters(ListClustersInput::from_request(request))
            .await
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::EksResult;
use crate::tools::ListClustersRequest;

/// Parameters forwarded to the EKS `ListClusters` call.
///
/// Fields that were not supplied by the caller stay `None` and are never set
/// on the SDK request, so the API applies its own defaults. The serde form
/// uses the upstream field names and is only for inspection and logging;
/// the SDK request itself is built by `SdkEksClient::list_clusters_request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl ListClustersInput {
    pub fn from_request(request: &ListClustersRequest) -> Self {
        Self {
            max_results: request.max_results,
            next_token: request.next_token.clone(),
            include: request.include.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListClustersOutput {
    pub clusters: Vec<String>,
    pub next_token: Option<String>,
}

#[async_trait]
pub trait EksClient: Send + Sync {
    async fn list_clusters(&self, input: ListClustersInput) -> EksResult<ListClustersOutput>;
}

/// Produces a client for each tool invocation.
#[async_trait]
pub trait EksClientFactory: Send + Sync {
    async fn create_client(&self) -> EksResult<Arc<dyn EksClient>>;
}

//! EKS client backed by the AWS SDK.

use async_trait::async_trait;
use aws_config::{AppName, BehaviorVersion, Region};
use aws_sdk_eks::operation::list_clusters::builders::ListClustersFluentBuilder;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::aws::client::{EksClient, EksClientFactory, ListClustersInput, ListClustersOutput};
use crate::config::ServerConfig;
use crate::constants::AWS_APP_NAME;
use crate::errors::{EksError, EksResult};

pub struct SdkEksClient {
    client: aws_sdk_eks::Client,
}

impl SdkEksClient {
    pub fn new(client: aws_sdk_eks::Client) -> Self {
        Self { client }
    }

    /// Builds the `ListClusters` request. Unset fields stay unset on the wire.
    pub fn list_clusters_request(&self, input: ListClustersInput) -> ListClustersFluentBuilder {
        let ListClustersInput {
            max_results,
            next_token,
            include,
        } = input;

        self.client
            .list_clusters()
            .set_max_results(max_results)
            .set_next_token(next_token)
            .set_include(include)
    }
}

#[async_trait]
impl EksClient for SdkEksClient {
    async fn list_clusters(&self, input: ListClustersInput) -> EksResult<ListClustersOutput> {
        let output = self
            .list_clusters_request(input)
            .send()
            .await
            .map_err(|e| EksError::Api(error_chain(&e)))?;

        Ok(ListClustersOutput {
            clusters: output.clusters().to_vec(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// Joins the `Display` text of an error and its sources with `": "`,
/// skipping sources whose text is already part of the message.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Loads the AWS configuration and builds a new SDK client on every call.
pub struct SdkEksClientFactory {
    config: ServerConfig,
}

impl SdkEksClientFactory {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EksClientFactory for SdkEksClientFactory {
    async fn create_client(&self) -> EksResult<Arc<dyn EksClient>> {
        let app_name = AppName::new(AWS_APP_NAME).map_err(|e| EksError::Client(e.to_string()))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).app_name(app_name);
        if let Some(region) = &self.config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.config.aws_profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &self.config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        Ok(Arc::new(SdkEksClient::new(aws_sdk_eks::Client::new(&sdk_config))))
    }
}

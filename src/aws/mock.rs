// Mock EKS client for testing
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::aws::client::{EksClient, EksClientFactory, ListClustersInput, ListClustersOutput};
use crate::errors::{EksError, EksResult};

/// Returns a fixed outcome and records every input it receives.
pub struct MockEksClient {
    outcome: Result<ListClustersOutput, String>,
    calls: Mutex<Vec<ListClustersInput>>,
}

impl MockEksClient {
    pub fn returning(clusters: Vec<&str>, next_token: Option<&str>) -> Self {
        Self {
            outcome: Ok(ListClustersOutput {
                clusters: clusters.into_iter().map(str::to_string).collect(),
                next_token: next_token.map(str::to_string),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ListClustersInput> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EksClient for MockEksClient {
    async fn list_clusters(&self, input: ListClustersInput) -> EksResult<ListClustersOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(input);
        }
        self.outcome.clone().map_err(EksError::Api)
    }
}

/// Hands out a shared [`MockEksClient`], or fails before any client exists.
pub struct MockEksClientFactory {
    client: Option<Arc<MockEksClient>>,
    error: String,
    created: AtomicUsize,
}

impl MockEksClientFactory {
    pub fn new(client: Arc<MockEksClient>) -> Self {
        Self {
            client: Some(client),
            error: String::new(),
            created: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            client: None,
            error: message.to_string(),
            created: AtomicUsize::new(0),
        }
    }

    pub fn clients_created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EksClientFactory for MockEksClientFactory {
    async fn create_client(&self) -> EksResult<Arc<dyn EksClient>> {
        match &self.client {
            Some(client) => {
                self.created.fetch_add(1, Ordering::SeqCst);
                Ok(client.clone())
            }
            None => Err(EksError::Client(self.error.clone())),
        }
    }
}

use eks_mcp_server::aws::{ListClustersInput, MockEksClient, MockEksClientFactory};
use eks_mcp_server::{
    ClusterListTool, ListClustersRequest, ListClustersResponse, LogContext, LogLevel, RequestLogger,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingLogger {
    entries: Mutex<Vec<(String, LogLevel, String)>>,
}

impl RecordingLogger {
    fn entries(&self) -> Vec<(String, LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl RequestLogger for RecordingLogger {
    fn log(&self, ctx: &LogContext, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((ctx.request_id.clone(), level, message.to_string()));
    }
}

struct Harness {
    tool: ClusterListTool,
    client: Arc<MockEksClient>,
    factory: Arc<MockEksClientFactory>,
    logger: Arc<RecordingLogger>,
}

fn harness(client: MockEksClient) -> Harness {
    let client = Arc::new(client);
    let factory = Arc::new(MockEksClientFactory::new(client.clone()));
    let logger = Arc::new(RecordingLogger::default());
    let tool = ClusterListTool::new(factory.clone(), logger.clone());
    Harness {
        tool,
        client,
        factory,
        logger,
    }
}

fn assert_count_matches(response: &ListClustersResponse) {
    assert_eq!(response.count, response.clusters.len());
    assert_eq!(response.content.len(), 1);
    assert_eq!(response.content[0].r#type, "text");
}

#[tokio::test]
async fn test_list_clusters_success() {
    let h = harness(MockEksClient::returning(
        vec!["cluster1", "cluster2", "cluster3"],
        None,
    ));

    let response = h
        .tool
        .list_clusters(LogContext::new("req-1"), ListClustersRequest::default())
        .await;

    assert!(!response.is_error);
    assert_eq!(response.clusters, vec!["cluster1", "cluster2", "cluster3"]);
    assert_eq!(response.count, 3);
    assert!(response.next_token.is_none());
    assert_eq!(response.content[0].text, "Successfully listed 3 EKS clusters");
    assert_count_matches(&response);

    assert_eq!(h.factory.clients_created(), 1);
    assert_eq!(h.client.calls(), vec![ListClustersInput::default()]);
}

#[tokio::test]
async fn test_list_clusters_empty() {
    let h = harness(MockEksClient::returning(vec![], None));

    let response = h
        .tool
        .list_clusters(LogContext::new("req-2"), ListClustersRequest::default())
        .await;

    assert!(!response.is_error);
    assert!(response.clusters.is_empty());
    assert_eq!(response.count, 0);
    assert_eq!(response.content[0].text, "Successfully listed 0 EKS clusters");
    assert_count_matches(&response);
}

#[tokio::test]
async fn test_list_clusters_error() {
    let h = harness(MockEksClient::failing("AWS API Error"));

    let response = h
        .tool
        .list_clusters(LogContext::new("req-3"), ListClustersRequest::default())
        .await;

    assert!(response.is_error);
    assert!(response.clusters.is_empty());
    assert_eq!(response.count, 0);
    assert!(response.next_token.is_none());
    assert_eq!(
        response.content[0].text,
        "Failed to list EKS clusters: AWS API Error"
    );
    assert_count_matches(&response);
}

#[tokio::test]
async fn test_list_clusters_with_pagination() {
    let h = harness(MockEksClient::returning(
        vec!["cluster1"],
        Some("next_page_token"),
    ));

    let request = ListClustersRequest {
        max_results: Some(10),
        next_token: Some("current_token".to_string()),
        include: Some(vec!["all".to_string()]),
    };
    let response = h.tool.list_clusters(LogContext::new("req-4"), request).await;

    assert!(!response.is_error);
    assert_eq!(response.clusters, vec!["cluster1"]);
    assert_eq!(response.count, 1);
    assert_eq!(response.next_token.as_deref(), Some("next_page_token"));

    let calls = h.client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        serde_json::to_value(&calls[0]).unwrap(),
        serde_json::json!({
            "maxResults": 10,
            "nextToken": "current_token",
            "include": ["all"]
        })
    );
}

#[tokio::test]
async fn test_only_supplied_parameters_are_forwarded() {
    let cases = vec![
        (
            ListClustersRequest {
                next_token: Some("t".to_string()),
                ..Default::default()
            },
            serde_json::json!({ "nextToken": "t" }),
        ),
        (
            ListClustersRequest {
                max_results: Some(1),
                include: Some(vec!["all".to_string()]),
                ..Default::default()
            },
            serde_json::json!({ "maxResults": 1, "include": ["all"] }),
        ),
        (
            ListClustersRequest {
                max_results: Some(100),
                next_token: Some("t".to_string()),
                ..Default::default()
            },
            serde_json::json!({ "maxResults": 100, "nextToken": "t" }),
        ),
    ];

    for (request, expected) in cases {
        let h = harness(MockEksClient::returning(vec![], None));
        h.tool.list_clusters(LogContext::unknown(), request).await;

        let calls = h.client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(serde_json::to_value(&calls[0]).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_success_logs_twice_at_info() {
    let h = harness(MockEksClient::returning(vec!["a", "b"], None));

    h.tool
        .list_clusters(LogContext::new("req-5"), ListClustersRequest::default())
        .await;

    let entries = h.logger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        (
            "req-5".to_string(),
            LogLevel::Info,
            "Listing EKS clusters".to_string()
        )
    );
    assert_eq!(
        entries[1],
        (
            "req-5".to_string(),
            LogLevel::Info,
            "Found 2 EKS clusters".to_string()
        )
    );
}

#[tokio::test]
async fn test_failure_logs_info_then_error() {
    let h = harness(MockEksClient::failing("ThrottlingException: Rate exceeded"));

    h.tool
        .list_clusters(LogContext::new("req-6"), ListClustersRequest::default())
        .await;

    let entries = h.logger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1, LogLevel::Info);
    assert_eq!(entries[1].1, LogLevel::Error);
    assert_eq!(
        entries[1].2,
        "Failed to list EKS clusters: ThrottlingException: Rate exceeded"
    );
    assert!(entries.iter().all(|(id, _, _)| id == "req-6"));
}

#[tokio::test]
async fn test_client_creation_failure_is_reported() {
    let factory = Arc::new(MockEksClientFactory::failing(
        "Unable to locate credentials",
    ));
    let logger = Arc::new(RecordingLogger::default());
    let tool = ClusterListTool::new(factory.clone(), logger.clone());

    let response = tool
        .list_clusters(LogContext::new("req-7"), ListClustersRequest::default())
        .await;

    assert!(response.is_error);
    assert_eq!(response.count, 0);
    assert_eq!(
        response.content[0].text,
        "Failed to list EKS clusters: Unable to locate credentials"
    );
    assert_eq!(factory.clients_created(), 0);
    assert_eq!(logger.entries().len(), 2);
}

#[tokio::test]
async fn test_client_is_created_per_invocation() {
    let h = harness(MockEksClient::returning(vec!["c"], None));

    for i in 0..3 {
        h.tool
            .list_clusters(LogContext::new(i.to_string()), ListClustersRequest::default())
            .await;
    }

    assert_eq!(h.factory.clients_created(), 3);
    assert_eq!(h.client.calls().len(), 3);
}

#[test]
fn test_request_deserializes_from_tool_arguments() {
    let request: ListClustersRequest = serde_json::from_value(serde_json::json!({
        "max_results": 10,
        "include": ["all"]
    }))
    .unwrap();

    assert_eq!(request.max_results, Some(10));
    assert!(request.next_token.is_none());
    assert_eq!(request.include, Some(vec!["all".to_string()]));

    let empty: ListClustersRequest = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(empty, ListClustersRequest::default());
}

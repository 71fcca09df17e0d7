// Tool names
pub const TOOL_LIST_CLUSTERS: &str = "list_clusters";

// Server identity
pub const SERVER_NAME: &str = "eks-mcp-server";
pub const AWS_APP_NAME: &str = "eks-mcp-server";

// Used when the host supplies no request id
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

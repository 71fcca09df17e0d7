pub mod aws;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use config::ServerConfig;
pub use errors::{EksError, EksResult};
pub use logging::{LogContext, LogLevel, RequestLogger, TracingLogger};
pub use mcp::EksMcpServer;
pub use tools::{ClusterListTool, ListClustersRequest, ListClustersResponse};

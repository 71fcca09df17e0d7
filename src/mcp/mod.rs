pub mod rmcp_server;

pub use rmcp_server::EksMcpServer;

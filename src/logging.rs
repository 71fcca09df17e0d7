//! Request-scoped logging.
//!
//! Every log line emitted while handling a tool call carries the MCP request
//! id so that lines from concurrent invocations can be told apart.

use rmcp::model::NumberOrString;
use rmcp::service::RequestContext;
use rmcp::RoleServer;

use crate::constants::UNKNOWN_REQUEST_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Correlation token for one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub request_id: String,
}

impl LogContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_REQUEST_ID)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&NumberOrString> for LogContext {
    fn from(id: &NumberOrString) -> Self {
        match id {
            NumberOrString::Number(n) => Self::new(n.to_string()),
            NumberOrString::String(s) => Self::new(s.to_string()),
        }
    }
}

impl From<&RequestContext<RoleServer>> for LogContext {
    fn from(ctx: &RequestContext<RoleServer>) -> Self {
        Self::from(&ctx.id)
    }
}

pub trait RequestLogger: Send + Sync {
    fn log(&self, ctx: &LogContext, level: LogLevel, message: &str);
}

/// Forwards to the global `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log(&self, ctx: &LogContext, level: LogLevel, message: &str) {
        log_with_request_id(ctx, level, message);
    }
}

pub fn log_with_request_id(ctx: &LogContext, level: LogLevel, message: &str) {
    let request_id = ctx.request_id.as_str();
    match level {
        LogLevel::Info => tracing::info!(request_id, "[request_id={}] {}", request_id, message),
        LogLevel::Error => tracing::error!(request_id, "[request_id={}] {}", request_id, message),
    }
}

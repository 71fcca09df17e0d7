use thiserror::Error;

/// Failure while talking to the EKS API.
///
/// Both variants display only the underlying detail; the tool adds its own
/// prefix when reporting.
#[derive(Debug, Error)]
pub enum EksError {
    #[error("{0}")]
    Client(String),

    #[error("{0}")]
    Api(String),
}

pub type EksResult<T> = Result<T, EksError>;

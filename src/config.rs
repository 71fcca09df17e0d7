/// Overrides applied when building EKS clients.
///
/// Anything left as `None` falls through to the standard AWS resolution
/// chain (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub aws_region: Option<String>,
    pub aws_profile: Option<String>,
    pub endpoint_url: Option<String>,
}

impl ServerConfig {
    pub fn new(aws_region: Option<String>, aws_profile: Option<String>) -> Self {
        Self {
            aws_region: aws_region.filter(|r| !r.is_empty()),
            aws_profile: aws_profile.filter(|p| !p.is_empty()),
            endpoint_url: None,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url.filter(|u| !u.is_empty());
        self
    }
}

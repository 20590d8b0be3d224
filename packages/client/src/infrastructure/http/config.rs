//! Gateway configuration.

/// Default site root
pub const DEFAULT_BASE_URL: &str = "https://www.facebook.com/";

/// Desktop browser user agent; the site serves a stripped-down page without the
/// token to unknown agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:31.0) Gecko/20100101 Firefox/31.0";

/// Settings for [`ReqwestChatGateway`](super::ReqwestChatGateway)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Site root, always ending with `/`
    pub base_url: String,
    pub user_agent: String,
}

impl GatewayConfig {
    /// Create a configuration for the given site root.
    ///
    /// A trailing `/` is appended when missing so relative endpoint paths join
    /// onto the root instead of replacing its last segment.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

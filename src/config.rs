use std::time::Duration;

pub const DEFAULT_PATH_PREFIX: &str = "/";
pub const DEFAULT_USER_AGENT: &str = "tempo-api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the issue-tracker host the add-on is mounted on.
/// Captured once at client construction; nothing here mutates afterwards.
#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub path_prefix: String,
    pub username: String,
    pub secret: String,
    pub strict_ssl: bool,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl JiraConfig {
    /// `base_url` carries protocol, host and port (`https://jira.example.com`);
    /// `secret` is the basic-auth password or API token for `username`.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            username: username.into(),
            secret: secret.into(),
            strict_ssl: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Extra path segment for hosts serving Jira under a context path.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Disabling strict SSL accepts invalid certificates on the transport.
    pub fn with_strict_ssl(mut self, strict: bool) -> Self {
        self.strict_ssl = strict;
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    /// Root URL for a versioned REST base mounted on this host, e.g.
    /// `rest_root("rest/tempo-timesheets/", "3")` on
    /// `https://jira.example.com` yields
    /// `https://jira.example.com/rest/tempo-timesheets/3/`.
    pub fn rest_root(&self, base: &str, version: &str) -> String {
        let mut prefix = self.path_prefix.trim_matches('/').to_string();
        if !prefix.is_empty() {
            prefix.push('/');
        }
        format!(
            "{}/{}{}{}/",
            self.base_url.trim_end_matches('/'),
            prefix,
            base.trim_start_matches('/'),
            version.trim_matches('/'),
        )
    }
}

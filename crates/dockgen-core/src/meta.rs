use crate::Platform;

/// Everything the user told us about the application, in entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMeta {
    pub platform: Platform,
    /// Image tag, taken verbatim (e.g. `1.21`, `3.12-slim`, or empty).
    pub version: String,
    pub labels: Vec<String>,
    pub setup: Vec<String>,
    pub ports: Vec<String>,
    /// Start command; empty means no `CMD` directive.
    pub start_command: String,
}

impl AppMeta {
    pub fn new(platform: Platform, version: impl Into<String>) -> Self {
        Self {
            platform,
            version: version.into(),
            labels: Vec::new(),
            setup: Vec::new(),
            ports: Vec::new(),
            start_command: String::new(),
        }
    }

    /// Base image reference, `platform:version`.
    pub fn base_image(&self) -> String {
        format!("{}:{}", self.platform, self.version)
    }

    /// Start command split on whitespace, ready for the exec-form `CMD`.
    pub fn start_args(&self) -> Vec<&str> {
        self.start_command.split_whitespace().collect()
    }
}

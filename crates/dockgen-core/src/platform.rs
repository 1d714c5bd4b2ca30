use std::fmt;
use std::str::FromStr;

/// Base image families a generated Dockerfile can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Node,
    Python,
    Rust,
    Go,
    Java,
    Ubuntu,
}

impl Platform {
    /// Every supported platform, in the order they are offered to the user.
    pub const ALL: [Platform; 6] = [
        Platform::Node,
        Platform::Python,
        Platform::Rust,
        Platform::Go,
        Platform::Java,
        Platform::Ubuntu,
    ];

    /// Image name used in the `FROM` directive.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Python => "python",
            Platform::Rust => "rust",
            Platform::Go => "go",
            Platform::Java => "java",
            Platform::Ubuntu => "ubuntu",
        }
    }

    /// Comma separated allow-list, e.g. for "valid platforms are: ..." hints.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = crate::Error;

    /// Case-insensitive exact match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .ok_or_else(|| crate::Error::UnknownPlatform {
                input: s.to_owned(),
            })
    }
}

/// Returns true when `input` names a supported platform, ignoring case.
pub fn is_valid_platform(input: &str) -> bool {
    input.parse::<Platform>().is_ok()
}

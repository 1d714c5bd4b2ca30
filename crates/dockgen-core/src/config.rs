use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dockgen.toml";

/// dockgen.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockgenConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the generated Dockerfile is written
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory used for both WORKDIR and the COPY destination
    #[serde(default = "default_workdir")]
    pub workdir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Emit ANSI colors in prompts and status messages
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            workdir: default_workdir(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl DockgenConfig {
    /// Load from dockgen.toml in the given directory, or return defaults if not found.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path,
            source: e,
        })
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("Dockerfile")
}

fn default_workdir() -> String {
    "/app".to_owned()
}

fn default_color() -> bool {
    true
}

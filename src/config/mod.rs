pub mod store;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, WallsyError};
use crate::utils::validation::{validate_path, Validate};

const CONFIG_FILE: &str = "config.json";
const CONFIG_DIR_ENV: &str = "WALLSY_CONFIG_DIR";

/// The wallsy directory layout, persisted as `config.json` in the config
/// dir. Every sourced image lands in `media_dir`; effect outputs in
/// `effects_dir`; wallpapers are copied to `wallpaper_dir` before being
/// set so the desktop never references a file wallsy later mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WallsyConfig {
    pub config_dir: PathBuf,
    pub media_dir: PathBuf,
    pub effects_dir: PathBuf,
    pub wallpaper_dir: PathBuf,
    pub save_dir: PathBuf,
}

impl WallsyConfig {
    /// Default layout rooted at the platform config and home dirs.
    pub fn default_layout() -> Result<Self> {
        let config_dir = default_config_dir()?;
        let home = dirs::home_dir().ok_or_else(|| WallsyError::ConfigError {
            message: "Could not determine the home directory".to_string(),
        })?;

        let media_dir = home.join("wallsy");

        Ok(Self {
            config_dir,
            effects_dir: media_dir.join("effects"),
            save_dir: media_dir.join("saved"),
            wallpaper_dir: home.join(".local/share/backgrounds"),
            media_dir,
        })
    }

    /// Load `config.json` from the resolved config dir, generating the
    /// default layout on first run. Always ensures the directories exist.
    pub fn load_or_init(override_dir: Option<&Path>) -> Result<Self> {
        let config_dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => match env::var_os(CONFIG_DIR_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => default_config_dir()?,
            },
        };

        let config_file = config_dir.join(CONFIG_FILE);

        let config = if config_file.exists() {
            Self::load(&config_file)?
        } else {
            tracing::debug!("No config at {}, generating defaults", config_file.display());
            let mut config = Self::default_layout()?;
            config.config_dir = config_dir;
            config.generate()?;
            config
        };

        config.validate()?;
        config.ensure_dirs()?;
        Ok(config)
    }

    pub fn load(config_file: &Path) -> Result<Self> {
        let raw = fs::read_to_string(config_file).map_err(|e| WallsyError::ConfigError {
            message: format!("Could not open {}: {}", config_file.display(), e),
        })?;

        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Write the layout out as `config.json`, overwriting any existing
    /// file. Returns the path written.
    pub fn generate(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.config_dir)?;

        let config_file = self.config_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_file, json)?;

        tracing::info!("Wrote config to {}", config_file.display());
        Ok(config_file)
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            &self.media_dir,
            &self.effects_dir,
            &self.wallpaper_dir,
            &self.save_dir,
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Validate for WallsyConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config_dir", &self.config_dir.to_string_lossy())?;
        validate_path("media_dir", &self.media_dir.to_string_lossy())?;
        validate_path("effects_dir", &self.effects_dir.to_string_lossy())?;
        validate_path("wallpaper_dir", &self.wallpaper_dir.to_string_lossy())?;
        validate_path("save_dir", &self.save_dir.to_string_lossy())?;
        Ok(())
    }
}

impl ConfigProvider for WallsyConfig {
    fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    fn effects_dir(&self) -> &Path {
        &self.effects_dir
    }

    fn wallpaper_dir(&self) -> &Path {
        &self.wallpaper_dir
    }

    fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}

fn default_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("wallsy"))
        .ok_or_else(|| WallsyError::ConfigError {
            message: "Could not determine the platform config directory".to_string(),
        })
}

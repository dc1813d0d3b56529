use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallsyError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Download failed for {url}: {reason}")]
    DownloadError { url: String, reason: String },

    #[error("Wallpaper error: {message}")]
    WallpaperError { message: String },

    #[error("Image pipeline error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Image,
    Filesystem,
    Configuration,
    Usage,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WallsyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::DownloadError { .. } => ErrorCategory::Network,
            Self::ImageError(_) | Self::ProcessingError { .. } => ErrorCategory::Image,
            Self::IoError(_) => ErrorCategory::Filesystem,
            Self::SerializationError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::UsageError { .. } => ErrorCategory::Usage,
            Self::WallpaperError { .. } => ErrorCategory::Desktop,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UsageError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Medium,
            Self::ApiError(_)
            | Self::DownloadError { .. }
            | Self::ImageError(_)
            | Self::ProcessingError { .. }
            | Self::WallpaperError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::ConfigError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) | Self::DownloadError { .. } => {
                "Check your network connection and that the URL points directly at an image resource".to_string()
            }
            Self::ImageError(_) => {
                "Verify the input file is a supported image format (png, jpeg, gif, bmp, webp)".to_string()
            }
            Self::IoError(_) => {
                "Check filesystem permissions and available disk space for the wallsy folders".to_string()
            }
            Self::SerializationError(_) | Self::ConfigError { .. } => {
                "Inspect ~/.config/wallsy/config.json, or delete it to regenerate the defaults".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value supplied for '{}' and re-run", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide a value for '{}' on the command line or in config.json", field)
            }
            Self::UsageError { .. } => {
                "Run 'wallsy --help' for the pipeline grammar and per-command options".to_string()
            }
            Self::WallpaperError { .. } => {
                "Desktop integration requires a GNOME session with 'gsettings' on PATH".to_string()
            }
            Self::ProcessingError { .. } => {
                "Source an image first with 'add' or 'random', then retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => format!("Could not reach the image server: {}", e),
            Self::DownloadError { url, reason } => {
                format!("Could not download an image from {}: {}", url, reason)
            }
            Self::ImageError(e) => format!("That file does not look like a usable image: {}", e),
            Self::IoError(e) => format!("A file operation failed: {}", e),
            Self::SerializationError(e) => format!("The wallsy config file is unreadable: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            Self::MissingConfigError { field } => format!("No value provided for {}", field),
            Self::UsageError { message } => message.clone(),
            Self::WallpaperError { message } => {
                format!("Could not talk to the desktop environment: {}", message)
            }
            Self::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WallsyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_are_medium_severity() {
        let err = WallsyError::UsageError {
            message: "unknown command 'blr'".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Usage);
    }

    #[test]
    fn test_download_error_display_names_url() {
        let err = WallsyError::DownloadError {
            url: "https://example.com/cat.jpg".to_string(),
            reason: "status 404".to_string(),
        };
        assert!(err.to_string().contains("https://example.com/cat.jpg"));
        assert!(err.user_friendly_message().contains("404"));
    }

    #[test]
    fn test_wallpaper_suggestion_mentions_gnome() {
        let err = WallsyError::WallpaperError {
            message: "gsettings not found".to_string(),
        };
        assert!(err.recovery_suggestion().contains("GNOME"));
    }
}

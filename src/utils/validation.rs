use crate::utils::error::{Result, WallsyError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                // A bare host cannot be a direct image resource.
                if url.path() == "" || url.path() == "/" {
                    return Err(WallsyError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: "URL must link directly to an image resource".to_string(),
                    });
                }
                Ok(())
            }
            scheme => Err(WallsyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WallsyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url", "https://example.com/cat.jpg").is_ok());
        assert!(validate_url("url", "http://example.com/photos/1.png").is_ok());
        assert!(validate_url("url", "").is_err());
        assert!(validate_url("url", "invalid-url").is_err());
        assert!(validate_url("url", "ftp://example.com/cat.jpg").is_err());
        // bare host, no image path
        assert!(validate_url("url", "https://example.com").is_err());
        assert!(validate_url("url", "https://example.com/").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("radius", 5u32, 1, 100).is_ok());
        assert!(validate_range("radius", 0u32, 1, 100).is_err());
        assert!(validate_range("levels", 300u32, 2, 255).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("interval", 60, 1).is_ok());
        assert!(validate_positive_number("interval", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("keyword", "mountain").is_ok());
        assert!(validate_non_empty_string("keyword", "   ").is_err());
    }
}

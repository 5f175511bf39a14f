//! Input validation for CLI arguments before they reach the API.

use crate::error::CliError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

pub fn validate_host(host: &str) -> crate::Result<()> {
    if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
        return Err(CliError::InvalidArguments(format!(
            "Invalid host '{}': expected a hostname or IP address",
            host
        ))
        .into());
    }
    Ok(())
}

pub fn parse_port(value: &str) -> crate::Result<u16> {
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(CliError::InvalidArguments(format!(
            "Invalid port '{}': expected a number between 1 and 65535",
            value
        ))
        .into()),
    }
}

/// Star ratings run from 0 to 5.
pub fn validate_star(star: u8) -> crate::Result<()> {
    if star > 5 {
        return Err(CliError::InvalidArguments(format!(
            "Invalid rating {}: must be between 0 and 5",
            star
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:41595").is_ok());
        assert!(validate_url("https://en.eagle.cool/").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("en.eagle.cool").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("localhost").is_ok());
        assert!(validate_host("192.168.0.10").is_ok());
        assert!(validate_host("").is_err());
        assert!(validate_host("http://localhost").is_err());
        assert!(validate_host("my host").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("41595").unwrap(), 41595);
        assert!(parse_port("0").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("abc").is_err());
    }

    #[test]
    fn test_validate_star() {
        assert!(validate_star(0).is_ok());
        assert!(validate_star(5).is_ok());
        assert!(validate_star(6).is_err());
    }
}

//! Custom validation functions for CLI arguments

use std::fs;
use std::path::PathBuf;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(' ') {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host == "localhost" || host == "0.0.0.0" || host.starts_with("127.") {
        return Ok(host.to_string());
    }

    // Basic IPv4 validation
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        let parts: Vec<&str> = host.split('.').collect();
        if parts.len() != 4 {
            return Err(format!("Invalid IPv4 address: '{}'", host));
        }
        for part in parts {
            part.parse::<u8>()
                .map_err(|_| format!("Invalid IPv4 address: '{}'", host))?;
        }
        return Ok(host.to_string());
    }

    // Otherwise treat as a hostname
    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port_valid() {
        assert_eq!(validate_port("8080").unwrap(), 8080);
        assert_eq!(validate_port("1").unwrap(), 1);
        assert_eq!(validate_port("65535").unwrap(), 65535);
    }

    #[test]
    fn test_validate_port_invalid() {
        assert!(validate_port("0").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("abc").is_err());
    }

    #[test]
    fn test_validate_host_address_common_values() {
        assert_eq!(validate_host_address("localhost").unwrap(), "localhost");
        assert_eq!(validate_host_address("0.0.0.0").unwrap(), "0.0.0.0");
        assert_eq!(validate_host_address("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(
            validate_host_address("192.168.1.100").unwrap(),
            "192.168.1.100"
        );
    }

    #[test]
    fn test_validate_host_address_invalid() {
        assert!(validate_host_address("").is_err());
        assert!(validate_host_address("has space").is_err());
        assert!(validate_host_address("300.1.1.1").is_err());
        assert!(validate_host_address("1.2.3").is_err());
    }

    #[test]
    fn test_validate_config_file_path_missing() {
        assert!(validate_config_file_path("/nonexistent/config.toml").is_err());
    }
}

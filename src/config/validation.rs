//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the listener address is usable (non-empty host)
//! - Check static file settings are coherent (prefix format, pairing)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `server.host` is empty.
    EmptyHost,
    /// `static_files.prefix` is set but does not start with '/'.
    StaticPrefixNotAbsolute(String),
    /// Exactly one of `static_files.prefix` / `static_files.path` is set.
    StaticHalfConfigured,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyHost => write!(f, "server.host must not be empty"),
            ValidationError::StaticPrefixNotAbsolute(prefix) => {
                write!(f, "static_files.prefix {:?} must start with '/'", prefix)
            }
            ValidationError::StaticHalfConfigured => write!(
                f,
                "static_files requires both prefix and path; only one is set"
            ),
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    let prefix = config
        .static_files
        .prefix
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let path = config
        .static_files
        .path
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty());

    if let Some(prefix) = prefix {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::StaticPrefixNotAbsolute(prefix.to_string()));
        }
    }
    if prefix.is_some() != path.is_some() {
        errors.push(ValidationError::StaticHalfConfigured);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

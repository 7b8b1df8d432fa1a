use crate::utils::error::{BenchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
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
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rejects `${VAR}` placeholders that survived environment substitution.
pub fn validate_no_placeholder(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Unresolved environment variable".to_string(),
        });
    }
    Ok(())
}

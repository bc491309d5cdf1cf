use serde::Deserialize;

use crate::error::AppError;
use crate::repository::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Offset/limit pagination accepted by every list endpoint.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of records to skip.
    #[param(example = 0)]
    pub skip: Option<u64>,
    /// Maximum number of records to return (default 100).
    #[param(example = 100)]
    pub limit: Option<u64>,
}

/// Largest offset or limit the storage layer can bind (signed 64-bit).
pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

impl ListQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [("skip", self.skip), ("limit", self.limit)] {
            if value.is_some_and(|v| v > MAX_PAGE_VALUE) {
                return Err(AppError::Validation(format!(
                    "{field} must be at most {MAX_PAGE_VALUE}"
                )));
            }
        }
        Ok(())
    }

    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(DEFAULT_SKIP)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Validate a trimmed name (1-256 Unicode characters).
pub fn validate_name(name: &str, what: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{what} must be 1-256 characters"
        )));
    }
    Ok(())
}

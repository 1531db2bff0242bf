//! Advert title and description
//!
//! Both are required, non-blank, and bounded by their column widths.
//! Values are stored exactly as supplied.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

pub const TITLE_MAX_LENGTH: usize = 80;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

fn bounded(value: String, field: &str, max: usize) -> AppResult<String> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} cannot be empty", field)));
    }

    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(value)
}

/// Advert title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertTitle(String);

impl AdvertTitle {
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        bounded(title.into(), "Title", TITLE_MAX_LENGTH).map(Self)
    }

    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvertTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Advert description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertDescription(String);

impl AdvertDescription {
    pub fn new(description: impl Into<String>) -> AppResult<Self> {
        bounded(description.into(), "Description", DESCRIPTION_MAX_LENGTH).map(Self)
    }

    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

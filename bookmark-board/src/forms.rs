//! Form validation applied before store calls.
//!
//! The store accepts whatever it is given. These forms are the gate the
//! dialogs go through: a column needs a title, a row needs a URL that parses
//! once it has a scheme, and an optional icon has to be a small image.

use crate::error::{BoardError, Result};
use crate::types::Image;
use serde::{Deserialize, Serialize};
use url::Url;

/// Largest icon accepted, in bytes
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const DEFAULT_SCHEME: &str = "https://";

/// Submitted column dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnForm {
    pub title: String,
}

impl ColumnForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn validate(self) -> Result<Self> {
        if self.title.trim().is_empty() {
            return Err(BoardError::invalid_value("title", "Title is required."));
        }
        Ok(self)
    }
}

/// Submitted row dialog, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowForm {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// A row form that passed validation, with its URL and name normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRow {
    pub name: String,
    pub url: String,
    pub image: Option<Image>,
}

impl RowForm {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn validate(self) -> Result<ValidRow> {
        let url = normalize_url(&self.url)?;
        let parsed =
            Url::parse(&url).map_err(|_| BoardError::invalid_value("url", "Value must be a valid URL."))?;

        // Only an empty name falls back to the host; whitespace is kept as typed
        let name = if self.name.is_empty() {
            parsed.host_str().unwrap_or_default().to_string()
        } else {
            self.name
        };

        if let Some(image) = &self.image {
            validate_image(image)?;
        }

        Ok(ValidRow {
            name,
            url,
            image: self.image,
        })
    }
}

/// Prefix `https://` unless the value already names http or https
fn normalize_url(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BoardError::invalid_value("url", "URL is required."));
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME}{raw}"))
    }
}

fn validate_image(image: &Image) -> Result<()> {
    if !image.content_type.starts_with("image/") {
        return Err(BoardError::invalid_value("image", "Only image files are accepted"));
    }
    if image.len() > MAX_IMAGE_BYTES {
        return Err(BoardError::invalid_value("image", "File size must be less than 5mb."));
    }
    Ok(())
}

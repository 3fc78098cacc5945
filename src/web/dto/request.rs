//! Request DTOs for Web API.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::{Result, ShareError};

/// Message for a missing or empty text share.
pub const NO_TEXT: &str = "No text provided";

/// Text share request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SendTextRequest {
    /// Text to share. Must be non-empty.
    #[serde(default)]
    pub text: Option<String>,
}

impl SendTextRequest {
    /// The text, rejecting a missing or empty value.
    pub fn into_text(self) -> Result<String> {
        self.text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ShareError::Validation(NO_TEXT.to_string()))
    }
}

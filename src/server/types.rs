//! Response bodies that are not plain colors.

use serde::{Deserialize, Serialize};

use crate::Color;

/// `{"palette": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResponse {
    pub palette: Vec<Color>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

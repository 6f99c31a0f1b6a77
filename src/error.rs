#[derive(thiserror::Error, Debug)]
pub enum CastError {
    #[error("Invalid hex color length {len}: expected 3 or 6 digits")]
    InvalidHexLength { len: usize },

    #[error("Invalid hex color '{hex}'")]
    InvalidHex { hex: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


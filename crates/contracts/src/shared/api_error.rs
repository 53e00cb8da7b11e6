use serde::{Deserialize, Serialize};

/// Error body returned by the API when a request cannot be served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error kind (e.g. "load_error")
    pub kind: String,
    /// Human-readable description
    pub message: String,
}

impl ApiError {
    pub const LOAD_ERROR: &'static str = "load_error";

    pub fn load_error(message: impl Into<String>) -> Self {
        Self {
            kind: Self::LOAD_ERROR.to_string(),
            message: message.into(),
        }
    }

    pub fn is_load_error(&self) -> bool {
        self.kind == Self::LOAD_ERROR
    }
}

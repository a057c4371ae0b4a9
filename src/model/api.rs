use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub ok: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Successful response envelope; the payload's fields sit next to `ok`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiOk<T> {
    /// Always `true`.
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiOk<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Payload for operations that only report a human readable outcome.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Payload returned after creating a row.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct IdDto {
    pub id: i32,
}

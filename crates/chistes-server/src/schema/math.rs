//! Math endpoint request/response types.

use serde::{Deserialize, Serialize};

/// Query string of `GET /increment`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncrementQuery {
    pub number: Option<String>,
}

/// Response of `GET /lcm`.
#[derive(Debug, Clone, Serialize)]
pub struct LcmResponse {
    pub mcm: i64,
}

/// Response of `GET /increment`.
#[derive(Debug, Clone, Serialize)]
pub struct IncrementResponse {
    #[serde(rename = "numeroIncrementado")]
    pub numero_incrementado: i64,
}

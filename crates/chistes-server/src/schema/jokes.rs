//! Joke request/response types.

use chistes_core::Joke;
use serde::{Deserialize, Serialize};

/// Query string of `GET /chistes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeQuery {
    /// "Chuck" or "Dad"; a random provider is used when absent.
    pub tipo: Option<String>,
}

/// Body of `POST /chistes` and `PUT /chistes/{number}`.
///
/// Parsed leniently: a malformed body or a non-string `texto` reads as
/// "no text" so the handler can answer 400 with a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeTextRequest {
    #[serde(default)]
    pub texto: Option<String>,
}

impl JokeTextRequest {
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The text if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.texto.as_deref().filter(|t| !t.is_empty())
    }
}

/// Response of `GET /chistes`.
#[derive(Debug, Clone, Serialize)]
pub struct FetchedJokeResponse {
    pub chiste: String,
}

/// Response of a successful create or update.
#[derive(Debug, Clone, Serialize)]
pub struct SavedJokeResponse {
    pub mensaje: String,
    pub chiste: Joke,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_body_parsing() {
        assert_eq!(JokeTextRequest::from_body(br#"{"texto":"hola"}"#).text(), Some("hola"));
        assert_eq!(JokeTextRequest::from_body(br#"{"texto":""}"#).text(), None);
        assert_eq!(JokeTextRequest::from_body(br#"{}"#).text(), None);
        assert_eq!(JokeTextRequest::from_body(br#"{"texto":5}"#).text(), None);
        assert_eq!(JokeTextRequest::from_body(b"not json").text(), None);
        assert_eq!(JokeTextRequest::from_body(b"").text(), None);
    }
}

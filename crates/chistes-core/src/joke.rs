//! The joke record and the upstream providers a joke can come from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sequential joke identifier.
///
/// Serialized as a bare integer. Numbers are assigned by the store from a
/// high-water mark, so a number freed by deleting its joke is not reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeNumber(pub i64);

impl JokeNumber {
    /// The number given to the first joke in an empty store.
    pub const FIRST: JokeNumber = JokeNumber(1);

    /// The number following this one.
    pub fn next(self) -> JokeNumber {
        JokeNumber(self.0 + 1)
    }
}

impl fmt::Display for JokeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored joke.
///
/// Field names follow the public JSON API (`numero`, `texto`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub numero: JokeNumber,
    pub texto: String,
}

/// Rejects empty joke text. Presence is the only check made.
pub fn validate_text(text: &str) -> Result<(), CoreError> {
    if text.is_empty() {
        return Err(CoreError::EmptyText);
    }
    Ok(())
}

/// Upstream joke source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Chuck Norris jokes (api.chucknorris.io).
    Chuck,
    /// Dad jokes (icanhazdadjoke.com).
    Dad,
}

impl Provider {
    /// Picks a provider with a fair coin flip. No state survives the call.
    pub fn random() -> Provider {
        if rand::random::<bool>() {
            Provider::Chuck
        } else {
            Provider::Dad
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Chuck => "Chuck",
            Provider::Dad => "Dad",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    /// Exact, case-sensitive match on "Chuck" or "Dad".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Chuck" => Ok(Provider::Chuck),
            "Dad" => Ok(Provider::Dad),
            other => Err(CoreError::UnknownProvider {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parse_is_exact() {
        assert_eq!("Chuck".parse::<Provider>(), Ok(Provider::Chuck));
        assert_eq!("Dad".parse::<Provider>(), Ok(Provider::Dad));
        assert!("chuck".parse::<Provider>().is_err());
        assert_eq!(
            "Invalid".parse::<Provider>(),
            Err(CoreError::UnknownProvider {
                name: "Invalid".into()
            })
        );
    }

    #[test]
    fn random_provider_hits_both() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Provider::random());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn joke_serializes_with_api_names() {
        let joke = Joke {
            numero: JokeNumber(3),
            texto: "hola".into(),
        };
        let json = serde_json::to_value(&joke).unwrap();
        assert_eq!(json, serde_json::json!({ "numero": 3, "texto": "hola" }));
    }

    #[test]
    fn text_validation() {
        assert!(validate_text("x").is_ok());
        assert_eq!(validate_text(""), Err(CoreError::EmptyText));
        assert!(validate_text("   ").is_ok());
    }
}

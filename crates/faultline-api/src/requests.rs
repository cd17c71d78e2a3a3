//! Request types for the API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::paths::THROW_PARAM;

/// Query accepted by the failure-capable endpoints
///
/// The flag stays a raw string: anything other than a case-insensitive
/// `"true"` means "do not fail", including a missing parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThrowQuery {
    #[serde(rename = "isThrowException", skip_serializing_if = "Option::is_none")]
    pub is_throw_exception: Option<String>,
}

impl ThrowQuery {
    /// Query that asks the endpoint to fail (or not)
    #[must_use]
    pub fn new(throw: bool) -> Self {
        Self {
            is_throw_exception: Some(throw.to_string()),
        }
    }

    /// Build from decoded query pairs, keeping the first flag occurrence
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let is_throw_exception = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == THROW_PARAM)
            .map(|(_, value)| value.into());
        Self { is_throw_exception }
    }

    /// Whether the caller asked for a failure
    #[must_use]
    pub fn should_throw(&self) -> bool {
        parse_flag(self.is_throw_exception.as_deref())
    }
}

/// Lenient boolean parsing: only a case-insensitive `"true"` is true
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("tRuE")));

        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(Some(" true")));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let query = ThrowQuery::from_pairs([
            ("other", "x"),
            ("isThrowException", "true"),
            ("isThrowException", "false"),
        ]);
        assert!(query.should_throw());

        let query = ThrowQuery::from_pairs(Vec::<(String, String)>::new());
        assert!(!query.should_throw());
    }

    #[test]
    fn test_query_serialization() {
        let json = serde_json::to_value(ThrowQuery::new(true)).unwrap();
        assert_eq!(json["isThrowException"], "true");

        let json = serde_json::to_value(ThrowQuery::default()).unwrap();
        assert!(json.get("isThrowException").is_none());
    }
}

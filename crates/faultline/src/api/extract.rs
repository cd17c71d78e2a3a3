//! Request extractors

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use faultline_api::requests::ThrowQuery;
use url::form_urlencoded;

/// The `isThrowException` flag of a request
///
/// Never rejects: a missing, repeated, or malformed query reads as `false`
/// unless its first flag occurrence is a case-insensitive `"true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowFlag(pub bool);

impl<S> FromRequestParts<S> for ThrowFlag
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts
            .uri
            .query()
            .map(|raw| ThrowQuery::from_pairs(form_urlencoded::parse(raw.as_bytes())))
            .unwrap_or_default();
        Ok(Self(query.should_throw()))
    }
}

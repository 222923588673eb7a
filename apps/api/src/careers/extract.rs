//! Request body extraction for `POST /recommend-careers`.
//!
//! A body with `Content-Type: application/json` goes through axum's `Json`.
//! A body with no content type at all is still parsed as JSON. Any other
//! content type is rejected with 415.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde_json::error::Category;

use crate::errors::AppError;
use crate::models::career::SkillInput;

/// Validated `{ "skills": [string, ...] }` body.
#[derive(Debug)]
pub struct SkillPayload(pub SkillInput);

#[async_trait]
impl<S> FromRequest<S> for SkillPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(input) = Json::<SkillInput>::from_request(req, state).await?;
            return Ok(Self(input));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        parse_skill_input(&bytes).map(Self)
    }
}

fn parse_skill_input(bytes: &[u8]) -> Result<SkillInput, AppError> {
    serde_json::from_slice(bytes).map_err(|e| {
        let message = format!("Failed to parse the request body as JSON: {e}");
        match e.classify() {
            Category::Data => AppError::UnprocessableEntity(message),
            Category::Syntax | Category::Eof | Category::Io => AppError::Validation(message),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let input = parse_skill_input(br#"{"skills": ["React", "go"]}"#).unwrap();
        assert_eq!(input.skills, vec!["React", "go"]);
    }

    #[test]
    fn test_parse_wrong_shape_is_unprocessable() {
        for body in [&br#"{}"#[..], br#"{"skills": [1]}"#, br#"["react"]"#] {
            assert!(matches!(
                parse_skill_input(body),
                Err(AppError::UnprocessableEntity(_))
            ));
        }
    }

    #[test]
    fn test_parse_bad_syntax_is_validation() {
        for body in [&br#"{"skills": ["#[..], b"", b"skills=react"] {
            assert!(matches!(
                parse_skill_input(body),
                Err(AppError::Validation(_))
            ));
        }
    }
}

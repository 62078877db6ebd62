use actix_web::HttpRequest;

use crate::errors::AppError;
use crate::models::chapter::ChapterForm;
use crate::validate;

/// `{id}` path segment; missing, unparsable or negative ids become 0.
pub fn path_id(req: &HttpRequest) -> i64 {
    req.match_info()
        .get("id")
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id >= 0)
        .unwrap_or(0)
}

/// Permissive integer parsing: anything unparsable yields `default`.
pub fn parse_int(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.parse::<i64>().ok()).unwrap_or(default)
}

/// Decode a JSON body into a chapter form and run the rule set.
///
/// Only the first violation message is reported.
pub fn decode_form(body: &[u8]) -> Result<ChapterForm, AppError> {
    let form: ChapterForm = serde_json::from_slice(body)?;
    if let Err(violations) = validate::validate_chapter(&form) {
        if let Some(msg) = validate::first_message(&violations) {
            return Err(AppError::Validation(msg));
        }
    }
    Ok(form)
}

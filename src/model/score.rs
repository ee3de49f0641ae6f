use crate::error::AppError;

/// Parse a relative-to-par token such as `"-7"`, `"+3"` or `"E"`.
///
/// # Errors
///
/// Returns `AppError::Parse` for anything that is not `E` or a signed integer, including the
/// empty token.
pub fn parse_score(token: &str) -> Result<i32, AppError> {
    let token = token.trim();
    if token == "E" {
        return Ok(0);
    }
    let digits = token.strip_prefix('+').unwrap_or(token);
    digits
        .parse::<i32>()
        .map_err(|e| AppError::Parse(format!("score token '{token}': {e}")))
}

/// Scoring policy for group totals: a token that does not parse counts as even par.
#[must_use]
pub fn score_or_zero(token: &str) -> i32 {
    match parse_score(token) {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("Treating unparsable score as even: {e}");
            0
        }
    }
}

/// `+N`, `-N` or `E`.
#[must_use]
pub fn format_relative(score: i32) -> String {
    match score {
        s if s > 0 => format!("+{s}"),
        0 => "E".to_string(),
        s => s.to_string(),
    }
}

/// The upstream token is already display-ready (`E`, `+N`, `-N`), so it is shown as is.
#[must_use]
pub fn format_score_token(token: &str) -> &str {
    token.trim()
}

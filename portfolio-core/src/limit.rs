/// How many comments to request when the visitor never chose a limit.
pub const DEFAULT_COMMENT_LIMIT: u64 = 10;

/// Parses a user-entered or persisted comment limit.
///
/// Only positive integers are accepted.
#[must_use]
pub fn parse_limit(input: &str) -> Option<u64> {
    match input.trim().parse::<u64>() {
        Ok(limit) if limit > 0 => Some(limit),
        _ => None,
    }
}

/// The limit to use for the next load, falling back to the default if
/// nothing valid has been persisted.
#[must_use]
pub fn limit_or_default(stored: Option<&str>) -> u64 {
    stored.and_then(parse_limit).unwrap_or(DEFAULT_COMMENT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_limit("3"), Some(3));
        assert_eq!(parse_limit(" 25 "), Some(25));
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-4"), None);
        assert_eq!(parse_limit("ten"), None);
        assert_eq!(parse_limit(""), None);
    }

    #[test]
    fn falls_back_to_the_default() {
        assert_eq!(limit_or_default(None), DEFAULT_COMMENT_LIMIT);
        assert_eq!(limit_or_default(Some("nonsense")), DEFAULT_COMMENT_LIMIT);
        assert_eq!(limit_or_default(Some("7")), 7);
    }
}

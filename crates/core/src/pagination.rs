//! Pagination clamping shared by list queries.

/// Default number of rows returned by a list endpoint.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of rows returned by a list endpoint.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a user-provided limit to `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 50, 200), 50);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 50, 200), 200);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), 50, 200), 1);
        assert_eq!(clamp_limit(Some(0), 50, 200), 1);
    }

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(25)), 25);
    }
}

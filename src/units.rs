//! Seconds/milliseconds conversion for the river update rate.

const MILLIS_PER_SEC: u64 = 1000;

/// Seconds to milliseconds. `None` on overflow.
pub fn secs_to_millis(secs: u64) -> Option<u64> {
    secs.checked_mul(MILLIS_PER_SEC)
}

/// Milliseconds to whole seconds, truncating.
pub fn millis_to_secs(millis: u64) -> u64 {
    millis / MILLIS_PER_SEC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_partial_seconds() {
        assert_eq!(millis_to_secs(1500), 1);
        assert_eq!(millis_to_secs(999), 0);
        assert_eq!(millis_to_secs(0), 0);
    }

    #[test]
    fn test_inverse_for_whole_seconds() {
        for secs in [0, 1, 30, 3600, 86_400] {
            let millis = secs_to_millis(secs).unwrap();
            assert_eq!(millis_to_secs(millis), secs);
        }
    }

    #[test]
    fn test_overflow_is_none() {
        assert!(secs_to_millis(u64::MAX).is_none());
        assert_eq!(secs_to_millis(u64::MAX / 1000), Some(u64::MAX / 1000 * 1000));
    }
}

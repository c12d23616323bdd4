//! Property-based tests for the tweet content rule

use proptest::prelude::*;
use tweet_api::shared::{validate_content, SharedError, MAX_TWEET_CHARS};

proptest! {
    #[test]
    fn test_content_within_bounds_is_accepted(content in "\\PC{1,280}") {
        prop_assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn test_content_over_limit_is_rejected(content in "\\PC{281,400}") {
        let is_invalid = matches!(
            validate_content(&content),
            Err(SharedError::InvalidContent { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn test_rule_counts_chars_not_bytes(c in any::<char>(), extra in 0usize..3) {
        let content: String = std::iter::repeat(c).take(MAX_TWEET_CHARS + extra).collect();
        prop_assert_eq!(validate_content(&content).is_ok(), extra == 0);
    }
}

#[test]
fn test_empty_content_is_rejected() {
    assert!(matches!(
        validate_content(""),
        Err(SharedError::InvalidContent { chars: 0, .. })
    ));
}

//! Canonical permission-name composition

use crate::segment::segment;

/// Compose the initial canonical name for a slot.
///
/// The identity is segmented; prefix tokens are joined with periods and
/// placed verbatim ahead of it. Tokens are not segmented or cased here —
/// the `parse_prefix` pipeline stage reprocesses the whole name when
/// active. With no tokens the result is just the segmented identity.
///
/// A declaration carrying more than one prefix annotation collapses to the
/// first at the discovery boundary, so this function always receives a
/// single token list.
pub fn compose(prefix_tokens: &[String], identity: &str) -> String {
    let base = segment(identity);
    if prefix_tokens.is_empty() {
        base
    } else {
        format!("{}.{}", prefix_tokens.join("."), base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_no_prefix_is_segmented_identity() {
        assert_eq!(compose(&[], "AccountRead"), "account.read");
    }

    #[test]
    fn test_single_token_kept_verbatim() {
        assert_eq!(
            compose(&tokens(&["DataUser"]), "LorescopesRead"),
            "DataUser.lorescopes.read"
        );
        assert_eq!(compose(&tokens(&["Test"]), "SampleProperty"), "Test.sample.property");
    }

    #[test]
    fn test_multiple_tokens_joined_with_periods() {
        assert_eq!(
            compose(&tokens(&["Data", "User"]), "SomethingRead"),
            "Data.User.something.read"
        );
    }
}

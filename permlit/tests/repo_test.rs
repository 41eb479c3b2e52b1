//! End-to-end tests for the `permissions_repo` attribute macro

use permlit::permissions_repo;

#[permissions_repo]
pub mod repo {
    #[prefix("Test")]
    pub static SampleProperty: &str = "";

    #[prefix("Data", "User")]
    pub static SomethingRead: &str = "";

    pub static AccountRead: &str = "";

    // The repo flavor never emits an enumeration function; if it did, this
    // passthrough definition would collide and the test would not compile.
    pub fn all_permissions() -> &'static [&'static str] {
        &[]
    }
}

#[test]
fn test_repo_keeps_prefix_tokens_verbatim() {
    assert_eq!(repo::SampleProperty, "Test.sample.property");
    assert_eq!(repo::SomethingRead, "Data.User.something.read");
}

#[test]
fn test_repo_segments_and_lowercases_identity() {
    assert_eq!(repo::AccountRead, "account.read");
}

#[test]
fn test_repo_has_no_enumeration_function() {
    assert!(repo::all_permissions().is_empty());
}

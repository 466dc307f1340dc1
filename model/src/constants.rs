use std::time::Duration;

/// Helper macro to avoid retyping the API group of the Redis Enterprise operator when creating
/// further string constants from it. When given no parameters, this returns the group. When given
/// a string literal parameter it adds `/parameter` to the end.
macro_rules! redislabs {
    () => {
        "app.redislabs.com"
    };
    ($s:literal) => {
        concat!(redislabs!(), "/", $s)
    };
}

// API identifiers
pub const GROUP: &str = redislabs!();
pub const VERSION: &str = "v1alpha1";
pub const API_VERSION: &str = redislabs!("v1alpha1");

// Server-side apply
pub const DEFAULT_FIELD_MANAGER: &str = "terraform";

// Deletion
pub const DELETION_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DELETION_TIMEOUT: Duration = Duration::from_secs(300);

#[test]
fn redislabs_constants_macro_test() {
    assert_eq!("app.redislabs.com", redislabs!());
    assert_eq!("app.redislabs.com/v1alpha1", API_VERSION);
    assert_eq!("app.redislabs.com/foo", redislabs!("foo"));
}

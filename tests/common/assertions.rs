//! Domain-specific assertion macros for postsearch harnesses.
//!
//! These add context-rich failure messages that make it clear which search
//! invariant was violated.

// ---------------------------------------------------------------------------
// Match set assertions
// ---------------------------------------------------------------------------

/// Assert that a `MatchSet` lists exactly the given ids, in order, and that
/// its post map holds exactly those ids.
///
/// ```rust
/// assert_order!(result, ["id2", "id1"]);
/// ```
#[macro_export]
macro_rules! assert_order {
    ($result:expr, [$($id:expr),* $(,)?]) => {{
        let result: &postsearch_core::MatchSet = &$result;
        let expected: Vec<&str> = vec![$($id),*];
        let actual: Vec<&str> = result.order.iter().map(String::as_str).collect();
        if actual != expected {
            panic!(
                "assert_order! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
        let mut keys: Vec<&str> = result.posts.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut wanted = expected.clone();
        wanted.sort_unstable();
        if keys != wanted {
            panic!(
                "assert_order! failed: post map does not match order.\n  order: {:?}\n  map keys: {:?}",
                expected, keys
            );
        }
    }};
}

/// Assert that a `MatchSet` is empty in both its order and its post map.
#[macro_export]
macro_rules! assert_no_matches {
    ($result:expr) => {{
        let result: &postsearch_core::MatchSet = &$result;
        if !result.order.is_empty() || !result.posts.is_empty() {
            panic!(
                "assert_no_matches! failed:\n  order: {:?}\n  map keys: {:?}",
                result.order,
                result.posts.keys().collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that a `MatchSet` is ordered by non-decreasing `create_at`.
#[macro_export]
macro_rules! assert_time_ordered {
    ($result:expr) => {{
        let result: &postsearch_core::MatchSet = &$result;
        let stamps: Vec<i64> = result.iter().map(|(_, p)| p.create_at).collect();
        if stamps.windows(2).any(|w| w[0] > w[1]) {
            panic!(
                "assert_time_ordered! failed: timestamps out of order: {:?}",
                stamps
            );
        }
    }};
}

//! Custom assertion macros for CLI and scenario tests.

/// Assert that combined stdout/stderr contains a substring.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($needle),
            "Expected output to contain '{}'.\nOutput:\n{}",
            $needle,
            output
        );
    };
}

/// Assert that a parsed lookup file maps `key` to `slug`.
#[macro_export]
macro_rules! assert_lookup_entry {
    ($lookup:expr, $key:expr, $slug:expr) => {
        assert_eq!(
            $lookup[$key], $slug,
            "Expected lookup['{}'] == '{}'.\nLookup:\n{:#}",
            $key, $slug, $lookup
        );
    };
}

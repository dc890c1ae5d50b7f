//! Debug-only mathematical assertion helpers.
//!
//! The algorithms use these helpers to keep invariants explicit while ensuring
//! release builds remain unaffected.

/// Debug-asserts a mathematical invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Mathematical invariant violated: {}", message);
}

/// Debug-asserts that `components` partitions `0..vertex_count`.
pub(crate) fn assert_partition(components: &[Vec<usize>], vertex_count: usize) {
    if cfg!(debug_assertions) {
        let mut seen = vec![false; vertex_count];
        let mut total = 0usize;
        for comp in components {
            math_assert_msg(!comp.is_empty(), "components must be non-empty");
            for &v in comp {
                math_assert_msg(v < vertex_count, "component member out of bounds");
                math_assert_msg(!seen[v], "vertex appears in two components");
                seen[v] = true;
                total += 1;
            }
        }
        math_assert_msg(total == vertex_count, "components must cover every vertex");
    }
}

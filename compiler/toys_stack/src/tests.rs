use super::*;

#[test]
fn shallow_recursion_is_unaffected() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(10), 55);
}

#[test]
fn deep_recursion_grows_the_stack() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    // Far beyond what a default 8MB main-thread stack holds unaided.
    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn passes_through_results() {
    let ok: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(ok, Ok(7));
    let err: Result<i64, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(err, Err("boom"));
}

//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of parentheses and blocks, and
//! the evaluator recurses once per expression node and per function call.
//! Host stack is the interpreter's call stack, so a deeply recursive Toys
//! program would otherwise overflow it.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough.
//!
//! Growth is unbounded here; the evaluator caps call depth separately and
//! reports `StackExhausted` when a program recurses past it.

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate per growth step (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn evaluate(&mut self, expr: &Expr) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

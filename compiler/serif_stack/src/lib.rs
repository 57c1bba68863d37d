//! Stack growth for deeply nested Serif programs.
//!
//! Lowering walks the format tree recursively and the interpreter evaluates
//! expressions (and every user function call) recursively. A document with
//! deeply nested formatting or a deeply recursive function would otherwise
//! exhaust the native stack long before memory runs out.
//!
//! On native targets [`ensure_sufficient_stack`] grows the stack on demand
//! through `stacker`; on `wasm32` it calls straight through.
//!
//! Growing the stack does not make runaway recursion safe. A function that
//! never stops calling itself still exhausts memory; it just takes longer.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
///
/// Wrap every recursive step of lowering and evaluation in this call.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth for the recursive-descent grammar.
//!
//! Shell input nests without bound: `((((((...` or `{ { { ... } } }` recurse
//! through Primary → Chunk → Pipeline → Form → Compound → Indexing → Primary
//! once per level. Every grammar rule entry goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand on native
//! targets and is a plain call on `wasm32`.

/// Grow once less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

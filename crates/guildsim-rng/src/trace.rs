//! The process-wide RNG trace sink.
//!
//! This is the one piece of mutable global state in the simulation core
//! (SPEC_FULL.md §5, §9). It is installed/restored as a bracketed
//! operation: a caller swaps in a sink, runs some steps, then swaps the
//! previous value back in — never a free assignment that a panic or early
//! return could leave dangling.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// One RNG draw, reported to the trace sink in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub draw_index: u64,
    pub method: &'static str,
    pub bound: Option<i64>,
    pub value: DrawValue,
}

/// The value produced by a draw. `next_int`/`next_long` report `Int`,
/// `next_bool` reports `Bool`, `next_double` reports `Double`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawValue {
    Int(i64),
    Bool(bool),
    Double(f64),
}

/// A receiver for [`Draw`] events. Must be reentrancy-safe against its own
/// writes: a single `step` can produce many draws before control returns
/// to the caller.
pub type TraceSink = Box<dyn Fn(&Draw) + Send + Sync>;

static SINK: Lazy<Mutex<Option<TraceSink>>> = Lazy::new(|| Mutex::new(None));

/// Install `sink` as the active trace sink, returning whatever was
/// installed before. Pass `None` to clear. Callers must restore the
/// returned value on every exit path:
///
/// ```
/// let previous = guildsim_rng::install_trace_sink(Some(Box::new(|_draw| {})));
/// // ... drive some steps ...
/// guildsim_rng::install_trace_sink(previous);
/// ```
pub fn install_trace_sink(sink: Option<TraceSink>) -> Option<TraceSink> {
    let mut guard = SINK.lock().expect("rng trace sink mutex poisoned");
    std::mem::replace(&mut *guard, sink)
}

pub(crate) fn dispatch(draw: &Draw) {
    if let Ok(guard) = SINK.lock() {
        if let Some(sink) = guard.as_ref() {
            sink(draw);
        }
    }
}

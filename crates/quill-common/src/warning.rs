//! Deduplicated diagnostics with colored terminal output.
//!
//! Shorthand resolution runs the same grammar over many declarations, so the
//! same complaint (an unknown unit, a dropped declaration) tends to repeat.
//! Each distinct message is printed once until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set intact; keep using it.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about unsupported or discarded input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'q' in 4q");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first = warned().get_or_insert_with(HashSet::new).insert(key);

    if first && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Quill {component}] ⚠ {message}").yellow());
    }
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Whether `message` has been reported for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned().as_ref().is_some_and(|set| set.contains(&key))
}

/// Forget every recorded warning (call between independent inputs).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Silence (or re-enable) printing. Deduplication keeps working either way.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

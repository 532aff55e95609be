//! Startup-selected precondition checking.
//!
//! Precondition checks guard programmer errors: empty palettes, mismatched
//! renderer lists, draw orders that overflow the depth interval. In
//! [`CheckMode::Strict`] a violated precondition panics immediately with a
//! message naming the check. In [`CheckMode::Fast`] the checks are elided
//! entirely and callers must not rely on them firing; out-of-contract
//! inputs may still panic on raw indexing.

use std::sync::atomic::{AtomicU8, Ordering};

/// Whether precondition checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Violations are fatal. The default, intended for development and
    /// tooling builds.
    #[default]
    Strict,
    /// Checks are elided. Intended for shipped builds.
    Fast,
}

static MODE: AtomicU8 = AtomicU8::new(CheckMode::Strict as u8);

/// Select the checking mode. Call once at startup, before any skin or
/// depth-order operation.
pub fn set_check_mode(mode: CheckMode) {
    MODE.store(mode as u8, Ordering::Relaxed);
}

/// The currently selected checking mode.
pub fn check_mode() -> CheckMode {
    match MODE.load(Ordering::Relaxed) {
        0 => CheckMode::Strict,
        _ => CheckMode::Fast,
    }
}

/// Panics when `cond` is false and the mode is strict.
#[track_caller]
pub(crate) fn require(cond: bool, msg: &str) {
    if !cond && check_mode() == CheckMode::Strict {
        panic!("precondition violated: {msg}");
    }
}

/// Like [`require`], with a lazily built message.
#[track_caller]
pub(crate) fn require_with(cond: bool, msg: impl FnOnce() -> String) {
    if !cond && check_mode() == CheckMode::Strict {
        panic!("precondition violated: {}", msg());
    }
}

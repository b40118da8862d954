//! Process-wide "use color" flag
//!
//! Single-writer, many-reader contract: the screen sink initializer sets
//! the flag once during single-threaded startup, text-rendering
//! collaborators read it thereafter.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, read-mostly colorization toggle
#[derive(Debug)]
pub struct ColorFlag(AtomicBool);

impl ColorFlag {
    /// Create a flag, initially off
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Set the flag; intended to be called once at startup
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Whether colorized output is enabled
    pub fn enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for ColorFlag {
    fn default() -> Self {
        Self::new()
    }
}

static COLORIZE: ColorFlag = ColorFlag::new();

/// The process-wide color flag
pub fn colorize() -> &'static ColorFlag {
    &COLORIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_off_and_toggles() {
        let flag = ColorFlag::new();
        assert!(!flag.enabled());
        flag.set(true);
        assert!(flag.enabled());
    }
}

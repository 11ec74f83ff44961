//! Scoped timing.

use std::time::{Duration, Instant};

/// Logs the elapsed time of a scope when dropped.
///
/// # Example
///
/// ```
/// use checkupdate::Timer;
///
/// let timer = Timer::start("fetch manifest");
/// // ... work ...
/// assert!(timer.elapsed_ms() >= 0.0);
/// // "fetch manifest: elapsed time: ... ms" is logged at debug level here
/// drop(timer);
/// ```
#[derive(Debug)]
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    /// Start timing a labelled scope.
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time since the timer started, in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// The label logged on drop.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        tracing::debug!("{}: elapsed time: {:.3} ms", self.label, self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_label() {
        let timer = Timer::start("fetch");
        assert_eq!(timer.label(), "fetch");
    }

    #[test]
    fn elapsed_increases() {
        let timer = Timer::start("sleep");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
        assert!(timer.elapsed_ms() >= 5.0);
    }
}

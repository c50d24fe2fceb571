//! Sinks for validation diagnostics.
//!
//! The layout core never formats user-facing messages itself; it hands each
//! [`ValidationError`] to a [`Reporter`] and lets the caller decide how to
//! surface it.

use crate::layout::{ValidationError, ValidationErrors};

pub trait Reporter {
    fn report(&mut self, error: &ValidationError);

    /// Called once after all diagnostics of a rejected event set.
    fn finish(&mut self, _count: usize) {}
}

/// Hands every error of a rejected event set to `reporter`, then closes the
/// batch.
pub fn report_all(errors: &ValidationErrors, reporter: &mut dyn Reporter) {
    for error in errors.errors() {
        reporter.report(error);
    }
    reporter.finish(errors.len());
}

/// Writes every diagnostic through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, error: &ValidationError) {
        log::error!("{error}");
    }

    fn finish(&mut self, count: usize) {
        log::error!("one or more events are invalid ({count} problem(s)); no layout produced");
    }
}

/// Discards diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _error: &ValidationError) {}
}

impl<F> Reporter for F
where
    F: FnMut(&ValidationError),
{
    fn report(&mut self, error: &ValidationError) {
        self(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_collect_diagnostics() {
        let mut seen = Vec::new();
        {
            let mut reporter = |error: &ValidationError| seen.push(error.clone());
            reporter.report(&ValidationError::DuplicateId { index: 1, id: 1 });
            reporter.finish(1);
        }
        assert_eq!(seen, vec![ValidationError::DuplicateId { index: 1, id: 1 }]);
    }
}

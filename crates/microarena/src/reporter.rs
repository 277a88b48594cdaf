//! Default diagnostics sink.

use std::fmt;

use microarena_core::ErrorReporter;

/// Forwards every report to `tracing` at `ERROR` level under the
/// `microarena` target.
///
/// This is the reporter [`TensorArena::new`](crate::TensorArena::new)
/// installs. Targets without a subscriber simply drop the events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&mut self, args: fmt::Arguments<'_>) {
        tracing::error!(target: "microarena", "{}", args);
    }
}

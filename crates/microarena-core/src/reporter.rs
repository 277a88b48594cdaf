//! The diagnostics sink used to surface allocator failures.

use std::fmt;

/// A sink for human-readable failure reports.
///
/// The allocator never panics or unwinds across this boundary. Each
/// failure is reported here exactly once and then returned to the caller
/// as an error value; the sink decides where the message goes (a serial
/// console, a log, a test buffer).
pub trait ErrorReporter {
    /// Accept one formatted diagnostic message.
    fn report(&mut self, args: fmt::Arguments<'_>);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, args: fmt::Arguments<'_>) {
        (**self).report(args);
    }
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl ErrorReporter for NullReporter {
    fn report(&mut self, _args: fmt::Arguments<'_>) {}
}

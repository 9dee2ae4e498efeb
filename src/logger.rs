//! Logging capability passed explicitly to every component.
//!
//! The binary uses [`TracingLogger`], which forwards to `tracing`; tests use
//! [`MemoryLogger`] to assert on emitted messages.

pub trait Logger {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[cfg(test)]
pub use memory::MemoryLogger;

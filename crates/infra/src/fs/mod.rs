//! Filesystem adapters

mod atomic;

// Re-export public API
pub use atomic::AtomicFileSink;

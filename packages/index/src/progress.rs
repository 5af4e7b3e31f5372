//! Progress reporting for index builds.
//!
//! Decouples build progress from any rendering backend; the CLI supplies
//! an `indicatif` implementation.

/// Trait for reporting progress from long-running operations.
///
/// Implementations must be `Send + Sync` so they can be moved into
/// blocking build tasks.
pub trait ProgressCallback: Send + Sync {
    /// Advance progress by `delta` units.
    fn inc(&self, delta: u64);

    /// Update the message displayed alongside the progress indicator.
    fn set_message(&self, msg: String);

    /// Mark progress as complete with a final message.
    fn finish(&self, msg: String);
}

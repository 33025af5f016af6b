//! Background speech I/O tasks.
//!
//! Synthesis and capture are the only blocking operations in the system,
//! so each runs as a fire-and-forget `tokio::spawn` task. Tasks never
//! touch session state directly; they report through a
//! [`RuntimeEvent`](crate::runtime::RuntimeEvent) channel consumed by the
//! thread that owns the state. There is no cancellation path: a task that
//! times out or errors reports through the same channel and releases its
//! own resources. Nothing enforces mutual exclusion between concurrent
//! tasks; by convention the shell starts at most one of each kind.

pub mod capture;
pub mod synthesis;

pub use capture::{CaptureFailure, SpeechRecognizer, spawn_capture};
pub use synthesis::{SpeechSynthesizer, spawn_synthesis};

//! Runtime events emitted for the presentation shell.
//!
//! Background speech tasks never mutate shared state; everything they have
//! to say travels through a channel of these events back to the thread
//! that owns the session state.

use crate::knowledge::Expression;

/// Events describing what the engine and speech tasks are doing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A capture task produced a transcription; the shell should feed it
    /// through the pipeline like typed input.
    Transcription { text: String },
    /// A non-fatal failure the user should see as a system chat message.
    SystemMessage { text: String },
    /// The portrait to display changed.
    ExpressionChanged(Expression),
    /// A synthesis task started or finished playback.
    SpeakingChanged { active: bool },
    /// A capture task started or finished listening.
    ListeningChanged { active: bool },
}

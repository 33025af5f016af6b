//! Microphone capture task: listen, transcribe, report back.

use crate::config::CaptureConfig;
use crate::knowledge::Expression;
use crate::runtime::RuntimeEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Why a capture attempt produced no transcription.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureFailure {
    /// No speech started within the configured timeout.
    #[error("listen timeout elapsed")]
    Timeout,
    /// Audio was captured but could not be transcribed.
    #[error("speech not understood")]
    Unintelligible,
    /// Microphone or recognition service error.
    #[error("device error: {0}")]
    Device(String),
}

impl CaptureFailure {
    /// The system chat message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CaptureFailure::Timeout => "⏰ Temps d'écoute dépassé".to_owned(),
            CaptureFailure::Unintelligible => "❌ Je n'ai pas compris votre voix".to_owned(),
            CaptureFailure::Device(e) => format!("❌ Erreur microphone: {e}"),
        }
    }
}

/// Seam for the platform microphone + speech recognition service.
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listen for one phrase and transcribe it.
    async fn listen(&self, config: &CaptureConfig) -> Result<String, CaptureFailure>;
}

/// Spawn a fire-and-forget capture task.
///
/// The task flips the listening flag and the `ecoute` portrait on, waits
/// for one transcription, then restores `neutre`. A successful capture is
/// reported as [`RuntimeEvent::Transcription`] for the shell to feed
/// through the pipeline; each failure category becomes its own
/// [`RuntimeEvent::SystemMessage`]. Failures never affect subsequent turns.
pub fn spawn_capture(
    recognizer: Arc<dyn SpeechRecognizer>,
    config: CaptureConfig,
    events: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _ = events.send(RuntimeEvent::ListeningChanged { active: true }).await;
        let _ = events
            .send(RuntimeEvent::ExpressionChanged(Expression::Ecoute))
            .await;
        let _ = events
            .send(RuntimeEvent::SystemMessage {
                text: "🎤 Écoute en cours... Parlez maintenant".to_owned(),
            })
            .await;

        match recognizer.listen(&config).await {
            Ok(text) => {
                let _ = events.send(RuntimeEvent::Transcription { text }).await;
            }
            Err(failure) => {
                warn!(%failure, "speech capture failed");
                let _ = events
                    .send(RuntimeEvent::SystemMessage {
                        text: failure.user_message(),
                    })
                    .await;
            }
        }

        let _ = events.send(RuntimeEvent::ListeningChanged { active: false }).await;
        let _ = events
            .send(RuntimeEvent::ExpressionChanged(Expression::Neutre))
            .await;
    })
}

//! Speech synthesis task: speak a reply while showing the talking portrait.

use crate::config::VoiceConfig;
use crate::error::Result;
use crate::knowledge::Expression;
use crate::runtime::RuntimeEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Seam for the platform text-to-speech engine.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize and play the text, returning once playback finishes.
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<()>;
}

/// Spawn a fire-and-forget synthesis task.
///
/// The task flips the speaking flag and the `parle` portrait on, plays the
/// text, then restores `neutre`. A synthesis failure becomes a
/// [`RuntimeEvent::SystemMessage`]; it never propagates. Event sends are
/// best-effort: if the shell dropped its receiver there is nobody left to
/// update.
pub fn spawn_synthesis(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    text: String,
    voice: VoiceConfig,
    events: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _ = events.send(RuntimeEvent::SpeakingChanged { active: true }).await;
        let _ = events
            .send(RuntimeEvent::ExpressionChanged(Expression::Parle))
            .await;

        if let Err(e) = synthesizer.speak(&text, &voice).await {
            warn!(error = %e, "speech synthesis failed");
            let _ = events
                .send(RuntimeEvent::SystemMessage {
                    text: format!("Erreur de synthèse vocale: {e}"),
                })
                .await;
        }

        let _ = events.send(RuntimeEvent::SpeakingChanged { active: false }).await;
        let _ = events
            .send(RuntimeEvent::ExpressionChanged(Expression::Neutre))
            .await;
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::error::PersonaError;
    use std::sync::Mutex;

    struct RecordingSynthesizer {
        spoken: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl SpeechSynthesizer for RecordingSynthesizer {
        async fn speak(&self, text: &str, _voice: &VoiceConfig) -> Result<()> {
            if self.fail {
                return Err(PersonaError::Synthesis("no audio device".into()));
            }
            self.spoken.lock().unwrap().push(text.to_owned());
            Ok(())
        }
    }

    async fn drain(mut rx: mpsc::Receiver<RuntimeEvent>) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Some(e) = rx.recv().await {
            events.push(e);
        }
        events
    }

    #[tokio::test]
    async fn synthesis_reports_speaking_lifecycle() {
        let synth = Arc::new(RecordingSynthesizer {
            spoken: Mutex::new(Vec::new()),
            fail: false,
        });
        let (tx, rx) = mpsc::channel(16);

        spawn_synthesis(synth.clone(), "Bonjour".into(), VoiceConfig::default(), tx)
            .await
            .unwrap();

        let events = drain(rx).await;
        assert_eq!(
            events,
            [
                RuntimeEvent::SpeakingChanged { active: true },
                RuntimeEvent::ExpressionChanged(Expression::Parle),
                RuntimeEvent::SpeakingChanged { active: false },
                RuntimeEvent::ExpressionChanged(Expression::Neutre),
            ]
        );
        assert_eq!(synth.spoken.lock().unwrap().as_slice(), ["Bonjour"]);
    }

    #[tokio::test]
    async fn synthesis_failure_surfaces_system_message() {
        let synth = Arc::new(RecordingSynthesizer {
            spoken: Mutex::new(Vec::new()),
            fail: true,
        });
        let (tx, rx) = mpsc::channel(16);

        spawn_synthesis(synth, "Bonjour".into(), VoiceConfig::default(), tx)
            .await
            .unwrap();

        let events = drain(rx).await;
        assert!(events.iter().any(|e| matches!(
            e,
            RuntimeEvent::SystemMessage { text } if text.contains("synthèse")
        )));
        // Flags are still restored after a failure.
        assert!(events.contains(&RuntimeEvent::SpeakingChanged { active: false }));
        assert!(events.contains(&RuntimeEvent::ExpressionChanged(Expression::Neutre)));
    }
}

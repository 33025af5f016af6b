//! Session state and the message-processing engine.
//!
//! The engine owns the conversation log and the read-only classifier
//! artifact; the pipeline itself (extract → predict → select) is a pure
//! function of the input text plus an explicit log-append effect. UI-facing
//! flags live in [`SessionState`], owned by the presentation shell.

use crate::classifier::{ClassifierArtifact, Prediction};
use crate::features;
use crate::history::{ConversationLog, Message, Role};
use crate::knowledge::Expression;
use crate::responder::{self, Reply};
use tracing::debug;

/// Scripted greeting, spoken and displayed on startup.
pub const WELCOME_TEXT: &str = "Salutations, cher compatriote ! Je suis le président Habib \
     Bourguiba. Mon intelligence artificielle est à votre service. Parlez-moi de la Tunisie, \
     de l'indépendance, ou de tout autre sujet qui vous intéresse.";

/// Display name used for bot-role log entries.
pub const BOT_SENDER: &str = "Bourguiba";
/// Display name used for user-role log entries.
pub const USER_SENDER: &str = "Vous";
/// Display name used for system-role log entries.
pub const SYSTEM_SENDER: &str = "Système";

/// Mutable UI-visible session flags, owned by the presentation shell.
///
/// Only the primary thread mutates this; background tasks report through
/// [`crate::runtime::RuntimeEvent`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Portrait currently shown.
    pub expression: Expression,
    /// Whether a synthesis task is playing.
    pub speaking: bool,
    /// Whether a capture task is listening.
    pub listening: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            expression: Expression::Neutre,
            speaking: false,
            listening: false,
        }
    }
}

/// Snapshot of engine statistics for the shell's stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineStats {
    /// Whether a real trained artifact is loaded.
    pub trained: bool,
    /// Messages currently in the log.
    pub messages: usize,
    /// Label of the most recent prediction, if any message was processed.
    pub last_label: Option<String>,
    /// Confidence of the most recent prediction.
    pub last_confidence: Option<f32>,
}

/// The message-processing engine: classifier + conversation log.
#[derive(Debug)]
pub struct PersonaEngine {
    classifier: ClassifierArtifact,
    log: ConversationLog,
    last_prediction: Option<Prediction>,
}

impl PersonaEngine {
    #[must_use]
    pub fn new(classifier: ClassifierArtifact) -> Self {
        Self {
            classifier,
            log: ConversationLog::new(),
            last_prediction: None,
        }
    }

    /// Run one message through the pipeline.
    ///
    /// Appends the user message, classifies it (one attempt; any failure is
    /// absorbed into the default category at confidence 0.0), selects the
    /// reply, appends the bot message, and returns the reply for the shell
    /// to display and speak.
    pub fn submit(&mut self, text: &str) -> Reply {
        self.log.append(Message::new(USER_SENDER, text, Role::User));

        let vector = features::extract(text);
        let prediction = self.classifier.predict(&vector).unwrap_or_else(|e| {
            debug!(error = %e, "classification failed, using default category");
            Prediction {
                label: "default".to_owned(),
                confidence: 0.0,
            }
        });
        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "message classified"
        );

        let reply = responder::select(&prediction.label, prediction.confidence);
        self.log
            .append(Message::new(BOT_SENDER, reply.display_text.clone(), Role::Bot));
        self.last_prediction = Some(prediction);
        reply
    }

    /// Append and return the scripted greeting.
    pub fn welcome(&mut self) -> Reply {
        let display_text = format!("🤖 Bourguiba: {WELCOME_TEXT}");
        self.log
            .append(Message::new(BOT_SENDER, display_text.clone(), Role::Bot));
        Reply {
            display_text,
            spoken_text: WELCOME_TEXT.to_owned(),
            expression: Expression::Neutre,
        }
    }

    /// Record a system-role message (capture failures and the like).
    pub fn record_system_message(&mut self, text: &str) {
        self.log
            .append(Message::new(SYSTEM_SENDER, text, Role::System));
    }

    /// The most recent bot reply body, display prefix stripped, ready for
    /// the synthesis task to repeat.
    #[must_use]
    pub fn last_spoken_response(&self) -> Option<String> {
        self.log
            .last_with_role(Role::Bot)
            .map(|m| responder::strip_display_prefix(&m.text).to_owned())
    }

    /// Irreversibly clear the conversation. The shell confirms first.
    pub fn clear_history(&mut self) {
        self.log.clear();
        self.last_prediction = None;
    }

    #[must_use]
    pub fn history(&self) -> &ConversationLog {
        &self.log
    }

    /// Whether the classifier is a real trained artifact.
    #[must_use]
    pub fn classifier_trained(&self) -> bool {
        self.classifier.is_trained()
    }

    /// Snapshot for the stats panel.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            trained: self.classifier.is_trained(),
            messages: self.log.len(),
            last_label: self.last_prediction.as_ref().map(|p| p.label.clone()),
            last_confidence: self.last_prediction.as_ref().map(|p| p.confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::responder::REFLECTIVE_PREFIX;

    fn untrained_engine() -> PersonaEngine {
        PersonaEngine::new(ClassifierArtifact::untrained())
    }

    #[test]
    fn default_session_state_is_idle_neutral() {
        let state = SessionState::default();
        assert_eq!(state.expression, Expression::Neutre);
        assert!(!state.speaking);
        assert!(!state.listening);
    }

    #[test]
    fn untrained_submit_degrades_to_reflective_default() {
        let mut engine = untrained_engine();
        let reply = engine.submit("Parlez-moi de la Tunisie?");
        assert!(reply.display_text.starts_with(REFLECTIVE_PREFIX));
        assert_eq!(reply.expression, Expression::Neutre);
        assert!(reply.spoken_text.starts_with("Hmm... "));
    }

    #[test]
    fn submit_appends_user_then_bot() {
        let mut engine = untrained_engine();
        engine.submit("bonjour");
        let messages = engine.history().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "bonjour");
        assert_eq!(messages[1].role, Role::Bot);
    }

    #[test]
    fn welcome_is_logged_as_bot() {
        let mut engine = untrained_engine();
        let reply = engine.welcome();
        assert!(reply.display_text.contains("compatriote"));
        assert_eq!(engine.history().last_with_role(Role::Bot).unwrap().text, reply.display_text);
    }

    #[test]
    fn last_spoken_response_strips_prefix() {
        let mut engine = untrained_engine();
        let reply = engine.submit("bonjour");
        let spoken = engine.last_spoken_response().unwrap();
        assert_eq!(spoken, reply.spoken_text);
        assert!(!spoken.contains("Bourguiba"));
    }

    #[test]
    fn last_spoken_response_none_when_empty() {
        let engine = untrained_engine();
        assert!(engine.last_spoken_response().is_none());
    }

    #[test]
    fn system_messages_do_not_shadow_bot_replies() {
        let mut engine = untrained_engine();
        engine.submit("bonjour");
        engine.record_system_message("Temps d'écoute dépassé");
        let last_bot = engine.history().last_with_role(Role::Bot).unwrap();
        assert!(last_bot.text.contains("Hmm..."));
    }

    #[test]
    fn clear_resets_log_and_stats() {
        let mut engine = untrained_engine();
        engine.submit("bonjour");
        engine.clear_history();
        assert!(engine.history().is_empty());
        assert!(engine.stats().last_label.is_none());
    }

    #[test]
    fn stats_reflect_last_prediction() {
        let mut engine = untrained_engine();
        engine.submit("bonjour");
        let stats = engine.stats();
        assert!(!stats.trained);
        assert_eq!(stats.messages, 2);
        assert_eq!(stats.last_label.as_deref(), Some("default"));
        assert_eq!(stats.last_confidence, Some(0.0));
    }
}

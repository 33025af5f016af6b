//! Response selection: (label, confidence) → reply text + expression.
//!
//! Pure function over the static knowledge table. The classifier's
//! confidence picks a phrasing frame; low confidence additionally prepends
//! a hesitation marker to the spoken body.

use crate::knowledge::{Category, Expression};

/// Display prefix for high-confidence replies.
pub const CONFIDENT_PREFIX: &str = "🤖 Bourguiba (IA Confiante): ";
/// Display prefix for mid-confidence replies.
pub const NEUTRAL_PREFIX: &str = "🤖 Bourguiba: ";
/// Display prefix for low-confidence replies.
pub const REFLECTIVE_PREFIX: &str = "🤖 Bourguiba (Réflexion): ";
/// Hesitation marker prepended to the body of reflective replies.
pub const HESITATION_MARKER: &str = "Hmm... ";

/// Phrasing frame selected from the classifier confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Confidence strictly above 0.7.
    Confident,
    /// Confidence strictly above 0.4, up to and including 0.7.
    Neutral,
    /// Confidence at or below 0.4 (including the untrained-fallback 0.0).
    Reflective,
}

impl Framing {
    /// Select the frame for a confidence score.
    ///
    /// Boundaries are inclusive on the lower frame: exactly 0.7 is
    /// [`Framing::Neutral`] and exactly 0.4 is [`Framing::Reflective`].
    #[must_use]
    pub fn for_confidence(confidence: f32) -> Self {
        if confidence > 0.7 {
            Framing::Confident
        } else if confidence > 0.4 {
            Framing::Neutral
        } else {
            Framing::Reflective
        }
    }

    /// The display prefix for this frame.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Framing::Confident => CONFIDENT_PREFIX,
            Framing::Neutral => NEUTRAL_PREFIX,
            Framing::Reflective => REFLECTIVE_PREFIX,
        }
    }
}

/// A selected reply, ready for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Full chat-panel text, prefix included.
    pub display_text: String,
    /// Body handed to the synthesis task (no display prefix).
    pub spoken_text: String,
    /// Portrait to show alongside the reply.
    pub expression: Expression,
}

/// Select the reply for a classifier result.
///
/// Unknown labels degrade to the default table entry. Same input always
/// yields the same output; no state is touched.
#[must_use]
pub fn select(label: &str, confidence: f32) -> Reply {
    let category = Category::from_label(label);
    let framing = Framing::for_confidence(confidence);

    let body = match framing {
        Framing::Reflective => format!("{HESITATION_MARKER}{}", category.response_text()),
        _ => category.response_text().to_owned(),
    };

    Reply {
        display_text: format!("{}{body}", framing.prefix()),
        spoken_text: body,
        expression: category.expression(),
    }
}

/// Strip a display prefix from logged bot text, returning the spoken body.
///
/// Used by "repeat last response" so the synthesis task never reads the
/// framing prefix aloud. Text without a known prefix is returned unchanged.
#[must_use]
pub fn strip_display_prefix(text: &str) -> &str {
    for prefix in [CONFIDENT_PREFIX, REFLECTIVE_PREFIX, NEUTRAL_PREFIX] {
        if let Some(rest) = text.strip_prefix(prefix) {
            return rest;
        }
    }
    text
}

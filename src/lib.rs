//! Bourguiba: conversational persona engine.
//!
//! This crate provides the reproducible core of a scripted persona
//! chatbot: text in → category out → canned reply and portrait expression.
//!
//! # Architecture
//!
//! The pipeline is built from small, independently testable stages:
//! - **Feature extraction**: surface statistics of the message text
//! - **Classification**: a pre-trained scaler + linear model artifact
//! - **Response selection**: knowledge-table lookup with confidence framing
//! - **Conversation log**: append-only session record
//!
//! Speech I/O runs as fire-and-forget `tokio` tasks that report back over
//! a [`RuntimeEvent`] channel; the presentation shell (GUI, console, ...)
//! owns the [`SessionState`] and is the only place UI-visible state
//! mutates.

pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod gallery;
pub mod history;
pub mod knowledge;
pub mod responder;
pub mod runtime;
pub mod session;
pub mod speech;

pub use classifier::{ClassifierArtifact, Prediction};
pub use config::PersonaConfig;
pub use error::{PersonaError, Result};
pub use history::{ConversationLog, Message, Role};
pub use knowledge::{Category, Expression};
pub use responder::Reply;
pub use runtime::RuntimeEvent;
pub use session::{PersonaEngine, SessionState};

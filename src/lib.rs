//! Relay source code to a local LLM and turn its reply into translated code
//! or a classified failure.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::translate::{process_reply, translate};
pub use domain::model::{ErrorKind, Language, TranslationRequest, TranslationResult};

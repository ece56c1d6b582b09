//! Kisan Common Library
//!
//! Types and state machines shared by the web app and the native client

pub mod chat;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod markdown;
pub mod upload;

pub use chat::{
    ChatReply, ChatRequest, ChatSession, Message, Role, Transcript, DEFAULT_SYSTEM_PROMPT,
    STARTER_PROMPTS,
};
pub use config::Config;
pub use diagnosis::{Confidence, Diagnosis, DiagnosisTitle};
pub use error::{Error, Result};
pub use markdown::render_markdown;
pub use upload::{PreviewHandle, SelectedImage, UploadPhase, UploadState};

//! Kisan native client
//!
//! Talks to the plant-disease classification endpoint and the Kisan Sathi
//! chat endpoint using the state machines from `kisan-common`.

pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod session;

pub use client::KisanClient;
pub use error::{KisanError, Result};
pub use kisan_common as common;

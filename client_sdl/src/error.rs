//! Startup failures. Every one of them ends the process with status 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init video: {0}")]
    Video(String),

    #[error("Failed to create window: {0}")]
    Window(String),

    #[error("Failed to create renderer: {0}")]
    Renderer(String),

    #[error("Failed to init TTF: {0}")]
    Ttf(String),

    #[error("Failed to open font {path}: {reason}")]
    Font { path: String, reason: String },

    #[error("Failed to create event pump: {0}")]
    EventPump(String),
}

impl InitError {
    pub fn font(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Font {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

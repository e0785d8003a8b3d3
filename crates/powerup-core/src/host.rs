use crate::PowerUpResult;
use serde::Serialize;

/// Declarative description of a popup surface the host renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    pub title: String,
    pub url: String,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Non-blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// UI facilities provided by the embedding host
pub trait HostUi: Send + Sync {
    /// Render a popup from its description
    fn popup(&self, popup: &Popup) -> PowerUpResult<()>;

    /// Dismiss the popup currently shown, if any
    fn close_popup(&self);

    /// Show a notice without blocking the user
    fn notify(&self, notice: &Notice);

    /// Point the current browsing context at `uri`
    fn navigate(&self, uri: &str) -> PowerUpResult<()>;
}

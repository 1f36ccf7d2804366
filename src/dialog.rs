//! Dialogs
//!
//! Blocking alerts and confirmations shown over the screen.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "dialog-success",
            AlertKind::Error => "dialog-error",
            AlertKind::Warning => "dialog-warning",
        }
    }
}

/// One-button message dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub text: String,
}

impl Alert {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }
}

/// Two-button question; answering with the confirm button resolves to `true`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_food() -> Self {
        Self {
            title: "¿Estás seguro de eliminar la comida?".to_string(),
            text: "No podrás revertir esto!".to_string(),
            confirm_label: "Si, eliminar!".to_string(),
            cancel_label: "Cancelar".to_string(),
        }
    }
}

/// Dialog service used by the screen's actions
#[async_trait(?Send)]
pub trait Dialogs {
    fn alert(&self, alert: Alert);

    /// Resolves once the user answers. Dismissing without an answer counts as cancel.
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

//! Toast notifications
//!
//! The report flow never renders anything itself. It hands [`Toast`]s to a
//! [`Notifier`], which forwards them to whatever displays them.

use tokio::sync::mpsc;

use crate::messages::ToastText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message with a title and a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(text: ToastText) -> Self {
        Self {
            title: text.title.to_string(),
            description: text.description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(text: ToastText) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::info(text)
        }
    }

    /// Error toast whose description is built at runtime
    pub fn error_with(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}

/// Sink for toasts
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Sends toasts to the UI loop over an unbounded channel
#[derive(Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        if let Err(e) = self.sender.send(toast) {
            tracing::warn!(title = %e.0.title, "Toast dropped, no receiver");
        }
    }
}

/// Writes toasts to the log instead of displaying them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "Toast")
            }
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, description = %toast.description, "Toast")
            }
        }
    }
}

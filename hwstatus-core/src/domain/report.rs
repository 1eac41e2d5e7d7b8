//! Last-sent report

/// Longest message text sent to the chat, in characters
///
/// Telegram rejects messages over 4096 characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// Message sent when the API reports no homeworks in the poll window
pub const NO_NEW_STATUS: &str = "No new homework statuses.";

/// The last notification that was handed to the messenger
///
/// Two reports are equal only when both the name and the message match
/// exactly. The default report (two empty strings) is the state before the
/// first successful notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub message: String,
}

impl Report {
    /// Creates a report, cutting the message to [`MAX_MESSAGE_CHARS`]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: truncate(message.into()),
        }
    }

    /// Report for a poll window without any homework
    pub fn no_new_status() -> Self {
        Self::new("", NO_NEW_STATUS)
    }

    /// Report carrying a diagnostic for a failed cycle
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self::new("", format!("Program failure: {}", error))
    }
}

fn truncate(message: String) -> String {
    match message.char_indices().nth(MAX_MESSAGE_CHARS - 3) {
        Some((cut, _)) if message.chars().count() > MAX_MESSAGE_CHARS => {
            format!("{}...", &message[..cut])
        }
        _ => message,
    }
}

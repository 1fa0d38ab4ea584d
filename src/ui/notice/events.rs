// src/ui/notice/events.rs
//
// Message carrying the text of a user-visible notice.

use bevy::prelude::{Event, Message};

/// Raised by any system that wants a transient banner shown to the user.
#[derive(Event, Message, Debug, Clone)]
pub struct NoticeEvent {
    pub text: String,
}

impl NoticeEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

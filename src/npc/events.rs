//! NPC events consumed by the UI layer.
use bevy::prelude::{Entity, Event, Message};

/// Emitted when an NPC greets the approaching player.
#[derive(Event, Message, Debug, Clone)]
pub struct NpcGreetingEvent {
    pub speaker: Entity,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_event_exposes_fields() {
        let event = NpcGreetingEvent {
            speaker: Entity::PLACEHOLDER,
            message: "Hi, how are you?".to_string(),
        };

        assert_eq!(event.speaker, Entity::PLACEHOLDER);
        assert_eq!(event.message, "Hi, how are you?");
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    TableSeated {
        sides: Vec<String>,
        players: Vec<String>,
    },
    RoundScored {
        ordinal: u32,
        dealer: String,
        deltas: HashMap<String, i64>,
    },
    RoundUndone {
        ordinal: u32,
    },
    RoundEdited {
        ordinal: u32,
    },
    GameWon {
        side: String,
        total: i64,
    },
    GameReset,
    SideRenamed {
        from: String,
        to: String,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

use crate::HistoryLedger;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Active,
    Won,
}

/// A seated player and the side they score for. The mapping is explicit
/// configuration; it is never inferred from seat position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSeat {
    pub name: String,
    pub side: String,
}

/// The whole session as one value. Callers hand a snapshot in to resume and
/// read one back after every operation; there is no ambient state anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub sides: Vec<String>,
    pub players: Vec<PlayerSeat>,
    pub totals: HashMap<String, i64>,
    pub dealer_index: usize,
    #[serde(default)]
    pub history: HistoryLedger,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            sides: Vec::new(),
            players: Vec::new(),
            totals: HashMap::new(),
            dealer_index: 0,
            history: HistoryLedger::default(),
        }
    }

    pub fn total(&self, side: &str) -> i64 {
        self.totals.get(side).copied().unwrap_or(0)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

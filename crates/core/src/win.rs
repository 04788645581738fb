use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub side: String,
    pub total: i64,
}

/// Pick the winner, if any: the side at or above `target` with the strictly
/// highest total. An exact tie goes to the side earliest in `order`.
pub fn evaluate(totals: &HashMap<String, i64>, order: &[String], target: i64) -> Option<Winner> {
    let mut winner: Option<Winner> = None;
    for side in order {
        let total = totals.get(side).copied().unwrap_or(0);
        if total < target {
            continue;
        }
        let beats = winner.as_ref().map(|best| total > best.total).unwrap_or(true);
        if beats {
            winner = Some(Winner {
                side: side.clone(),
                total,
            });
        }
    }
    winner
}

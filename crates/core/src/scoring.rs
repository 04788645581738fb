use crate::GameConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const MAX_CANASTAS_PER_SIDE: u8 = 5;
pub const MAX_RED_THREES: u8 = 4;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideEntry {
    pub meld: i64,
    #[serde(default)]
    pub natural_canastas: u8,
    #[serde(default)]
    pub mixed_canastas: u8,
    #[serde(default)]
    pub red_threes: u8,
    #[serde(default)]
    pub hand_penalty: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundInput {
    pub entries: HashMap<String, SideEntry>,
    #[serde(default)]
    pub went_out: Option<String>,
    #[serde(default)]
    pub concealed: bool,
    #[serde(default)]
    pub deal_bonus: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("red threes total {0} exceeds four")]
    RedThreeOverflow(u8),
    #[error("negative meld for side {0}")]
    NegativeMeld(String),
    #[error("negative penalty for side {0}")]
    NegativePenalty(String),
    #[error("canasta count for side {0} exceeds five")]
    TooManyCanastas(String),
    #[error("red three count for side {0} exceeds four")]
    TooManyRedThrees(String),
    #[error("missing entry for side {0}")]
    MissingEntry(String),
    #[error("entry for unknown side {0}")]
    UnknownSide(String),
    #[error("went-out side {0} is not at the table")]
    UnknownGoOutSide(String),
}

/// Convert one round of inputs into a per-side score delta. Pure and
/// deterministic; validation failures leave the caller untouched.
///
/// `dealer_side` is the side the current dealer sits on, used only when the
/// dealing bonus is claimed.
pub fn score_round(
    config: &GameConfig,
    sides: &[String],
    dealer_side: Option<&str>,
    input: &RoundInput,
) -> Result<HashMap<String, i64>, ScoreError> {
    validate(sides, input)?;

    let total_red: u8 = input.entries.values().map(|entry| entry.red_threes).sum();
    if total_red > MAX_RED_THREES {
        return Err(ScoreError::RedThreeOverflow(total_red));
    }

    let bonuses = &config.bonuses;
    let mut deltas = HashMap::new();
    for side in sides {
        let entry = &input.entries[side];
        let canasta_bonus = i64::from(entry.natural_canastas) * bonuses.natural_canasta
            + i64::from(entry.mixed_canastas) * bonuses.mixed_canasta;

        // All four red threes with one side scores the flat bonus; any split
        // among sides keeps the raw per-card value.
        let red_bonus = if total_red == MAX_RED_THREES && entry.red_threes == MAX_RED_THREES {
            bonuses.red_three_all_four
        } else {
            i64::from(entry.red_threes) * bonuses.red_three
        };

        let went_out = input.went_out.as_deref() == Some(side.as_str());
        let go_bonus = if went_out {
            if input.concealed {
                bonuses.go_out_concealed
            } else {
                bonuses.go_out
            }
        } else {
            0
        };

        let deal_bonus = if input.deal_bonus && dealer_side == Some(side.as_str()) {
            bonuses.deal
        } else {
            0
        };

        // A side that goes out cannot also hold a hand penalty.
        let penalty = if went_out { 0 } else { entry.hand_penalty };

        deltas.insert(
            side.clone(),
            entry.meld + canasta_bonus + red_bonus + go_bonus + deal_bonus - penalty,
        );
    }
    Ok(deltas)
}

fn validate(sides: &[String], input: &RoundInput) -> Result<(), ScoreError> {
    for side in input.entries.keys() {
        if !sides.contains(side) {
            return Err(ScoreError::UnknownSide(side.clone()));
        }
    }
    for side in sides {
        let entry = input
            .entries
            .get(side)
            .ok_or_else(|| ScoreError::MissingEntry(side.clone()))?;
        if entry.meld < 0 {
            return Err(ScoreError::NegativeMeld(side.clone()));
        }
        if entry.hand_penalty < 0 {
            return Err(ScoreError::NegativePenalty(side.clone()));
        }
        if entry.natural_canastas > MAX_CANASTAS_PER_SIDE
            || entry.mixed_canastas > MAX_CANASTAS_PER_SIDE
        {
            return Err(ScoreError::TooManyCanastas(side.clone()));
        }
        if entry.red_threes > MAX_RED_THREES {
            return Err(ScoreError::TooManyRedThrees(side.clone()));
        }
    }
    if let Some(out) = &input.went_out {
        if !sides.contains(out) {
            return Err(ScoreError::UnknownGoOutSide(out.clone()));
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusSchedule {
    pub natural_canasta: i64,
    pub mixed_canasta: i64,
    pub red_three: i64,
    pub red_three_all_four: i64,
    pub go_out: i64,
    pub go_out_concealed: i64,
    pub deal: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeldTier {
    pub min_total: i64,
    pub requirement: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub win_target: i64,
    pub bonuses: BonusSchedule,
    pub meld_tiers: Vec<MeldTier>,
}

impl GameConfig {
    /// Standard American Canasta table: game to 5000, tiered opening melds.
    pub fn standard() -> Self {
        Self {
            win_target: 5000,
            bonuses: BonusSchedule {
                natural_canasta: 500,
                mixed_canasta: 300,
                red_three: 100,
                red_three_all_four: 800,
                go_out: 100,
                go_out_concealed: 200,
                deal: 100,
            },
            meld_tiers: vec![
                MeldTier {
                    min_total: 0,
                    requirement: 50,
                },
                MeldTier {
                    min_total: 1500,
                    requirement: 90,
                },
                MeldTier {
                    min_total: 3000,
                    requirement: 120,
                },
            ],
        }
    }

    /// Opening-meld requirement for a side at the given running total. The
    /// first tier acts as the floor for totals below every threshold.
    pub fn meld_requirement(&self, total: i64) -> i64 {
        self.meld_tiers
            .iter()
            .filter(|tier| total >= tier.min_total)
            .map(|tier| tier.requirement)
            .last()
            .or_else(|| self.meld_tiers.first().map(|tier| tier.requirement))
            .unwrap_or(0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

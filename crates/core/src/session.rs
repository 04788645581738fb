use crate::{
    score_round, win, Event, EventBus, GameConfig, GameState, LedgerError, Phase, PlayerSeat,
    RoundInput, RoundRecord, ScoreError, Winner,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("side count {0} not supported (expected 2 or 3)")]
    InvalidSideCount(usize),
    #[error("duplicate side name {0}")]
    DuplicateSide(String),
    #[error("duplicate player name {0}")]
    DuplicatePlayer(String),
    #[error("player {player} seated for unknown side {side}")]
    UnknownPlayerSide { player: String, side: String },
    #[error("no players seated")]
    NoPlayers,
    #[error("unknown side {0}")]
    UnknownSide(String),
    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

pub const MIN_SIDES: usize = 2;
pub const MAX_SIDES: usize = 3;

/// A scorekeeping session. Owns the rules and the current [`GameState`];
/// every mutation re-evaluates the win condition before returning.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub state: GameState,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    /// Resume from a snapshot previously obtained through [`Session::snapshot`].
    pub fn from_snapshot(config: GameConfig, state: GameState) -> Self {
        Self { config, state }
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn current_dealer(&self) -> Option<&PlayerSeat> {
        self.state.players.get(self.state.dealer_index)
    }

    pub fn dealer_side(&self) -> Option<&str> {
        self.current_dealer().map(|seat| seat.side.as_str())
    }

    pub fn check_win(&self) -> Option<Winner> {
        win::evaluate(&self.state.totals, &self.state.sides, self.config.win_target)
    }

    /// Opening-meld requirement for a side at its current running total.
    pub fn meld_requirement_for(&self, side: &str) -> Result<i64, SessionError> {
        if !self.state.sides.iter().any(|s| s == side) {
            return Err(SessionError::UnknownSide(side.to_string()));
        }
        Ok(self.config.meld_requirement(self.state.total(side)))
    }

    /// Fix the table: side and player identities, seat order, zeroed totals.
    /// Transitions `Setup` to `Active`.
    pub fn seat_table(
        &mut self,
        sides: Vec<String>,
        players: Vec<PlayerSeat>,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        if self.state.phase != Phase::Setup {
            return Err(SessionError::InvalidPhase(self.state.phase));
        }
        if sides.len() < MIN_SIDES || sides.len() > MAX_SIDES {
            return Err(SessionError::InvalidSideCount(sides.len()));
        }
        for (i, side) in sides.iter().enumerate() {
            if sides[..i].contains(side) {
                return Err(SessionError::DuplicateSide(side.clone()));
            }
        }
        if players.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        for (i, seat) in players.iter().enumerate() {
            if players[..i].iter().any(|other| other.name == seat.name) {
                return Err(SessionError::DuplicatePlayer(seat.name.clone()));
            }
            if !sides.contains(&seat.side) {
                return Err(SessionError::UnknownPlayerSide {
                    player: seat.name.clone(),
                    side: seat.side.clone(),
                });
            }
        }

        self.state.totals = sides.iter().map(|side| (side.clone(), 0)).collect();
        self.state.history.clear();
        self.state.dealer_index = 0;
        events.push(Event::TableSeated {
            sides: sides.clone(),
            players: players.iter().map(|seat| seat.name.clone()).collect(),
        });
        self.state.sides = sides;
        self.state.players = players;
        self.state.phase = Phase::Active;
        Ok(())
    }

    /// Back to `Setup` for re-seating. Identities are retained until the next
    /// [`Session::seat_table`] call replaces them.
    pub fn edit_setup(&mut self) {
        self.state.phase = Phase::Setup;
    }

    /// Score one round: apply deltas to totals, append a ledger record
    /// stamped with the current dealer, then pass the deal one seat on.
    /// Validation failures leave the session untouched.
    pub fn submit_round(
        &mut self,
        input: RoundInput,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        if self.state.phase != Phase::Active {
            return Err(SessionError::InvalidPhase(self.state.phase));
        }
        let dealer = self
            .current_dealer()
            .ok_or(SessionError::NoPlayers)?
            .name
            .clone();
        let deltas = score_round(&self.config, &self.state.sides, self.dealer_side(), &input)?;

        for (side, delta) in &deltas {
            *self.state.totals.entry(side.clone()).or_insert(0) += delta;
        }
        let ordinal = self.state.history.append(deltas.clone(), dealer.clone(), input);
        self.state.dealer_index = (self.state.dealer_index + 1) % self.state.players.len();
        events.push(Event::RoundScored {
            ordinal,
            dealer,
            deltas,
        });
        self.refresh_phase(events);
        Ok(())
    }

    /// Remove the last round, reverse its deltas (floored at zero), and move
    /// the deal back one seat. Returns the removed record.
    pub fn undo_last_round(&mut self, events: &mut EventBus) -> Result<RoundRecord, SessionError> {
        self.require_in_play()?;
        let record = self.state.history.undo_last()?;
        for (side, delta) in &record.deltas {
            let total = self.state.totals.entry(side.clone()).or_insert(0);
            *total = (*total - delta).max(0);
        }
        let seats = self.state.players.len();
        if seats > 0 {
            self.state.dealer_index = (self.state.dealer_index + seats - 1) % seats;
        }
        events.push(Event::RoundUndone {
            ordinal: record.ordinal,
        });
        self.refresh_phase(events);
        Ok(record)
    }

    /// Re-score round `index` from a freshly specified input. The record's
    /// ordinal and recorded dealer are preserved; the dealing bonus is
    /// resolved against the recorded dealer, not the current one. The dealer
    /// index does not move.
    pub fn edit_round(
        &mut self,
        index: usize,
        new_input: RoundInput,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        self.require_in_play()?;
        let old = self
            .state
            .history
            .get(index)
            .ok_or(LedgerError::OutOfRange(index))?;
        let ordinal = old.ordinal;
        let old_deltas = old.deltas.clone();
        let recorded_dealer_side = self
            .state
            .players
            .iter()
            .find(|seat| seat.name == old.dealer)
            .map(|seat| seat.side.as_str());
        let new_deltas = score_round(
            &self.config,
            &self.state.sides,
            recorded_dealer_side,
            &new_input,
        )?;

        for (side, delta) in &old_deltas {
            let total = self.state.totals.entry(side.clone()).or_insert(0);
            *total = (*total - delta).max(0);
        }
        for (side, delta) in &new_deltas {
            *self.state.totals.entry(side.clone()).or_insert(0) += delta;
        }
        self.state.history.replace(index, new_deltas, new_input)?;
        events.push(Event::RoundEdited { ordinal });
        self.refresh_phase(events);
        Ok(())
    }

    /// Fresh scores, same table: totals to zero, history cleared, deal back
    /// to seat zero.
    pub fn new_game(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.require_in_play()?;
        for total in self.state.totals.values_mut() {
            *total = 0;
        }
        self.state.history.clear();
        self.state.dealer_index = 0;
        self.state.phase = Phase::Active;
        events.push(Event::GameReset);
        Ok(())
    }

    /// Rename a side everywhere: side list, totals, seats, and every ledger
    /// record's deltas and stored input.
    pub fn rename_side(
        &mut self,
        from: &str,
        to: &str,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        if !self.state.sides.iter().any(|side| side == from) {
            return Err(SessionError::UnknownSide(from.to_string()));
        }
        if from == to {
            return Ok(());
        }
        if self.state.sides.iter().any(|side| side == to) {
            return Err(SessionError::DuplicateSide(to.to_string()));
        }
        for side in &mut self.state.sides {
            if side == from {
                *side = to.to_string();
            }
        }
        if let Some(total) = self.state.totals.remove(from) {
            self.state.totals.insert(to.to_string(), total);
        }
        for seat in &mut self.state.players {
            if seat.side == from {
                seat.side = to.to_string();
            }
        }
        self.state.history.rename_side(from, to);
        events.push(Event::SideRenamed {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }

    fn require_in_play(&self) -> Result<(), SessionError> {
        match self.state.phase {
            Phase::Active | Phase::Won => Ok(()),
            Phase::Setup => Err(SessionError::InvalidPhase(Phase::Setup)),
        }
    }

    fn refresh_phase(&mut self, events: &mut EventBus) {
        match self.check_win() {
            Some(winner) => {
                if self.state.phase != Phase::Won {
                    events.push(Event::GameWon {
                        side: winner.side,
                        total: winner.total,
                    });
                }
                self.state.phase = Phase::Won;
            }
            None => self.state.phase = Phase::Active,
        }
    }
}

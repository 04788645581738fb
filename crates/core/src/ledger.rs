use crate::RoundInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// One settled round. The submitted input is kept alongside the computed
/// deltas so a later edit starts from the exact original breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub ordinal: u32,
    pub deltas: HashMap<String, i64>,
    pub dealer: String,
    pub input: RoundInput,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no rounds recorded")]
    Empty,
    #[error("round index {0} out of range")]
    OutOfRange(usize),
}

/// Ordered round history. The ledger never touches totals or dealer state;
/// the session keeps those consistent with its content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryLedger {
    records: Vec<RoundRecord>,
}

impl HistoryLedger {
    pub fn append(&mut self, deltas: HashMap<String, i64>, dealer: String, input: RoundInput) -> u32 {
        let ordinal = self.records.len() as u32 + 1;
        self.records.push(RoundRecord {
            ordinal,
            deltas,
            dealer,
            input,
        });
        ordinal
    }

    pub fn undo_last(&mut self) -> Result<RoundRecord, LedgerError> {
        self.records.pop().ok_or(LedgerError::Empty)
    }

    /// Replace the record at `index` in place. Ordinal and recorded dealer
    /// are preserved from the existing record.
    pub fn replace(
        &mut self,
        index: usize,
        deltas: HashMap<String, i64>,
        input: RoundInput,
    ) -> Result<(), LedgerError> {
        let record = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::OutOfRange(index))?;
        record.deltas = deltas;
        record.input = input;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&RoundRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Rewrite a side key through every record: deltas, stored entries, and
    /// the went-out selector.
    pub fn rename_side(&mut self, from: &str, to: &str) {
        for record in &mut self.records {
            if let Some(delta) = record.deltas.remove(from) {
                record.deltas.insert(to.to_string(), delta);
            }
            if let Some(entry) = record.input.entries.remove(from) {
                record.input.entries.insert(to.to_string(), entry);
            }
            if record.input.went_out.as_deref() == Some(from) {
                record.input.went_out = Some(to.to_string());
            }
        }
    }
}

//! Label Table.
//!
//! Maps label names to the instruction index they precede. Built by the first
//! assembler pass, read by the second, and dropped once assembly finishes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::asm::parse::is_identifier;
use crate::common::error::AsmError;

/// Label name to instruction-index mapping for one assembly unit.
#[derive(Clone, Debug, Default)]
pub struct LabelTable {
    labels: HashMap<String, u32>,
}

impl LabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to instruction `index`.
    ///
    /// # Errors
    ///
    /// [`AsmError::InvalidLabel`] if `name` is not an identifier, and
    /// [`AsmError::DuplicateLabel`] if it is already bound. The existing
    /// binding is kept in both cases.
    pub fn define(&mut self, name: &str, index: u32) -> Result<(), AsmError> {
        if !is_identifier(name) {
            return Err(AsmError::InvalidLabel(name.to_string()));
        }
        match self.labels.entry(name.to_string()) {
            Entry::Occupied(existing) => Err(AsmError::DuplicateLabel {
                name: name.to_string(),
                index: *existing.get(),
            }),
            Entry::Vacant(slot) => {
                let _ = slot.insert(index);
                Ok(())
            }
        }
    }

    /// Looks up a label.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    /// Looks up a label that an instruction refers to.
    ///
    /// # Errors
    ///
    /// [`AsmError::UndefinedLabel`] if the label was never defined.
    pub fn resolve(&self, name: &str) -> Result<u32, AsmError> {
        self.get(name)
            .ok_or_else(|| AsmError::UndefinedLabel(name.to_string()))
    }

    /// Number of labels defined.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no label is defined.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

use crate::Chips;
use crate::Error;
use crate::Result;
use std::collections::BTreeMap;

/// Off-abstraction raises keyed by information-state fingerprint.
///
/// Entries are written at most once. A second registration for the
/// same fingerprint is refused and the first amount stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry(BTreeMap<String, Chips>);

impl Registry {
    pub fn register(&mut self, fingerprint: String, raise: Chips) -> Result<()> {
        match self.0.contains_key(&fingerprint) {
            true => Err(Error::OffAbstractionConflict(fingerprint)),
            false => {
                log::debug!("off-abstraction raise {} at {}", raise, fingerprint);
                self.0.insert(fingerprint, raise);
                Ok(())
            }
        }
    }
    pub fn lookup(&self, fingerprint: &str) -> Option<Chips> {
        self.0.get(fingerprint).copied()
    }
    pub fn contains(&self, fingerprint: &str) -> bool {
        self.0.contains_key(fingerprint)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

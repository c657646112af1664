use crate::Bucket;
use crate::Error;
use crate::MODULO_BUCKETS;
use crate::Result;
use std::collections::BTreeMap;

/// Maps a canonical hand index to a coarse information bucket.
pub trait Clusters: Send + Sync {
    fn cluster(&self, round: usize, id: u64) -> Result<Bucket>;
}

fn check(round: usize) -> Result<()> {
    match round {
        1..=4 => Ok(()),
        _ => Err(Error::RoundOutOfRange(round)),
    }
}

/// placeholder clustering: ids folded into a fixed number of buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulo(u64);

impl Default for Modulo {
    fn default() -> Self {
        Self(MODULO_BUCKETS)
    }
}

impl From<u64> for Modulo {
    fn from(n: u64) -> Self {
        assert!(n > 0, "zero buckets");
        Self(n)
    }
}

impl Clusters for Modulo {
    fn cluster(&self, round: usize, id: u64) -> Result<Bucket> {
        check(round)?;
        Ok((id % self.0) as Bucket)
    }
}

/// precomputed buckets for some rounds. ids of other rounds,
/// or past the end of a table, fall back to modulo buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rounds: BTreeMap<usize, Vec<Bucket>>,
    fallback: Modulo,
}

impl Table {
    pub fn with(mut self, round: usize, buckets: Vec<Bucket>) -> Result<Self> {
        check(round)?;
        log::info!("loaded {} buckets for round {}", buckets.len(), round);
        self.rounds.insert(round, buckets);
        Ok(self)
    }
}

impl From<Modulo> for Table {
    fn from(fallback: Modulo) -> Self {
        Self {
            rounds: BTreeMap::new(),
            fallback,
        }
    }
}

impl Clusters for Table {
    fn cluster(&self, round: usize, id: u64) -> Result<Bucket> {
        check(round)?;
        match self
            .rounds
            .get(&round)
            .and_then(|table| table.get(id as usize))
        {
            Some(bucket) => Ok(*bucket),
            None => self.fallback.cluster(round, id),
        }
    }
}

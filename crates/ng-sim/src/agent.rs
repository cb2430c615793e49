//! Agents and the word-exchange rule.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{SimError, SimResult};

/// Compact, stable agent identifier.
///
/// The game assigns ids contiguously from 0, so an id doubles as an index
/// into the population vector. Using the id (not the agent value) as the
/// network's node type keeps graph keys immutable while inventories mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(u32);

impl AgentId {
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulation participant holding a word inventory.
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    words: Vec<String>,
}

impl Agent {
    /// Create an agent with an initial inventory. Duplicates are allowed;
    /// they only make a word more likely to be spoken.
    pub fn new(id: AgentId, words: Vec<String>) -> Self {
        Self { id, words }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// The current inventory.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Process a heard word.
    ///
    /// A known word wins: the inventory collapses to exactly that word and
    /// the exchange succeeds. An unknown word is appended and the exchange
    /// fails.
    pub fn hear(&mut self, word: &str) -> bool {
        if self.words.iter().any(|w| w == word) {
            self.adopt(word.to_owned());
            true
        } else {
            self.words.push(word.to_owned());
            false
        }
    }

    /// Pick a word to utter, uniformly from the inventory.
    pub fn speak<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<String> {
        self.words.choose(rng).cloned().ok_or(SimError::InvalidArg {
            what: "agent has an empty inventory",
        })
    }

    /// Collapse the inventory to a single word (speaker side of a
    /// successful exchange).
    pub fn adopt(&mut self, word: String) {
        self.words.clear();
        self.words.push(word);
    }
}

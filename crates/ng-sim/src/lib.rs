//! ng-sim: the naming-game simulation layer.
//!
//! Provides:
//! - Agents with word inventories and the hear/speak exchange rule
//! - A noun table for seeding fresh populations
//! - The game driver: build a population and its connected communication
//!   network, then sweep exchanges until everyone agrees on one word

pub mod agent;
pub mod error;
pub mod game;
pub mod lexicon;

pub use agent::{Agent, AgentId};
pub use error::{SimError, SimResult};
pub use game::{GameOptions, GameRecord, NamingGame};

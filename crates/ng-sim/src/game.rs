//! Naming-game driver: population setup, exchange sweeps, convergence.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use ng_graph::Network;

use crate::agent::{Agent, AgentId};
use crate::error::{SimError, SimResult};
use crate::lexicon;

/// Options for a naming-game run.
#[derive(Clone, Debug)]
pub struct GameOptions {
    /// Number of agents in the population.
    pub agents: usize,
    /// Lower edge-density coefficient for the network.
    pub min_density: f64,
    /// Upper edge-density coefficient for the network.
    pub max_density: f64,
    /// Maximum number of sweeps before giving up (safety limit).
    pub max_steps: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            agents: 10,
            min_density: 0.2,
            max_density: 0.6,
            max_steps: 10_000,
        }
    }
}

/// Outcome of a naming-game run.
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Sweeps actually executed.
    pub steps: usize,
    /// Whether the population agreed on a single word.
    pub converged: bool,
    /// The agreed word, when converged.
    pub word: Option<String>,
}

/// A naming game over a connected random network.
///
/// Each sweep, every agent speaks one word to a random network neighbor.
/// A listener that knows the word collapses to it, and so does the
/// speaker; otherwise the listener adds the word to its inventory. The
/// game ends when a single word survives across the whole population.
pub struct NamingGame {
    agents: Vec<Agent>,
    network: Network<AgentId>,
    step_count: usize,
    max_steps: usize,
}

impl NamingGame {
    /// Set up a population and its communication network.
    ///
    /// Each agent starts with between 1 and `options.agents` random nouns.
    pub fn new<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> SimResult<Self> {
        if options.agents == 0 {
            return Err(SimError::InvalidArg {
                what: "agents must be positive",
            });
        }
        if options.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }

        let mut agents = Vec::with_capacity(options.agents);
        for i in 0..options.agents {
            let count = rng.gen_range(1..=options.agents);
            let words = (0..count)
                .map(|_| lexicon::random_noun(rng).to_owned())
                .collect();
            agents.push(Agent::new(AgentId::from_index(i as u32), words));
        }

        let ids: Vec<AgentId> = agents.iter().map(Agent::id).collect();
        let network = Network::build(ids, options.min_density, options.max_density, rng)?;
        debug!(
            agents = options.agents,
            edges = network.num_edges(),
            "network built"
        );

        Ok(Self {
            agents,
            network,
            step_count: 0,
            max_steps: options.max_steps,
        })
    }

    /// One sweep: every agent speaks to a random network neighbor.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SimResult<()> {
        for speaker in 0..self.agents.len() {
            let speaker_id = self.agents[speaker].id();
            let listener_id = self.network.random_neighbor(&speaker_id, rng)?;
            // ids are assigned contiguously, so an id indexes the population
            let listener = listener_id.index() as usize;

            let word = self.agents[speaker].speak(rng)?;
            let understood = self.agents[listener].hear(&word);
            if understood {
                self.agents[speaker].adopt(word);
            }
        }
        self.step_count += 1;
        Ok(())
    }

    /// The agreed word, if the population has converged on one.
    pub fn consensus(&self) -> Option<&str> {
        let mut words: HashSet<&str> = HashSet::new();
        for agent in &self.agents {
            for word in agent.words() {
                words.insert(word.as_str());
            }
        }
        if words.len() == 1 {
            words.into_iter().next()
        } else {
            None
        }
    }

    /// Whether every inventory has collapsed to the same single word.
    pub fn converged(&self) -> bool {
        self.consensus().is_some()
    }

    pub fn steps(&self) -> usize {
        self.step_count
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn network(&self) -> &Network<AgentId> {
        &self.network
    }

    /// Run sweeps until convergence or the step limit.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SimResult<GameRecord> {
        while !self.converged() && self.step_count < self.max_steps {
            self.step(rng)?;
        }

        let word = self.consensus().map(str::to_owned);
        let record = GameRecord {
            steps: self.step_count,
            converged: word.is_some(),
            word,
        };
        if record.converged {
            info!(steps = record.steps, "population converged");
        } else {
            debug!(steps = record.steps, "step limit reached before convergence");
        }
        Ok(record)
    }
}

impl fmt::Display for NamingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "step {} converged={}",
            self.step_count,
            self.converged()
        )?;
        for agent in &self.agents {
            writeln!(f, "  {}: [{}]", agent.id(), agent.words().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn options_are_validated() {
        let mut rng = StdRng::seed_from_u64(61);
        let zero_agents = GameOptions {
            agents: 0,
            ..GameOptions::default()
        };
        assert!(matches!(
            NamingGame::new(&zero_agents, &mut rng),
            Err(SimError::InvalidArg { .. })
        ));

        let zero_steps = GameOptions {
            max_steps: 0,
            ..GameOptions::default()
        };
        assert!(matches!(
            NamingGame::new(&zero_steps, &mut rng),
            Err(SimError::InvalidArg { .. })
        ));

        let bad_density = GameOptions {
            min_density: 0.9,
            max_density: 0.1,
            ..GameOptions::default()
        };
        assert!(matches!(
            NamingGame::new(&bad_density, &mut rng),
            Err(SimError::Graph(_))
        ));
    }

    #[test]
    fn fresh_games_start_unstepped_over_a_connected_network() {
        let mut rng = StdRng::seed_from_u64(62);
        let options = GameOptions::default();
        let game = NamingGame::new(&options, &mut rng).unwrap();

        assert_eq!(game.steps(), 0);
        assert_eq!(game.agents().len(), options.agents);
        assert!(game.network().is_connected());
        for agent in game.agents() {
            let count = agent.words().len();
            assert!((1..=options.agents).contains(&count));
        }
    }

    #[test]
    fn single_agent_games_are_born_converged() {
        let mut rng = StdRng::seed_from_u64(63);
        let options = GameOptions {
            agents: 1,
            ..GameOptions::default()
        };
        let mut game = NamingGame::new(&options, &mut rng).unwrap();
        assert!(game.converged());

        let record = game.run(&mut rng).unwrap();
        assert!(record.converged);
        assert_eq!(record.steps, 0);
    }

    #[test]
    fn display_lists_every_agent() {
        let mut rng = StdRng::seed_from_u64(64);
        let options = GameOptions {
            agents: 3,
            ..GameOptions::default()
        };
        let game = NamingGame::new(&options, &mut rng).unwrap();
        let rendered = game.to_string();
        assert!(rendered.starts_with("step 0"));
        assert_eq!(rendered.lines().count(), 4);
    }
}

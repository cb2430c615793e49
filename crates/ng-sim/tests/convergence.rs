//! Integration test: small seeded games reach consensus.

use rand::SeedableRng;
use rand::rngs::StdRng;

use ng_sim::{GameOptions, NamingGame};

#[test]
fn seeded_game_converges_on_a_single_word() {
    let mut rng = StdRng::seed_from_u64(1234);
    let options = GameOptions {
        agents: 6,
        min_density: 0.3,
        max_density: 0.7,
        max_steps: 50_000,
    };

    let mut game = NamingGame::new(&options, &mut rng).unwrap();
    let record = game.run(&mut rng).unwrap();

    assert!(record.converged, "game did not settle within the step limit");
    let word = record.word.expect("converged games carry the agreed word");
    for agent in game.agents() {
        assert_eq!(agent.words(), [word.as_str()]);
    }
    assert!(record.steps <= options.max_steps);
}

#[test]
fn two_agent_game_collapses_to_a_shared_word() {
    let mut rng = StdRng::seed_from_u64(99);
    let options = GameOptions {
        agents: 2,
        min_density: 0.0,
        max_density: 1.0,
        max_steps: 50_000,
    };

    let mut game = NamingGame::new(&options, &mut rng).unwrap();
    let record = game.run(&mut rng).unwrap();

    assert!(record.converged);
    let consensus = game.consensus().expect("consensus after convergence");
    assert_eq!(record.word.as_deref(), Some(consensus));
}

#[test]
fn stepping_never_empties_an_inventory() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = GameOptions {
        agents: 5,
        min_density: 0.2,
        max_density: 0.5,
        max_steps: 100,
    };

    let mut game = NamingGame::new(&options, &mut rng).unwrap();
    for _ in 0..20 {
        game.step(&mut rng).unwrap();
        for agent in game.agents() {
            assert!(!agent.words().is_empty());
        }
    }
    assert_eq!(game.steps(), 20);
}

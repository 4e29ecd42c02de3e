//! Environment testing utilities
use crate::agents::{Actor, RandomActor};
use crate::error::EnvError;
use crate::models::{Action, Environment};
use crate::simulation::{run_episode, EpisodeSummary};

/// Run one episode with a random actor.
pub fn run_random_episode<E: Environment>(env: &mut E, seed: u64) -> EpisodeSummary {
    let mut actor = RandomActor::new(seed);
    run_episode(env, &mut actor, &mut ()).unwrap()
}

/// Run episodes with a random actor and check the step contract.
///
/// Checks that observations are non-empty, that the total reward equals the
/// sum of its components, and that a finished episode rejects further steps.
pub fn run_episodes<E: Environment>(env: &mut E, num_episodes: u32, seed: u64) {
    let mut actor = RandomActor::new(seed);
    for _ in 0..num_episodes {
        let mut observation = env.reset().unwrap();
        loop {
            assert!(!observation.text.is_empty());
            let action = actor.act(&observation);
            let result = env.step(&action).unwrap();
            let component_sum: f64 = result.rewards.values().sum();
            assert!((result.reward - component_sum).abs() < 1e-9);
            if result.done {
                break;
            }
            observation = result.observation;
        }
        assert_eq!(
            env.step(&Action::new("<Action>pass</Action>")).unwrap_err(),
            EnvError::NotStarted
        );
    }
}

//! Running episodes between an environment and an actor.
use crate::agents::Actor;
use crate::error::EnvError;
use crate::logging::{Event, Logger};
use crate::models::Environment;

/// Statistics of one finished episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    /// Number of steps taken.
    pub steps: u32,
    /// Total reward earned.
    pub reward: f64,
}

/// Run a single episode to completion.
///
/// Pass `&mut ()` as the logger to discard statistics.
pub fn run_episode<E, A, L>(
    env: &mut E,
    actor: &mut A,
    logger: &mut L,
) -> Result<EpisodeSummary, EnvError>
where
    E: Environment + ?Sized,
    A: Actor + ?Sized,
    L: Logger,
{
    let mut observation = env.reset()?;
    let mut steps = 0;
    let mut reward = 0.0;
    loop {
        let action = actor.act(&observation);
        let result = env.step(&action)?;
        steps += 1;
        reward += result.reward;
        logger.log(Event::Step, "reward", result.reward.into());
        logger.done(Event::Step);
        if result.done {
            break;
        }
        observation = result.observation;
    }
    logger.log(Event::Episode, "reward", reward.into());
    logger.log(Event::Episode, "length", f64::from(steps).into());
    logger.done(Event::Episode);
    Ok(EpisodeSummary { steps, reward })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomActor;
    use crate::rlcards_env::BlackjackEnv;
    use crate::single_step::{SingleStepEnv, Task};

    #[test]
    fn single_step_episode_has_one_step() {
        let mut env = SingleStepEnv::new(vec![Task::new("What is 2 + 2?", "4")], 0).unwrap();
        let mut actor = RandomActor::new(1);
        let summary = run_episode(&mut env, &mut actor, &mut ()).unwrap();
        assert_eq!(summary.steps, 1);
    }

    #[test]
    fn blackjack_episode_reward_is_bounded() {
        let mut env = BlackjackEnv::from_seed(2);
        let mut actor = RandomActor::new(3);
        for _ in 0..20 {
            let summary = run_episode(&mut env, &mut actor, &mut ()).unwrap();
            assert!((-1.0..=1.0).contains(&summary.reward));
            assert!(summary.steps >= 1);
        }
    }

    #[test]
    fn boxed_environment_runs() {
        let mut env: Box<dyn Environment> = Box::new(BlackjackEnv::from_seed(4));
        let mut actor = RandomActor::new(5);
        run_episode(&mut env, &mut actor, &mut ()).unwrap();
    }
}

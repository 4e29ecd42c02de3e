//! The crate root exposes the environment and exchange types directly.
use llmgym::agents::RandomActor;
use llmgym::simulation::run_episode;
use llmgym::single_step::Task;
use llmgym::{
    Action, ActionExtractor, BlackjackEnv, DoudizhuEnv, Environment, LeducHoldemEnv, MultiStepEnv,
    Observation, Opponent, RLCardsEnv, SingleStepEnv, StepResult, TicTacToeEnv,
};

fn assert_environment<E: Environment>(_: &E) {}

fn assert_multi_step<E: MultiStepEnv>(_: &E) {}

#[test]
fn all_names_resolve_and_run() {
    let mut tic_tac_toe: TicTacToeEnv = TicTacToeEnv::with_opponent(Opponent::Random, 0);
    assert_environment(&tic_tac_toe);
    let observation: Observation = tic_tac_toe.reset().unwrap();
    assert!(observation.text.contains("tic-tac-toe"));
    let action = Action::new("<Action>5</Action>");
    let result: StepResult = tic_tac_toe.step(&action).unwrap();
    assert_eq!(result.reward, result.rewards.values().sum::<f64>());

    let mut blackjack: BlackjackEnv = BlackjackEnv::from_seed(1);
    assert_environment(&blackjack);
    blackjack.reset().unwrap();

    let mut leduc: LeducHoldemEnv = LeducHoldemEnv::from_seed(2);
    assert_environment(&leduc);
    leduc.reset().unwrap();

    let mut doudizhu: DoudizhuEnv = DoudizhuEnv::from_seed(3);
    assert_environment(&doudizhu);
    doudizhu.reset().unwrap();

    let mut single_step: SingleStepEnv =
        SingleStepEnv::new(vec![Task::new("What is 2 + 2?", "4")], 4).unwrap();
    assert_environment(&single_step);
    single_step.reset().unwrap();

    let extractor: ActionExtractor = ActionExtractor::default();
    assert_eq!(
        extractor.extract("<Action>hit</Action>").as_deref(),
        Some("hit")
    );

    let dynamics: RLCardsEnv<llmgym::rlcards_env::Blackjack> =
        RLCardsEnv::new(llmgym::rlcards_env::Blackjack, 25);
    assert_multi_step(&dynamics);
}

#[test]
fn glob_import_covers_the_surface() {
    // The explicit re-export list is usable through a wildcard import.
    use llmgym::*;

    let mut env = TicTacToeEnv::from_seed(5);
    let mut actor = RandomActor::new(6);
    let summary = run_episode(&mut env, &mut actor, &mut ()).unwrap();
    assert!(summary.steps >= 1);
}

#[test]
fn environments_are_object_safe() {
    let mut envs: Vec<Box<dyn Environment>> = vec![
        Box::new(TicTacToeEnv::from_seed(7)),
        Box::new(BlackjackEnv::from_seed(8)),
        Box::new(LeducHoldemEnv::from_seed(9)),
        Box::new(DoudizhuEnv::from_seed(10)),
    ];
    let mut actor = RandomActor::new(11);
    for env in &mut envs {
        let summary = run_episode(env, &mut actor, &mut ()).unwrap();
        assert!(summary.steps >= 1);
    }
}

//! Tic-tac-toe against a scripted opponent.
use crate::models::{Action, Observation};
use crate::multi_step::{MultiStep, MultiStepEnv, Turn};
use crate::rlcards_env::ActionExtractor;
use rand::prelude::*;
use std::fmt;

/// Board marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Cell contents.
pub type Cell = Option<Mark>;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    pub const fn new() -> Self {
        Self { cells: [None; 9] }
    }

    pub const fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Indices of the empty cells.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The mark holding a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&index| self.cells[index] == Some(first))
                .then(|| first)
        })
    }

    fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(mark);
    }
}

/// Empty cells show their 1-based number so the agent can name a move.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                let index = row * 3 + col;
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[index] {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => write!(f, " {} ", index + 1)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The policy playing O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random over the empty cells.
    Random,
    /// Exact play via full-depth minimax.
    Optimal,
}

impl Opponent {
    /// Choose a cell for `mark`.
    ///
    /// # Panics
    /// Panics if the board has no empty cell.
    pub fn select_move(&self, board: &Board, mark: Mark, rng: &mut StdRng) -> usize {
        let empty = board.empty_cells();
        assert!(!empty.is_empty(), "no moves available");
        match self {
            Self::Random => *empty.choose(rng).unwrap(),
            Self::Optimal => {
                let mut best = (i32::MIN, empty[0]);
                for index in empty {
                    let mut next = *board;
                    next.place(index, mark);
                    let value = -negamax(&next, mark.other());
                    if value > best.0 {
                        best = (value, index);
                    }
                }
                best.1
            }
        }
    }
}

/// Value of `board` for the player about to move.
fn negamax(board: &Board, to_move: Mark) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == to_move { 1 } else { -1 };
    }
    if board.is_full() {
        return 0;
    }
    board
        .empty_cells()
        .into_iter()
        .map(|index| {
            let mut next = *board;
            next.place(index, to_move);
            -negamax(&next, to_move.other())
        })
        .max()
        .unwrap()
}

/// Tic-tac-toe dynamics: the agent plays X and moves first.
///
/// Moves are 1-based cell numbers inside action tags. A move on an occupied
/// or out-of-range cell leaves the board unchanged and earns an
/// `illegal_move` component with feedback.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub opponent: Opponent,
    extractor: ActionExtractor,
}

impl TicTacToe {
    pub fn new(opponent: Opponent) -> Self {
        Self {
            opponent,
            extractor: ActionExtractor::default(),
        }
    }
}

impl MultiStepEnv for TicTacToe {
    type State = Board;

    fn initial_state(&self, _rng: &mut StdRng) -> Board {
        Board::new()
    }

    fn observe(&self, board: &Board) -> Observation {
        let legal: Vec<String> = board
            .empty_cells()
            .iter()
            .map(|index| (index + 1).to_string())
            .collect();
        Observation::new(format!(
            "You are playing tic-tac-toe as X.\n{}Choose an empty cell and reply with <Action>cell</Action>.",
            board
        ))
        .with_context("legal_moves", legal.join(" "))
    }

    fn apply(&self, board: &mut Board, action: &Action, rng: &mut StdRng) -> Turn {
        let cell = self
            .extractor
            .extract(&action.response)
            .and_then(|token| token.parse::<usize>().ok())
            .filter(|cell| (1..=9).contains(cell))
            .map(|cell| cell - 1)
            .filter(|&cell| board.get(cell).is_none());
        let cell = match cell {
            Some(cell) => cell,
            None => {
                return Turn::component("illegal_move", 0.0).with_info(
                    "feedback",
                    "reply with <Action>N</Action> where N is one of the listed empty cells",
                );
            }
        };

        board.place(cell, Mark::X);
        if board.winner() == Some(Mark::X) {
            return Turn::component("win", 1.0).finish();
        }
        if board.is_full() {
            return Turn::component("draw", 0.5).finish();
        }

        let reply = self.opponent.select_move(board, Mark::O, rng);
        board.place(reply, Mark::O);
        if board.winner() == Some(Mark::O) {
            return Turn::component("loss", 0.0).finish();
        }
        if board.is_full() {
            return Turn::component("draw", 0.5).finish();
        }
        Turn::component("progress", 0.0)
    }

    fn max_steps(&self) -> Option<u32> {
        Some(20)
    }
}

/// Tic-tac-toe as a stateful [`Environment`](crate::models::Environment).
pub type TicTacToeEnv = MultiStep<TicTacToe>;

impl TicTacToeEnv {
    /// Against a random opponent.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_opponent(Opponent::Random, seed)
    }

    pub fn with_opponent(opponent: Opponent, seed: u64) -> Self {
        MultiStep::new(TicTacToe::new(opponent), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Environment;
    use crate::testing;

    fn board(marks: [(usize, Mark); 2]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn winner_detection() {
        let mut b = Board::new();
        assert_eq!(b.winner(), None);
        b.place(0, Mark::X);
        b.place(4, Mark::X);
        b.place(8, Mark::X);
        assert_eq!(b.winner(), Some(Mark::X));
    }

    #[test]
    fn optimal_opponent_blocks() {
        // X threatens 0-1-2; O must take cell 2.
        let b = board([(0, Mark::X), (1, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Opponent::Optimal.select_move(&b, Mark::O, &mut rng), 2);
    }

    #[test]
    fn optimal_opponent_wins_when_possible() {
        // O completes 0-1-2 rather than blocking X's 3-4-5 threat.
        let mut b = Board::new();
        b.place(0, Mark::O);
        b.place(1, Mark::O);
        b.place(3, Mark::X);
        b.place(4, Mark::X);
        let mut rng = StdRng::seed_from_u64(0);
        let cell = Opponent::Optimal.select_move(&b, Mark::O, &mut rng);
        let mut next = b;
        next.place(cell, Mark::O);
        assert_eq!(next.winner(), Some(Mark::O));
    }

    #[test]
    fn illegal_move_is_feedback() {
        let mut env = TicTacToeEnv::from_seed(3);
        env.reset().unwrap();
        let result = env.step(&"<Action>ten</Action>".into()).unwrap();
        assert!(!result.done);
        assert_eq!(result.rewards.get("illegal_move"), Some(&0.0));
        assert!(result.info.contains_key("feedback"));

        // Occupying a taken cell is also rejected.
        env.step(&"<Action>5</Action>".into()).unwrap();
        let result = env.step(&"<Action>5</Action>".into()).unwrap();
        assert_eq!(result.rewards.get("illegal_move"), Some(&0.0));
    }

    #[test]
    fn random_agent_never_beats_optimal_opponent() {
        let mut env = TicTacToeEnv::with_opponent(Opponent::Optimal, 11);
        for episode in 0..20 {
            let summary = testing::run_random_episode(&mut env, episode);
            assert!(summary.reward < 1.0);
        }
    }

    #[test]
    fn episodes_satisfy_step_contract() {
        let mut env = TicTacToeEnv::from_seed(17);
        testing::run_episodes(&mut env, 50, 18);
    }
}

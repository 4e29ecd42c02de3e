//! Blackjack against a dealer that stands on 17.
use super::{CardGame, RLCardsEnv};
use crate::multi_step::MultiStep;
use rand::prelude::*;
use std::fmt;

/// More turns than any hand can last.
const MAX_STEPS: u32 = 25;

/// Ranks are 1 (ace) through 13 (king); suits do not affect totals.
fn rank_char(rank: u8) -> char {
    match rank {
        1 => 'A',
        10 => 'T',
        11 => 'J',
        12 => 'Q',
        13 => 'K',
        _ => (b'0' + rank) as char,
    }
}

fn hand_string(hand: &[u8]) -> String {
    let chars: Vec<String> = hand.iter().map(|&rank| rank_char(rank).to_string()).collect();
    chars.join(" ")
}

/// Best total of a hand, counting one ace as 11 when it fits.
fn hand_value(hand: &[u8]) -> u32 {
    let total: u32 = hand.iter().map(|&rank| u32::from(rank.min(10))).sum();
    if hand.contains(&1) && total + 10 <= 21 {
        total + 10
    } else {
        total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlackjackMove {
    Hit,
    Stand,
}

impl fmt::Display for BlackjackMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::Stand => write!(f, "stand"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlackjackState {
    deck: Vec<u8>,
    player: Vec<u8>,
    dealer: Vec<u8>,
    finished: bool,
}

impl BlackjackState {
    fn draw(&mut self) -> u8 {
        // A 52-card deck cannot empty within one hand.
        self.deck.pop().expect("deck exhausted")
    }
}

/// Single-hand blackjack.
///
/// The agent may hit or stand; standing hands the turn to the dealer, who
/// draws until reaching 17. Payoff is +1 / 0 / -1 for a win / push / loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blackjack;

impl CardGame for Blackjack {
    type State = BlackjackState;
    type Move = BlackjackMove;

    fn deal(&self, rng: &mut StdRng) -> BlackjackState {
        let mut deck: Vec<u8> = (1..=13).flat_map(|rank| [rank; 4]).collect();
        deck.shuffle(rng);
        let mut state = BlackjackState {
            deck,
            player: Vec::new(),
            dealer: Vec::new(),
            finished: false,
        };
        for _ in 0..2 {
            let card = state.draw();
            state.player.push(card);
            let card = state.draw();
            state.dealer.push(card);
        }
        state
    }

    fn legal_moves(&self, _state: &BlackjackState) -> Vec<BlackjackMove> {
        vec![BlackjackMove::Hit, BlackjackMove::Stand]
    }

    fn parse_move(&self, _state: &BlackjackState, token: &str) -> Option<BlackjackMove> {
        match token.trim().to_ascii_lowercase().as_str() {
            "hit" => Some(BlackjackMove::Hit),
            "stand" => Some(BlackjackMove::Stand),
            _ => None,
        }
    }

    fn apply(&self, state: &mut BlackjackState, mv: &BlackjackMove, _rng: &mut StdRng) {
        match mv {
            BlackjackMove::Hit => {
                let card = state.draw();
                state.player.push(card);
                if hand_value(&state.player) > 21 {
                    state.finished = true;
                }
            }
            BlackjackMove::Stand => {
                while hand_value(&state.dealer) < 17 {
                    let card = state.draw();
                    state.dealer.push(card);
                }
                state.finished = true;
            }
        }
    }

    fn is_over(&self, state: &BlackjackState) -> bool {
        state.finished
    }

    fn payoff(&self, state: &BlackjackState) -> f64 {
        let player = hand_value(&state.player);
        if player > 21 {
            return -1.0;
        }
        let dealer = hand_value(&state.dealer);
        if dealer > 21 || player > dealer {
            1.0
        } else if player == dealer {
            0.0
        } else {
            -1.0
        }
    }

    fn render(&self, state: &BlackjackState) -> String {
        if state.finished {
            format!(
                "Blackjack. Your hand: {} (value {}). Dealer hand: {} (value {}).",
                hand_string(&state.player),
                hand_value(&state.player),
                hand_string(&state.dealer),
                hand_value(&state.dealer),
            )
        } else {
            format!(
                "Blackjack. Your hand: {} (value {}). Dealer shows: {}.\n\
                 Reply with <Action>hit</Action> or <Action>stand</Action>.",
                hand_string(&state.player),
                hand_value(&state.player),
                rank_char(state.dealer[0]),
            )
        }
    }
}

/// Blackjack as a stateful [`Environment`](crate::models::Environment).
pub type BlackjackEnv = MultiStep<RLCardsEnv<Blackjack>>;

impl BlackjackEnv {
    pub fn from_seed(seed: u64) -> Self {
        MultiStep::new(RLCardsEnv::new(Blackjack, MAX_STEPS), seed)
    }
}

//! Leduc hold'em against a random opponent.
use super::{CardGame, RLCardsEnv};
use crate::multi_step::MultiStep;
use enum_map::{enum_map, Enum, EnumMap};
use rand::prelude::*;
use std::fmt;

/// Twice the betting actions either round can hold.
const MAX_STEPS: u32 = 16;

/// Raises allowed per betting round.
const MAX_RAISES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
enum Seat {
    Agent,
    Rival,
}

impl Seat {
    const fn other(self) -> Self {
        match self {
            Self::Agent => Self::Rival,
            Self::Rival => Self::Agent,
        }
    }
}

/// Card ranks: 0 = jack, 1 = queen, 2 = king.
fn rank_char(rank: u8) -> char {
    match rank {
        0 => 'J',
        1 => 'Q',
        _ => 'K',
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeducMove {
    Call,
    Raise,
    Fold,
    Check,
}

impl fmt::Display for LeducMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeducState {
    hands: EnumMap<Seat, u8>,
    public: u8,
    bets: EnumMap<Seat, u32>,
    round: u8,
    raises: u8,
    /// A check is pending in this round.
    checked: bool,
    to_act: Seat,
    folded: Option<Seat>,
    over: bool,
}

impl LeducState {
    fn legal(&self, seat: Seat) -> Vec<LeducMove> {
        let mut moves = Vec::with_capacity(3);
        if self.bets[seat] == self.bets[seat.other()] {
            moves.push(LeducMove::Check);
        } else {
            moves.push(LeducMove::Call);
        }
        if self.raises < MAX_RAISES {
            moves.push(LeducMove::Raise);
        }
        moves.push(LeducMove::Fold);
        moves
    }

    fn play(&mut self, seat: Seat, mv: LeducMove) {
        match mv {
            LeducMove::Fold => {
                self.folded = Some(seat);
                self.over = true;
            }
            LeducMove::Check => {
                if self.checked {
                    self.end_round();
                } else {
                    self.checked = true;
                    self.to_act = seat.other();
                }
            }
            LeducMove::Call => {
                self.bets[seat] = self.bets[seat.other()];
                self.end_round();
            }
            LeducMove::Raise => {
                let amount = if self.round == 1 { 2 } else { 4 };
                self.bets[seat] = self.bets[seat.other()] + amount;
                self.raises += 1;
                self.checked = false;
                self.to_act = seat.other();
            }
        }
    }

    fn end_round(&mut self) {
        if self.round == 1 {
            self.round = 2;
            self.raises = 0;
            self.checked = false;
            self.to_act = Seat::Agent;
        } else {
            self.over = true;
        }
    }

    /// Winner at showdown; `None` is a split pot.
    ///
    /// A hand pairing the public card wins; at most one can, since only two
    /// copies of each rank exist. Otherwise the higher rank wins.
    fn showdown_winner(&self) -> Option<Seat> {
        if self.hands[Seat::Agent] == self.public {
            Some(Seat::Agent)
        } else if self.hands[Seat::Rival] == self.public {
            Some(Seat::Rival)
        } else {
            match self.hands[Seat::Agent].cmp(&self.hands[Seat::Rival]) {
                std::cmp::Ordering::Greater => Some(Seat::Agent),
                std::cmp::Ordering::Less => Some(Seat::Rival),
                std::cmp::Ordering::Equal => None,
            }
        }
    }
}

/// Two-round Leduc hold'em.
///
/// Six-card deck (jack, queen, king, twice each), one private card per
/// player, an ante of one chip, and a public card revealed for the second
/// betting round. Raises are fixed at two chips in round one and four in
/// round two, at most two per round. The agent acts first in each round;
/// the opponent plays uniformly random legal moves. Payoff is the chips won
/// or lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeducHoldem;

impl CardGame for LeducHoldem {
    type State = LeducState;
    type Move = LeducMove;

    fn deal(&self, rng: &mut StdRng) -> LeducState {
        let mut deck = [0_u8, 0, 1, 1, 2, 2];
        deck.shuffle(rng);
        LeducState {
            hands: enum_map! { Seat::Agent => deck[0], Seat::Rival => deck[1] },
            public: deck[2],
            bets: enum_map! { _ => 1 },
            round: 1,
            raises: 0,
            checked: false,
            to_act: Seat::Agent,
            folded: None,
            over: false,
        }
    }

    fn legal_moves(&self, state: &LeducState) -> Vec<LeducMove> {
        if state.over {
            return Vec::new();
        }
        state.legal(Seat::Agent)
    }

    fn parse_move(&self, state: &LeducState, token: &str) -> Option<LeducMove> {
        let mv = match token.trim().to_ascii_lowercase().as_str() {
            "call" => LeducMove::Call,
            "raise" => LeducMove::Raise,
            "fold" => LeducMove::Fold,
            "check" => LeducMove::Check,
            _ => return None,
        };
        self.legal_moves(state).contains(&mv).then_some(mv)
    }

    fn apply(&self, state: &mut LeducState, mv: &LeducMove, rng: &mut StdRng) {
        state.play(Seat::Agent, *mv);
        while !state.over && state.to_act == Seat::Rival {
            let reply = *state.legal(Seat::Rival).choose(rng).unwrap();
            state.play(Seat::Rival, reply);
        }
    }

    fn is_over(&self, state: &LeducState) -> bool {
        state.over
    }

    fn payoff(&self, state: &LeducState) -> f64 {
        let winner = match state.folded {
            Some(seat) => Some(seat.other()),
            None => state.showdown_winner(),
        };
        match winner {
            Some(Seat::Agent) => f64::from(state.bets[Seat::Rival]),
            Some(Seat::Rival) => -f64::from(state.bets[Seat::Agent]),
            None => 0.0,
        }
    }

    fn render(&self, state: &LeducState) -> String {
        let public = if state.round >= 2 || state.over {
            rank_char(state.public).to_string()
        } else {
            "hidden".to_owned()
        };
        format!(
            "Leduc hold'em. Your card: {}. Public card: {}. Round {}.\n\
             You have bet {} chips; the opponent has bet {}.\n\
             Reply with <Action>move</Action>.",
            rank_char(state.hands[Seat::Agent]),
            public,
            state.round,
            state.bets[Seat::Agent],
            state.bets[Seat::Rival],
        )
    }
}

/// Leduc hold'em as a stateful [`Environment`](crate::models::Environment).
pub type LeducHoldemEnv = MultiStep<RLCardsEnv<LeducHoldem>>;

impl LeducHoldemEnv {
    pub fn from_seed(seed: u64) -> Self {
        MultiStep::new(RLCardsEnv::new(LeducHoldem, MAX_STEPS), seed)
    }
}

//! Dou dizhu with the agent as the landlord.
use super::{CardGame, RLCardsEnv};
use crate::multi_step::MultiStep;
use enum_map::{Enum, EnumMap};
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Generous bound; games end in far fewer agent turns.
const MAX_STEPS: u32 = 100;

/// Card ranks in play order. Only `Three` through `Ace` may form chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

/// Number of chainable ranks (`Three` through `Ace`).
const CHAIN_SPAN: usize = 12;

impl Rank {
    const ALL: [Self; 15] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::BlackJoker,
        Self::RedJoker,
    ];

    fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            '2' => Self::Two,
            'B' => Self::BlackJoker,
            'R' => Self::RedJoker,
            _ => return None,
        })
    }

    const fn to_char(self) -> char {
        match self {
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            Self::Two => '2',
            Self::BlackJoker => 'B',
            Self::RedJoker => 'R',
        }
    }
}

/// Cards held, by rank.
type Counts = EnumMap<Rank, u8>;

/// Combo families. Chain variants carry the chain length in ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComboKind {
    Solo,
    Pair,
    Trio,
    TrioSolo,
    TrioPair,
    SoloChain(usize),
    PairChain(usize),
    TrioChain(usize),
    Bomb,
    Rocket,
}

/// A playable set of cards.
///
/// `rank` is the principal rank: the repeated rank for solos through trios
/// and bombs, the lowest rank for chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    kind: ComboKind,
    rank: Rank,
    cards: SmallVec<[Rank; 20]>,
}

impl Combo {
    /// Whether this combo may be played over `other`.
    fn beats(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (ComboKind::Rocket, _) => true,
            (_, ComboKind::Rocket) => false,
            (ComboKind::Bomb, ComboKind::Bomb) => self.rank > other.rank,
            (ComboKind::Bomb, _) => true,
            (_, ComboKind::Bomb) => false,
            (a, b) => a == b && self.rank > other.rank,
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in &self.cards {
            write!(f, "{}", rank.to_char())?;
        }
        Ok(())
    }
}

/// Identify the combo formed by `cards`, if any.
fn classify(cards: &[Rank]) -> Option<Combo> {
    if cards.is_empty() {
        return None;
    }
    let mut counts: Counts = EnumMap::default();
    for &rank in cards {
        counts[rank] += 1;
    }
    let groups: Vec<(Rank, u8)> = counts
        .iter()
        .filter(|(_, &n)| n > 0)
        .map(|(rank, &n)| (rank, n))
        .collect();

    let mut sorted: SmallVec<[Rank; 20]> = cards.iter().copied().collect();
    sorted.sort();
    let combo = |kind: ComboKind, rank: Rank| {
        Some(Combo {
            kind,
            rank,
            cards: sorted.clone(),
        })
    };

    match groups.as_slice() {
        [(rank, 1)] => return combo(ComboKind::Solo, *rank),
        [(rank, 2)] => return combo(ComboKind::Pair, *rank),
        [(rank, 3)] => return combo(ComboKind::Trio, *rank),
        [(rank, 4)] => return combo(ComboKind::Bomb, *rank),
        [(Rank::BlackJoker, 1), (Rank::RedJoker, 1)] => {
            return combo(ComboKind::Rocket, Rank::RedJoker)
        }
        [(trio, 3), (_kick, 1)] | [(_kick, 1), (trio, 3)] => {
            return combo(ComboKind::TrioSolo, *trio)
        }
        [(trio, 3), (_kick, 2)] | [(_kick, 2), (trio, 3)] => {
            return combo(ComboKind::TrioPair, *trio)
        }
        _ => {}
    }

    // Chains: a run of consecutive low ranks, uniform multiplicity.
    let count = groups[0].1;
    if groups.iter().any(|&(_, n)| n != count) {
        return None;
    }
    let consecutive = groups
        .windows(2)
        .all(|pair| pair[1].0 as usize == pair[0].0 as usize + 1)
        && groups.last().unwrap().0 <= Rank::Ace;
    if !consecutive {
        return None;
    }
    let length = groups.len();
    let head = groups[0].0;
    match count {
        1 if length >= 5 => combo(ComboKind::SoloChain(length), head),
        2 if length >= 3 => combo(ComboKind::PairChain(length), head),
        3 if length >= 2 => combo(ComboKind::TrioChain(length), head),
        _ => None,
    }
}

fn ranks_with_at_least(hand: &Counts, count: u8, above: Option<Rank>) -> Vec<Rank> {
    hand.iter()
        .filter(|&(rank, &have)| have >= count && above.map_or(true, |floor| rank > floor))
        .map(|(rank, _)| rank)
        .collect()
}

/// Heads of chains of `length` ranks with multiplicity `count`.
fn chain_heads(hand: &Counts, count: u8, length: usize, above: Option<Rank>) -> Vec<Rank> {
    if length > CHAIN_SPAN {
        return Vec::new();
    }
    let mut heads = Vec::new();
    for start in 0..=(CHAIN_SPAN - length) {
        let head = Rank::ALL[start];
        if let Some(floor) = above {
            if head <= floor {
                continue;
            }
        }
        if (start..start + length).all(|index| hand[Rank::ALL[index]] >= count) {
            heads.push(head);
        }
    }
    heads
}

fn repeat_combo(kind: ComboKind, rank: Rank, count: usize) -> Combo {
    Combo {
        kind,
        rank,
        cards: smallvec![rank; count],
    }
}

fn chain_combo(kind: ComboKind, head: Rank, length: usize, count: usize) -> Combo {
    let mut cards = SmallVec::new();
    for index in 0..length {
        let rank = Rank::ALL[head as usize + index];
        for _ in 0..count {
            cards.push(rank);
        }
    }
    Combo {
        kind,
        rank: head,
        cards,
    }
}

fn kicked_combo(kind: ComboKind, trio: Rank, kicker: Rank, kicker_count: usize) -> Combo {
    let mut cards: SmallVec<[Rank; 20]> = smallvec![trio; 3];
    for _ in 0..kicker_count {
        cards.push(kicker);
    }
    cards.sort();
    Combo {
        kind,
        rank: trio,
        cards,
    }
}

fn rocket_combo() -> Combo {
    Combo {
        kind: ComboKind::Rocket,
        rank: Rank::RedJoker,
        cards: smallvec![Rank::BlackJoker, Rank::RedJoker],
    }
}

/// All moves available from `hand` against `last` (`None` when leading).
fn legal_plays(hand: &Counts, last: Option<&Combo>) -> Vec<DoudizhuMove> {
    let play = DoudizhuMove::Play;
    let mut moves = Vec::new();
    match last {
        None => {
            for rank in ranks_with_at_least(hand, 1, None) {
                moves.push(play(repeat_combo(ComboKind::Solo, rank, 1)));
            }
            for rank in ranks_with_at_least(hand, 2, None) {
                moves.push(play(repeat_combo(ComboKind::Pair, rank, 2)));
            }
            for trio in ranks_with_at_least(hand, 3, None) {
                moves.push(play(repeat_combo(ComboKind::Trio, trio, 3)));
                for kicker in ranks_with_at_least(hand, 1, None) {
                    if kicker != trio {
                        moves.push(play(kicked_combo(ComboKind::TrioSolo, trio, kicker, 1)));
                    }
                }
                for kicker in ranks_with_at_least(hand, 2, None) {
                    if kicker != trio {
                        moves.push(play(kicked_combo(ComboKind::TrioPair, trio, kicker, 2)));
                    }
                }
            }
            for length in 5..=CHAIN_SPAN {
                for head in chain_heads(hand, 1, length, None) {
                    moves.push(play(chain_combo(ComboKind::SoloChain(length), head, length, 1)));
                }
            }
            for length in 3..=10 {
                for head in chain_heads(hand, 2, length, None) {
                    moves.push(play(chain_combo(ComboKind::PairChain(length), head, length, 2)));
                }
            }
            for length in 2..=6 {
                for head in chain_heads(hand, 3, length, None) {
                    moves.push(play(chain_combo(ComboKind::TrioChain(length), head, length, 3)));
                }
            }
        }
        Some(last) => {
            moves.push(DoudizhuMove::Pass);
            match last.kind {
                ComboKind::Solo => {
                    for rank in ranks_with_at_least(hand, 1, Some(last.rank)) {
                        moves.push(play(repeat_combo(ComboKind::Solo, rank, 1)));
                    }
                }
                ComboKind::Pair => {
                    for rank in ranks_with_at_least(hand, 2, Some(last.rank)) {
                        moves.push(play(repeat_combo(ComboKind::Pair, rank, 2)));
                    }
                }
                ComboKind::Trio => {
                    for rank in ranks_with_at_least(hand, 3, Some(last.rank)) {
                        moves.push(play(repeat_combo(ComboKind::Trio, rank, 3)));
                    }
                }
                ComboKind::TrioSolo => {
                    for trio in ranks_with_at_least(hand, 3, Some(last.rank)) {
                        for kicker in ranks_with_at_least(hand, 1, None) {
                            if kicker != trio {
                                moves.push(play(kicked_combo(ComboKind::TrioSolo, trio, kicker, 1)));
                            }
                        }
                    }
                }
                ComboKind::TrioPair => {
                    for trio in ranks_with_at_least(hand, 3, Some(last.rank)) {
                        for kicker in ranks_with_at_least(hand, 2, None) {
                            if kicker != trio {
                                moves.push(play(kicked_combo(ComboKind::TrioPair, trio, kicker, 2)));
                            }
                        }
                    }
                }
                ComboKind::SoloChain(length) => {
                    for head in chain_heads(hand, 1, length, Some(last.rank)) {
                        moves.push(play(chain_combo(ComboKind::SoloChain(length), head, length, 1)));
                    }
                }
                ComboKind::PairChain(length) => {
                    for head in chain_heads(hand, 2, length, Some(last.rank)) {
                        moves.push(play(chain_combo(ComboKind::PairChain(length), head, length, 2)));
                    }
                }
                ComboKind::TrioChain(length) => {
                    for head in chain_heads(hand, 3, length, Some(last.rank)) {
                        moves.push(play(chain_combo(ComboKind::TrioChain(length), head, length, 3)));
                    }
                }
                ComboKind::Bomb | ComboKind::Rocket => {}
            }
        }
    }

    // Bombs and the rocket beat anything except a rocket or a bigger bomb.
    let rocket_on_table = matches!(last, Some(last) if last.kind == ComboKind::Rocket);
    if !rocket_on_table {
        let floor = match last {
            Some(last) if last.kind == ComboKind::Bomb => Some(last.rank),
            _ => None,
        };
        for rank in ranks_with_at_least(hand, 4, floor) {
            moves.push(play(repeat_combo(ComboKind::Bomb, rank, 4)));
        }
        if hand[Rank::BlackJoker] > 0 && hand[Rank::RedJoker] > 0 {
            moves.push(play(rocket_combo()));
        }
    }
    moves
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
enum Seat {
    Landlord,
    Down,
    Up,
}

impl Seat {
    const fn next(self) -> Self {
        match self {
            Self::Landlord => Self::Down,
            Self::Down => Self::Up,
            Self::Up => Self::Landlord,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Down => "down peasant",
            Self::Up => "up peasant",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DoudizhuState {
    hands: EnumMap<Seat, Counts>,
    turn: Seat,
    /// Combo to beat and who played it; `None` when the turn holder leads.
    last: Option<(Seat, Combo)>,
    winner: Option<Seat>,
}

impl DoudizhuState {
    fn hand_size(&self, seat: Seat) -> usize {
        self.hands[seat].values().map(|&n| usize::from(n)).sum()
    }

    fn legal(&self, seat: Seat) -> Vec<DoudizhuMove> {
        let last = self.last.as_ref().map(|(_, combo)| combo);
        legal_plays(&self.hands[seat], last)
    }

    /// Play `mv` for `seat`, which must hold the turn.
    fn play(&mut self, seat: Seat, mv: &DoudizhuMove) {
        match mv {
            DoudizhuMove::Pass => {}
            DoudizhuMove::Play(combo) => {
                let hand = &mut self.hands[seat];
                for &rank in &combo.cards {
                    debug_assert!(hand[rank] > 0);
                    hand[rank] -= 1;
                }
                if self.hand_size(seat) == 0 {
                    self.winner = Some(seat);
                    return;
                }
                self.last = Some((seat, combo.clone()));
            }
        }
        self.turn = seat.next();
        if let Some((leader, _)) = &self.last {
            if *leader == self.turn {
                // Both others passed; the leader starts a fresh trick.
                self.last = None;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoudizhuMove {
    Pass,
    Play(Combo),
}

impl fmt::Display for DoudizhuMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Play(combo) => write!(f, "{}", combo),
        }
    }
}

/// Dou dizhu.
///
/// The 54-card deck is dealt 17 to each seat with 3 extra to the landlord,
/// the agent's fixed seat. Both peasants play uniformly random legal moves.
/// Supported combos: solo, pair, trio, trio with a solo or pair kicker, solo
/// chains (5+), pair chains (3+), trio chains (2+, no kickers), bombs, and
/// the rocket. Payoff is +1 when the landlord empties first, -1 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Doudizhu;

impl CardGame for Doudizhu {
    type State = DoudizhuState;
    type Move = DoudizhuMove;

    fn deal(&self, rng: &mut StdRng) -> DoudizhuState {
        let mut deck: Vec<Rank> = Vec::with_capacity(54);
        for &rank in &Rank::ALL[..13] {
            for _ in 0..4 {
                deck.push(rank);
            }
        }
        deck.push(Rank::BlackJoker);
        deck.push(Rank::RedJoker);
        deck.shuffle(rng);

        let mut hands: EnumMap<Seat, Counts> = EnumMap::default();
        for (position, &rank) in deck.iter().enumerate() {
            let seat = match position / 17 {
                0 => Seat::Landlord,
                1 => Seat::Down,
                2 => Seat::Up,
                // The last three cards are the landlord's extras.
                _ => Seat::Landlord,
            };
            hands[seat][rank] += 1;
        }
        DoudizhuState {
            hands,
            turn: Seat::Landlord,
            last: None,
            winner: None,
        }
    }

    fn legal_moves(&self, state: &DoudizhuState) -> Vec<DoudizhuMove> {
        if state.winner.is_some() {
            return Vec::new();
        }
        state.legal(Seat::Landlord)
    }

    fn parse_move(&self, state: &DoudizhuState, token: &str) -> Option<DoudizhuMove> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("pass") {
            return state.last.is_some().then_some(DoudizhuMove::Pass);
        }
        let mut cards = Vec::with_capacity(token.len());
        for c in token.chars() {
            if c.is_whitespace() {
                continue;
            }
            cards.push(Rank::from_char(c)?);
        }
        let combo = classify(&cards)?;

        // Must come from the hand and beat the table.
        let hand = &state.hands[Seat::Landlord];
        let mut needed: Counts = EnumMap::default();
        for &rank in &combo.cards {
            needed[rank] += 1;
        }
        if needed.iter().any(|(rank, &n)| n > hand[rank]) {
            return None;
        }
        match &state.last {
            Some((_, last)) if !combo.beats(last) => None,
            _ => Some(DoudizhuMove::Play(combo)),
        }
    }

    fn apply(&self, state: &mut DoudizhuState, mv: &DoudizhuMove, rng: &mut StdRng) {
        state.play(Seat::Landlord, mv);
        while state.winner.is_none() && state.turn != Seat::Landlord {
            let seat = state.turn;
            let reply = state
                .legal(seat)
                .choose(rng)
                .expect("a player may always pass or lead")
                .clone();
            state.play(seat, &reply);
        }
    }

    fn is_over(&self, state: &DoudizhuState) -> bool {
        state.winner.is_some()
    }

    fn payoff(&self, state: &DoudizhuState) -> f64 {
        match state.winner {
            Some(Seat::Landlord) => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn render(&self, state: &DoudizhuState) -> String {
        let hand: String = Rank::ALL
            .iter()
            .flat_map(|&rank| {
                std::iter::repeat(rank.to_char())
                    .take(usize::from(state.hands[Seat::Landlord][rank]))
            })
            .collect();
        let table = match &state.last {
            Some((seat, combo)) => format!("{} played {}", seat.label(), combo),
            None => "you lead this trick".to_owned(),
        };
        format!(
            "Dou dizhu. You are the landlord.\n\
             Your hand: {}\n\
             Cards left - down peasant: {}, up peasant: {}\n\
             Table: {}\n\
             Reply with <Action>cards</Action> (ten is T, jokers B and R) or <Action>pass</Action>.",
            hand,
            state.hand_size(Seat::Down),
            state.hand_size(Seat::Up),
            table,
        )
    }
}

/// Dou dizhu as a stateful [`Environment`](crate::models::Environment).
pub type DoudizhuEnv = MultiStep<RLCardsEnv<Doudizhu>>;

impl DoudizhuEnv {
    pub fn from_seed(seed: u64) -> Self {
        MultiStep::new(RLCardsEnv::new(Doudizhu, MAX_STEPS), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use rstest::rstest;

    fn ranks(spec: &str) -> Vec<Rank> {
        spec.chars().map(|c| Rank::from_char(c).unwrap()).collect()
    }

    fn counts(spec: &str) -> Counts {
        let mut counts: Counts = EnumMap::default();
        for rank in ranks(spec) {
            counts[rank] += 1;
        }
        counts
    }

    #[rstest]
    #[case("3", ComboKind::Solo)]
    #[case("33", ComboKind::Pair)]
    #[case("QQQ", ComboKind::Trio)]
    #[case("7777", ComboKind::Bomb)]
    #[case("BR", ComboKind::Rocket)]
    #[case("333A", ComboKind::TrioSolo)]
    #[case("33399", ComboKind::TrioPair)]
    #[case("34567", ComboKind::SoloChain(5))]
    #[case("3456789TJQKA", ComboKind::SoloChain(12))]
    #[case("334455", ComboKind::PairChain(3))]
    #[case("333444", ComboKind::TrioChain(2))]
    fn classify_accepts(#[case] spec: &str, #[case] kind: ComboKind) {
        assert_eq!(classify(&ranks(spec)).unwrap().kind, kind);
    }

    #[rstest]
    #[case("3456")] // chain too short
    #[case("34568")] // gap
    #[case("JQKA2")] // two cannot chain
    #[case("3344")] // pair chain too short
    #[case("33334")] // four with kicker unsupported
    #[case("3399")] // non-adjacent pairs
    #[case("3R")] // mixed singles
    fn classify_rejects(#[case] spec: &str) {
        assert_eq!(classify(&ranks(spec)), None);
    }

    #[test]
    fn beats_rules() {
        let solo_king = classify(&ranks("K")).unwrap();
        let solo_ace = classify(&ranks("A")).unwrap();
        let bomb = classify(&ranks("4444")).unwrap();
        let bigger_bomb = classify(&ranks("9999")).unwrap();
        let rocket = classify(&ranks("BR")).unwrap();
        let chain = classify(&ranks("34567")).unwrap();
        let longer_chain = classify(&ranks("345678")).unwrap();

        assert!(solo_ace.beats(&solo_king));
        assert!(!solo_king.beats(&solo_ace));
        assert!(bomb.beats(&solo_ace));
        assert!(bomb.beats(&chain));
        assert!(bigger_bomb.beats(&bomb));
        assert!(!bomb.beats(&bigger_bomb));
        assert!(rocket.beats(&bigger_bomb));
        assert!(!bigger_bomb.beats(&rocket));
        // Chains only compare at equal length.
        assert!(!longer_chain.beats(&chain));
    }

    #[test]
    fn following_a_solo() {
        let hand = counts("3559999BR");
        let last = classify(&ranks("8")).unwrap();
        let moves = legal_plays(&hand, Some(&last));

        assert!(moves.contains(&DoudizhuMove::Pass));
        // Higher solos, the bomb, and the rocket; nothing at or below an 8.
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("9")).unwrap())));
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("B")).unwrap())));
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("9999")).unwrap())));
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("BR")).unwrap())));
        assert!(!moves.contains(&DoudizhuMove::Play(classify(&ranks("5")).unwrap())));
    }

    #[test]
    fn leading_enumerates_chains() {
        let hand = counts("334455667");
        let moves = legal_plays(&hand, None);
        assert!(!moves.contains(&DoudizhuMove::Pass));
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("334455")).unwrap())));
        assert!(moves.contains(&DoudizhuMove::Play(classify(&ranks("34567")).unwrap())));
    }

    #[test]
    fn parse_rejects_unplayable_moves() {
        let mut state = Doudizhu.deal(&mut StdRng::seed_from_u64(0));
        // Leading: passing is not allowed.
        assert_eq!(Doudizhu.parse_move(&state, "pass"), None);

        // A combo the hand cannot cover.
        state.hands[Seat::Landlord] = counts("33445566778899");
        assert_eq!(Doudizhu.parse_move(&state, "222"), None);

        // A combo that does not beat the table.
        state.last = Some((Seat::Up, classify(&ranks("99")).unwrap()));
        assert_eq!(Doudizhu.parse_move(&state, "33"), None);
        assert!(Doudizhu.parse_move(&state, "pass").is_some());
    }

    #[test]
    fn leader_resets_after_two_passes() {
        let mut state = Doudizhu.deal(&mut StdRng::seed_from_u64(1));
        let combo = state.legal(Seat::Landlord).into_iter().find_map(|mv| match mv {
            DoudizhuMove::Play(combo) => Some(combo),
            DoudizhuMove::Pass => None,
        });
        state.play(Seat::Landlord, &DoudizhuMove::Play(combo.unwrap()));
        assert!(state.last.is_some());
        state.play(Seat::Down, &DoudizhuMove::Pass);
        assert!(state.last.is_some());
        state.play(Seat::Up, &DoudizhuMove::Pass);
        // Back to the landlord, who leads a fresh trick.
        assert_eq!(state.turn, Seat::Landlord);
        assert_eq!(state.last, None);
    }

    #[test]
    fn deal_sizes() {
        let state = Doudizhu.deal(&mut StdRng::seed_from_u64(2));
        assert_eq!(state.hand_size(Seat::Landlord), 20);
        assert_eq!(state.hand_size(Seat::Down), 17);
        assert_eq!(state.hand_size(Seat::Up), 17);
        assert_eq!(state.turn, Seat::Landlord);
    }

    #[test]
    fn episodes_satisfy_step_contract() {
        let mut env = DoudizhuEnv::from_seed(31);
        testing::run_episodes(&mut env, 20, 32);
    }
}

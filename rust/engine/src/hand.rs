use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Standard hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    fn from_index(i: u32) -> Category {
        match i {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            8 => Category::StraightFlush,
            _ => Category::RoyalFlush,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight of one category step. Tiebreak terms always stay below it.
pub const CATEGORY_WEIGHT: u32 = 1_000_000;

// Tiebreak ranks are at most 14, so base-15 digits never carry into each other.
const TIEBREAK_BASE: u32 = 15;
const TIEBREAK_DIGITS: usize = 5;

/// Totally ordered hand strength.
///
/// The category occupies the millions: `category * 1_000_000 + tiebreak`, where
/// the tiebreak packs up to five ranks (Ace = 14) most significant first. A
/// higher score always means a strictly better hand, equal scores mean equal
/// hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandScore(u32);

impl HandScore {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Category {
        Category::from_index(self.0 / CATEGORY_WEIGHT)
    }

    fn from_parts(category: Category, ranks: &[u8]) -> Self {
        let mut tiebreak = 0u32;
        for i in 0..TIEBREAK_DIGITS {
            let r = ranks.get(i).copied().unwrap_or(0) as u32;
            tiebreak = tiebreak * TIEBREAK_BASE + r;
        }
        HandScore(category as u32 * CATEGORY_WEIGHT + tiebreak)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category(), self.0)
    }
}

/// Evaluates the best hand made from a contestant's private cards and the board.
///
/// Works for any number of cards: with fewer than five, straight and flush
/// detection simply finds nothing, and an empty pool scores 0.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
///
/// let hole = parse_cards("Ah Kh").unwrap();
/// let board = parse_cards("Qh Jh Th 9c 8d").unwrap();
/// let score = evaluate(&hole, &board);
/// assert_eq!(score.category(), Category::RoyalFlush);
/// assert!(score.value() >= 9_000_000);
/// ```
pub fn evaluate(private: &[Card], community: &[Card]) -> HandScore {
    let mut pool = Vec::with_capacity(private.len() + community.len());
    pool.extend_from_slice(private);
    pool.extend_from_slice(community);
    evaluate_cards(&pool)
}

/// Evaluates a pooled set of cards. See [`evaluate`].
pub fn evaluate_cards(cards: &[Card]) -> HandScore {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for c in cards {
        let r = c.rank.high_value();
        rank_counts[r as usize] += 1;
        by_suit[suit_index(c.suit)].push(r);
    }

    let flush = by_suit.iter().find(|ranks| ranks.len() >= 5);

    if let Some(high) = flush.and_then(|ranks| straight_high(ranks)) {
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return HandScore::from_parts(category, &[high]);
    }

    let groups = Groups::from_counts(&rank_counts);

    if let Some(quad) = groups.quads {
        // any other rank can play as the kicker, paired or not
        let kicker = (2..=14u8)
            .rev()
            .find(|&r| r != quad && rank_counts[r as usize] > 0)
            .unwrap_or(0);
        return HandScore::from_parts(Category::FourOfAKind, &[quad, kicker]);
    }

    if let (Some(trips), Some(pair)) = (groups.trips, groups.high_pair) {
        return HandScore::from_parts(Category::FullHouse, &[trips, pair]);
    }

    if let Some(ranks) = flush {
        let mut top = ranks.clone();
        top.sort_unstable_by(|a, b| b.cmp(a));
        top.truncate(5);
        return HandScore::from_parts(Category::Flush, &top);
    }

    let distinct: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if let Some(high) = straight_high(&distinct) {
        return HandScore::from_parts(Category::Straight, &[high]);
    }

    let k = &groups.kickers;
    let kicker = |i: usize| k.get(i).copied().unwrap_or(0);

    if let Some(trips) = groups.trips {
        return HandScore::from_parts(Category::ThreeOfAKind, &[trips, kicker(0), kicker(1)]);
    }
    if let (Some(high), Some(low)) = (groups.high_pair, groups.low_pair) {
        return HandScore::from_parts(Category::TwoPair, &[high, low, kicker(0)]);
    }
    if let Some(pair) = groups.high_pair {
        return HandScore::from_parts(
            Category::OnePair,
            &[pair, kicker(0), kicker(1), kicker(2)],
        );
    }

    let top: Vec<u8> = k.iter().copied().take(5).collect();
    HandScore::from_parts(Category::HighCard, &top)
}

/// Rank groups filled by priority: one quad slot, one trips slot, two pair slots.
#[derive(Debug, Default)]
struct Groups {
    quads: Option<u8>,
    trips: Option<u8>,
    high_pair: Option<u8>,
    low_pair: Option<u8>,
    /// Ranks that filled no slot, highest first.
    kickers: Vec<u8>,
}

impl Groups {
    fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut counted: Vec<(u8, u8)> = (2..=14u8)
            .filter(|&r| rank_counts[r as usize] > 0)
            .map(|r| (r, rank_counts[r as usize]))
            .collect();
        counted.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let mut g = Groups::default();
        for (rank, count) in counted {
            if count >= 4 && g.quads.is_none() {
                g.quads = Some(rank);
            } else if count >= 3 && g.trips.is_none() {
                g.trips = Some(rank);
            } else if count >= 2 && g.high_pair.is_none() {
                g.high_pair = Some(rank);
            } else if count >= 2 && g.low_pair.is_none() {
                g.low_pair = Some(rank);
            } else {
                g.kickers.push(rank);
            }
        }
        g.kickers.sort_unstable_by(|a, b| b.cmp(a));
        g
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

/// Top card of the highest five-long run among `ranks` (Ace given as 14 and
/// also counted as 1). Order and duplicates in the input do not matter.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut mask: u16 = 0;
    for &r in ranks {
        mask |= 1 << r;
    }
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }

    let mut run = 0;
    let mut best = None;
    for v in 1..=14u8 {
        if mask & (1 << v) != 0 {
            run += 1;
            if run >= 5 {
                best = Some(v);
            }
        } else {
            run = 0;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_high_handles_wheel_and_broadway() {
        assert_eq!(straight_high(&[14, 2, 3, 4, 5]), Some(5));
        assert_eq!(straight_high(&[10, 11, 12, 13, 14]), Some(14));
        assert_eq!(straight_high(&[2, 3, 4, 5, 6, 7, 8]), Some(8));
        assert_eq!(straight_high(&[14, 2, 3, 4, 6]), None);
        assert_eq!(straight_high(&[]), None);
    }

    #[test]
    fn no_wrap_around_straight() {
        // Q K A 2 3 is not a straight
        assert_eq!(straight_high(&[12, 13, 14, 2, 3]), None);
    }

    #[test]
    fn tiebreak_never_reaches_next_category() {
        let max = HandScore::from_parts(Category::HighCard, &[14, 14, 14, 14, 14]);
        assert!(max.value() < CATEGORY_WEIGHT);
        assert_eq!(max.category(), Category::HighCard);
    }

    #[test]
    fn groups_fill_slots_by_count_then_rank() {
        let mut counts = [0u8; 15];
        counts[7] = 3;
        counts[5] = 3;
        counts[2] = 1;
        let g = Groups::from_counts(&counts);
        assert_eq!(g.trips, Some(7));
        assert_eq!(g.high_pair, Some(5));
        assert_eq!(g.kickers, vec![2]);
    }
}

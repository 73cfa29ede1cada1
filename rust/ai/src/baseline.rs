//! Baseline AI for heads-up and short-handed play.
//!
//! Rule-based strategy driven by a 0-10 hand strength:
//! - Pre-flop strength comes from a starting-hand table (pairs, broadway
//!   combinations, suited connectors).
//! - Post-flop strength comes from the evaluated hand category.
//! - Facing a bet, pot odds `to_call / (pot + to_call)` decide marginal calls.
//!
//! Mixed strategies (slow plays, occasional bluffs) draw from a seeded
//! [`ChaCha20Rng`], so a simulation with the same seed replays identically.

use holdem_engine::cards::Card;
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::player::{ActionRequest, Player, PlayerAction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

/// Rule-based opponent.
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::player::{ActionRequest, Player, PlayerAction};
///
/// let mut ai = BaselineAI::new(7);
/// let hand = parse_cards("7h 2s").unwrap();
/// let request = ActionRequest {
///     hand: &hand,
///     community: &[],
///     to_call: 10,
///     pot: 15,
///     stack: 995,
///     min_raise: 20,
/// };
/// assert_eq!(ai.get_action(&request), PlayerAction::Fold);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    rng: ChaCha20Rng,
}

impl BaselineAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Starting-hand strength on a 0-10 scale.
    ///
    /// - 9-10: AA-JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, KQ, suited broadway
    /// - 3-4: small pairs, weak aces, suited connectors
    /// - 0-2: everything else
    fn preflop_strength(hole: &[Card]) -> u8 {
        let [c1, c2] = match hole {
            [a, b] => [*a, *b],
            [a] => return if a.rank.high_value() >= 12 { 3 } else { 1 },
            _ => return 0,
        };
        let r1 = c1.rank.high_value();
        let r2 = c2.rank.high_value();
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Made-hand strength on a 0-10 scale from the evaluated category.
    fn postflop_strength(hole: &[Card], board: &[Card]) -> u8 {
        let score = evaluate(hole, board);
        match score.category() {
            Category::RoyalFlush => 10,
            Category::StraightFlush => 9,
            Category::FourOfAKind => 8,
            Category::FullHouse => 7,
            Category::Flush => 6,
            Category::Straight => 5,
            Category::ThreeOfAKind => 4,
            Category::TwoPair => 3,
            Category::OnePair => 2,
            Category::HighCard if score.value() > 0 => 1,
            Category::HighCard => 0,
        }
    }

    /// Share of the final pot this call would pay for; lower is cheaper.
    fn pot_odds(pot: u32, to_call: u32) -> f64 {
        if to_call == 0 {
            return 0.0;
        }
        to_call as f64 / (pot as f64 + to_call as f64)
    }

    fn raise_size(req: &ActionRequest<'_>) -> u32 {
        let behind = req.stack.saturating_sub(req.to_call);
        (req.pot / 2).max(req.min_raise).min(behind)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    fn decide(&mut self, req: &ActionRequest<'_>, strength: u8) -> PlayerAction {
        let free = req.to_call == 0;
        let odds = Self::pot_odds(req.pot, req.to_call);
        let raise = PlayerAction::Raise(Self::raise_size(req));
        let check_or_fold = if free {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        };

        if req.to_call > req.stack {
            return if strength >= 5 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        if req.community.is_empty() {
            return match strength {
                9.. => {
                    if self.chance(0.7) {
                        raise
                    } else {
                        PlayerAction::AllIn
                    }
                }
                7..=8 if free => {
                    if self.chance(0.8) {
                        raise
                    } else {
                        PlayerAction::Check
                    }
                }
                7..=8 => {
                    if self.chance(0.6) {
                        raise
                    } else {
                        PlayerAction::Call
                    }
                }
                4..=6 if free => {
                    if self.chance(0.2) {
                        raise
                    } else {
                        PlayerAction::Check
                    }
                }
                4..=6 if odds < 0.25 => PlayerAction::Call,
                _ => check_or_fold,
            };
        }

        match strength {
            8.. => {
                if free && self.chance(0.2) {
                    PlayerAction::Check
                } else if self.chance(0.4) {
                    raise
                } else {
                    PlayerAction::AllIn
                }
            }
            6..=7 => {
                let aggressive = if free { 0.8 } else { 0.4 };
                match (self.chance(aggressive), free) {
                    (true, _) => raise,
                    (false, true) => PlayerAction::Check,
                    (false, false) => PlayerAction::Call,
                }
            }
            4..=5 if free => {
                if self.chance(0.4) {
                    raise
                } else {
                    PlayerAction::Check
                }
            }
            4..=5 if odds < 0.3 || self.chance(0.3) => PlayerAction::Call,
            4..=5 => PlayerAction::Fold,
            _ => {
                // occasional bluff
                if self.chance(0.05) {
                    raise
                } else {
                    check_or_fold
                }
            }
        }
    }
}

impl Player for BaselineAI {
    fn get_action(&mut self, request: &ActionRequest<'_>) -> PlayerAction {
        let strength = if request.community.is_empty() {
            Self::preflop_strength(request.hand)
        } else {
            Self::postflop_strength(request.hand, request.community)
        };
        let action = self.decide(request, strength);
        trace!(strength, to_call = request.to_call, ?action, "baseline decision");
        action
    }
}

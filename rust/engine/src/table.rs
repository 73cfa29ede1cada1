//! Round state machine: seating, dealer and blind rotation, card reveal
//! staging, pot accounting and showdown.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, HandScore};
use crate::history::Street;
use crate::player::{Contestant, PlayerAction};

const PRIVATE_CARDS: usize = 2;
const BOARD_CARDS: usize = 5;

/// Lifecycle of one round. Transitions only move forward; a fresh round
/// starts again from `WaitingForPlayers`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    WaitingForPlayers,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    GameOver,
}

impl RoundState {
    /// The reveal transition out of this state: the next state and how many
    /// community cards it reveals. `None` where revealing is not possible.
    pub fn reveal_step(self) -> Option<(RoundState, usize)> {
        match self {
            RoundState::PreFlop => Some((RoundState::Flop, 3)),
            RoundState::Flop => Some((RoundState::Turn, 1)),
            RoundState::Turn => Some((RoundState::River, 1)),
            RoundState::River => Some((RoundState::Showdown, 0)),
            _ => None,
        }
    }

    /// Betting street played in this state, if any.
    pub fn street(self) -> Option<Street> {
        match self {
            RoundState::PreFlop => Some(Street::PreFlop),
            RoundState::Flop => Some(Street::Flop),
            RoundState::Turn => Some(Street::Turn),
            RoundState::River => Some(Street::River),
            _ => None,
        }
    }

    /// Cards are out and the pot is live.
    pub fn in_round(self) -> bool {
        !matches!(self, RoundState::WaitingForPlayers | RoundState::GameOver)
    }
}

/// Outcome of [`Table::evaluate_winner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Seat credited with the pot
    pub winner: Option<usize>,
    pub pot: u32,
    /// Every evaluated hand, in seating order
    pub hands: Vec<(usize, HandScore)>,
    /// Another seat matched the winning score; the pot still went to `winner`
    pub tied: bool,
}

/// Owns the contestants, deck, community cards and pot for a sequence of rounds.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    contestants: Vec<Contestant>,
    community: Vec<Card>,
    pot: u32,
    state: RoundState,
    dealer: Option<usize>,
    small_blind: usize,
    big_blind: usize,
    acting: usize,
}

impl Table {
    pub fn new(config: TableConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            deck: Deck::new_with_seed(seed),
            contestants: Vec::new(),
            community: Vec::with_capacity(BOARD_CARDS),
            pot: 0,
            state: RoundState::WaitingForPlayers,
            dealer: None,
            small_blind: 0,
            big_blind: 0,
            acting: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }
    pub fn contestant(&self, seat: usize) -> Option<&Contestant> {
        self.contestants.get(seat)
    }
    pub fn dealer_seat(&self) -> Option<usize> {
        self.dealer
    }
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind
    }
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind
    }
    /// Seat the next betting street starts from.
    pub fn acting_seat(&self) -> usize {
        self.acting
    }

    /// Seats still holding cards, in seating order.
    pub fn active_seats(&self) -> Vec<usize> {
        self.contestants
            .iter()
            .enumerate()
            .filter(|(_, c)| c.in_hand())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn ensure_seating_open(&self, action: &'static str) -> Result<(), GameError> {
        match self.state {
            RoundState::WaitingForPlayers | RoundState::GameOver => Ok(()),
            state => Err(GameError::InvalidTransition { action, state }),
        }
    }

    pub fn add_contestant(&mut self, contestant: Contestant) -> Result<(), GameError> {
        self.ensure_seating_open("add a contestant")?;
        if self
            .contestants
            .iter()
            .any(|c| c.name() == contestant.name())
        {
            return Err(GameError::DuplicateContestant(contestant.name().to_string()));
        }
        self.contestants.push(contestant);
        Ok(())
    }

    /// Unseats a contestant, returning it with its final stack.
    pub fn remove_contestant(&mut self, name: &str) -> Result<Contestant, GameError> {
        self.ensure_seating_open("remove a contestant")?;
        let idx = self
            .contestants
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| GameError::UnknownContestant(name.to_string()))?;
        let mut removed = self.contestants.remove(idx);
        for card in removed.take_cards() {
            self.deck.discard(card);
        }

        // keep the button on the same physical seat
        let len = self.contestants.len();
        self.dealer = match self.dealer {
            _ if len == 0 => None,
            Some(d) if idx < d => Some(d - 1),
            Some(d) if idx == d => Some((d + len - 1) % len),
            other => other,
        };
        Ok(removed)
    }

    /// Starts a round: rotates the button, deals private cards, posts blinds
    /// and enters `PreFlop`. Nothing changes when this fails.
    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        if self.state != RoundState::WaitingForPlayers {
            return Err(GameError::InvalidTransition {
                action: "start a new round",
                state: self.state,
            });
        }
        let n = self.contestants.len();
        if n < 2 {
            return Err(GameError::NotEnoughPlayers { found: n });
        }
        if let Some(c) = self.contestants.iter().find(|c| c.stack() == 0) {
            return Err(GameError::BustedContestant(c.name().to_string()));
        }
        if n * PRIVATE_CARDS + BOARD_CARDS > self.deck.remaining() + self.deck.discard_pile().len()
        {
            return Err(GameError::DeckExhausted);
        }

        self.collect_cards();
        self.deck.reset_and_shuffle();
        self.pot = 0;
        for c in &mut self.contestants {
            c.clear_street_bet();
        }

        let dealer = match self.dealer {
            None => 0,
            Some(d) => (d + 1) % n,
        };
        self.dealer = Some(dealer);
        self.small_blind = (dealer + 1) % n;
        self.big_blind = (dealer + 2) % n;

        for seat in 0..n {
            let hand = self.deck.draw_hand(PRIVATE_CARDS);
            if hand.len() < PRIVATE_CARDS {
                return Err(GameError::DeckExhausted);
            }
            self.contestants[seat].give_cards(hand);
        }

        let (sb, bb) = (self.config.small_blind, self.config.big_blind);
        let posted_sb = self.commit_chips(self.small_blind, sb);
        let posted_bb = self.commit_chips(self.big_blind, bb);

        self.acting = (self.big_blind + 1) % n;
        self.state = RoundState::PreFlop;
        info!(
            dealer,
            small_blind = posted_sb,
            big_blind = posted_bb,
            contestants = n,
            "round started"
        );
        Ok(())
    }

    /// Advances one reveal step and returns the cards it revealed.
    ///
    /// `PreFlop` reveals the flop, `Flop` the turn, `Turn` the river, and
    /// `River` moves to `Showdown` without revealing. Any other state is left
    /// alone and nothing is revealed.
    pub fn deal_community_cards(&mut self) -> Result<Vec<Card>, GameError> {
        let Some((next, count)) = self.state.reveal_step() else {
            return Ok(Vec::new());
        };
        if self.deck.remaining() < count {
            return Err(GameError::DeckExhausted);
        }
        let revealed = self.deck.draw_hand(count);
        self.community.extend_from_slice(&revealed);

        for c in &mut self.contestants {
            c.clear_street_bet();
        }
        self.acting = 0;
        self.state = next;
        info!(state = ?next, board = self.community.len(), "community cards dealt");
        Ok(revealed)
    }

    /// Showdown: the strictly highest score takes the whole pot. On equal top
    /// scores the first seat in seating order wins and `tied` is set.
    pub fn evaluate_winner(&mut self) -> Result<ShowdownResult, GameError> {
        if self.state != RoundState::Showdown {
            return Err(GameError::InvalidTransition {
                action: "evaluate the winner",
                state: self.state,
            });
        }

        let hands: Vec<(usize, HandScore)> = self
            .contestants
            .iter()
            .enumerate()
            .filter(|(_, c)| c.in_hand())
            .map(|(seat, c)| (seat, evaluate(c.hand(), &self.community)))
            .collect();

        let mut best: Option<(usize, HandScore)> = None;
        for &(seat, score) in &hands {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((seat, score));
            }
        }
        let tied = best.is_some_and(|(seat, top)| {
            hands.iter().any(|&(other, score)| other != seat && score == top)
        });

        let pot = self.pot;
        let winner = best.map(|(seat, _)| seat);
        if let Some((seat, score)) = best {
            self.contestants[seat].add_chips(pot);
            self.pot = 0;
            info!(seat, hand = %score, pot, tied, "showdown won");
        }
        self.state = RoundState::GameOver;

        Ok(ShowdownResult {
            winner,
            pot,
            hands,
            tied,
        })
    }

    /// Awards the pot to the only contestant left holding cards.
    pub fn award_uncontested(&mut self) -> Result<usize, GameError> {
        let active = self.active_seats();
        if !self.state.in_round() || active.len() != 1 {
            return Err(GameError::InvalidTransition {
                action: "award an uncontested pot",
                state: self.state,
            });
        }
        let seat = active[0];
        let pot = self.pot;
        self.contestants[seat].add_chips(pot);
        self.pot = 0;
        self.state = RoundState::GameOver;
        info!(seat, pot, "pot awarded uncontested");
        Ok(seat)
    }

    /// Closes a finished round so the next one can start.
    pub fn finish_round(&mut self) -> Result<(), GameError> {
        if self.state != RoundState::GameOver {
            return Err(GameError::InvalidTransition {
                action: "finish the round",
                state: self.state,
            });
        }
        self.collect_cards();
        self.state = RoundState::WaitingForPlayers;
        Ok(())
    }

    /// Returns private and community cards to the deck's discard pile.
    fn collect_cards(&mut self) {
        for c in &mut self.contestants {
            for card in c.take_cards() {
                self.deck.discard(card);
            }
        }
        for card in self.community.drain(..) {
            self.deck.discard(card);
        }
    }

    /// Moves up to `amount` chips from a stack into the pot and the seat's
    /// street contribution. Returns what was actually paid.
    pub(crate) fn commit_chips(&mut self, seat: usize, amount: u32) -> u32 {
        let c = &mut self.contestants[seat];
        let paid = amount.min(c.stack());
        if paid == 0 {
            return 0;
        }
        if c.remove_chips(paid).is_err() {
            return 0;
        }
        c.add_street_bet(paid);
        self.pot += paid;
        paid
    }

    pub(crate) fn fold_contestant(&mut self, seat: usize) {
        for card in self.contestants[seat].take_cards() {
            self.deck.discard(card);
        }
        debug!(seat, "cards mucked");
    }

    pub(crate) fn request_action(&mut self, seat: usize, to_call: u32) -> PlayerAction {
        let (pot, min_raise) = (self.pot, self.config.min_raise);
        self.contestants[seat].decide(&self.community, to_call, pot, min_raise)
    }
}

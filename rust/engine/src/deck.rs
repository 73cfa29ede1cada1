use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Deck manager: the drawable cards plus a discard pile.
///
/// Cards are drawn from the end of the drawable sequence. Every card handed
/// out is expected to come back through [`Deck::discard`] before the next
/// [`Deck::reset_and_shuffle`], so the 52 cards are never duplicated.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    discard: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            discard: Vec::new(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws up to `n` cards, stopping early if the deck runs out.
    pub fn draw_hand(&mut self, n: usize) -> Vec<Card> {
        let mut hand = Vec::with_capacity(n);
        for _ in 0..n {
            match self.draw_card() {
                Some(c) => hand.push(c),
                None => break,
            }
        }
        hand
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the discard pile to the deck and reshuffles.
    pub fn reset_and_shuffle(&mut self) {
        self.cards.append(&mut self.discard);
        self.shuffle();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

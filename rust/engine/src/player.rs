use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Represents a player action during a betting street.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Check (only valid if nothing is owed; otherwise played as a fold)
    Check,
    /// Call the current bet, capped at the remaining stack
    Call,
    /// Call and raise by the given increment. Increments below the table's
    /// minimum raise are lifted to the minimum.
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// What a player is shown when asked to act.
///
/// This is a read-only snapshot; players never touch the pot or stacks directly.
#[derive(Debug, Clone, Copy)]
pub struct ActionRequest<'a> {
    pub hand: &'a [Card],
    pub community: &'a [Card],
    pub to_call: u32,
    pub pot: u32,
    pub stack: u32,
    pub min_raise: u32,
}

/// Decision source for one seat: an AI, a console prompt, a test script.
pub trait Player {
    fn get_action(&mut self, request: &ActionRequest<'_>) -> PlayerAction;
}

/// Boxed closures make quick scripted players.
impl<F> Player for F
where
    F: FnMut(&ActionRequest<'_>) -> PlayerAction,
{
    fn get_action(&mut self, request: &ActionRequest<'_>) -> PlayerAction {
        self(request)
    }
}

/// A seated contestant: name, chip stack, private cards and this street's
/// contribution, plus the [`Player`] that decides for it.
pub struct Contestant {
    name: String,
    stack: u32,
    hand: Vec<Card>,
    street_bet: u32,
    player: Box<dyn Player>,
}

impl Contestant {
    pub fn new(name: impl Into<String>, stack: u32, player: Box<dyn Player>) -> Self {
        Self {
            name: name.into(),
            stack,
            hand: Vec::with_capacity(2),
            street_bet: 0,
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }

    /// Still holding cards this round.
    pub fn in_hand(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Removes chips from the stack; the stack is untouched on error.
    pub fn remove_chips(&mut self, amount: u32) -> Result<(), GameError> {
        if amount == 0 {
            return Err(GameError::InvalidChipAmount(amount));
        }
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        Ok(())
    }

    pub(crate) fn give_cards(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }

    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    pub(crate) fn add_street_bet(&mut self, amount: u32) {
        self.street_bet += amount;
    }

    pub(crate) fn clear_street_bet(&mut self) {
        self.street_bet = 0;
    }

    pub(crate) fn decide(
        &mut self,
        community: &[Card],
        to_call: u32,
        pot: u32,
        min_raise: u32,
    ) -> PlayerAction {
        let request = ActionRequest {
            hand: &self.hand,
            community,
            to_call,
            pot,
            stack: self.stack,
            min_raise,
        };
        self.player.get_action(&request)
    }
}

impl fmt::Debug for Contestant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contestant")
            .field("name", &self.name)
            .field("stack", &self.stack)
            .field("hand", &self.hand)
            .field("street_bet", &self.street_bet)
            .finish_non_exhaustive()
    }
}

use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.draw_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.draw_hand(10);
    let b: Vec<Card> = d2.draw_hand(10);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw_hand(10),
        d2.draw_hand(10),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn draw_hand_stops_when_deck_runs_out() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let first = deck.draw_hand(50);
    assert_eq!(first.len(), 50);
    let rest = deck.draw_hand(5);
    assert_eq!(rest.len(), 2);
    assert_eq!(deck.remaining(), 0);
    assert!(deck.draw_hand(3).is_empty());
}

#[test]
fn discarded_cards_return_on_reset() {
    let mut deck = Deck::new_with_seed(99);
    deck.shuffle();
    let hand = deck.draw_hand(5);
    assert_eq!(deck.remaining(), 47);

    for card in hand.iter().copied() {
        deck.discard(card);
    }
    assert_eq!(deck.discard_pile(), hand.as_slice());

    deck.reset_and_shuffle();
    assert_eq!(deck.remaining(), 52);
    assert!(deck.discard_pile().is_empty());

    let all: HashSet<Card> = deck.draw_hand(52).into_iter().collect();
    assert_eq!(all.len(), 52);
}

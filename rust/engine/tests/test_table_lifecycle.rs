use holdem_engine::betting::run_street;
use holdem_engine::config::TableConfig;
use holdem_engine::errors::GameError;
use holdem_engine::player::{ActionRequest, Contestant, PlayerAction};
use holdem_engine::table::{RoundState, Table};

fn calling(_: &ActionRequest<'_>) -> PlayerAction {
    PlayerAction::Call
}

fn table_with(stacks: &[u32]) -> Table {
    let mut t = Table::new(TableConfig::default(), 42).expect("valid config");
    for (i, &stack) in stacks.iter().enumerate() {
        t.add_contestant(Contestant::new(format!("p{i}"), stack, Box::new(calling)))
            .expect("seat");
    }
    t
}

fn total_chips(t: &Table) -> u32 {
    t.contestants().iter().map(|c| c.stack()).sum::<u32>() + t.pot()
}

#[test]
fn start_requires_two_contestants() {
    let mut t = table_with(&[1_000]);
    assert_eq!(
        t.start_new_round(),
        Err(GameError::NotEnoughPlayers { found: 1 })
    );
    assert_eq!(t.state(), RoundState::WaitingForPlayers);
    assert_eq!(t.pot(), 0);
    assert!(t.contestants()[0].hand().is_empty());
    assert_eq!(t.dealer_seat(), None);
}

#[test]
fn start_rejects_busted_contestant() {
    let mut t = table_with(&[1_000, 0]);
    assert_eq!(
        t.start_new_round(),
        Err(GameError::BustedContestant("p1".into()))
    );
    assert_eq!(t.state(), RoundState::WaitingForPlayers);
}

#[test]
fn start_only_from_waiting() {
    let mut t = table_with(&[1_000, 1_000]);
    t.start_new_round().unwrap();
    assert!(matches!(
        t.start_new_round(),
        Err(GameError::InvalidTransition {
            state: RoundState::PreFlop,
            ..
        })
    ));
}

#[test]
fn start_deals_private_cards_and_posts_blinds() {
    let mut t = table_with(&[1_000, 1_000, 1_000]);
    t.start_new_round().unwrap();

    assert_eq!(t.state(), RoundState::PreFlop);
    assert_eq!(t.dealer_seat(), Some(0));
    assert_eq!(t.small_blind_seat(), 1);
    assert_eq!(t.big_blind_seat(), 2);
    assert_eq!(t.acting_seat(), 0);
    assert!(t.community_cards().is_empty());
    for c in t.contestants() {
        assert_eq!(c.hand().len(), 2);
    }
    assert_eq!(t.deck_remaining(), 52 - 6);

    assert_eq!(t.contestants()[1].stack(), 995);
    assert_eq!(t.contestants()[2].stack(), 990);
    assert_eq!(t.contestants()[1].street_bet(), 5);
    assert_eq!(t.contestants()[2].street_bet(), 10);
    assert_eq!(t.pot(), 15);
}

#[test]
fn short_stack_posts_what_it_has() {
    let mut t = table_with(&[1_000, 1_000, 4]);
    t.start_new_round().unwrap();
    assert_eq!(t.contestants()[2].stack(), 0);
    assert_eq!(t.contestants()[2].street_bet(), 4);
    assert_eq!(t.pot(), 9);
}

#[test]
fn reveals_follow_the_state_sequence() {
    let mut t = table_with(&[1_000, 1_000]);
    assert!(t.deal_community_cards().unwrap().is_empty());
    assert_eq!(t.state(), RoundState::WaitingForPlayers);

    t.start_new_round().unwrap();
    let expected = [
        (RoundState::Flop, 3, 3),
        (RoundState::Turn, 1, 4),
        (RoundState::River, 1, 5),
        (RoundState::Showdown, 0, 5),
    ];
    for (state, revealed, board) in expected {
        let cards = t.deal_community_cards().unwrap();
        assert_eq!(t.state(), state);
        assert_eq!(cards.len(), revealed);
        assert_eq!(t.community_cards().len(), board);
        assert_eq!(t.acting_seat(), 0);
    }

    // no-op once at showdown
    assert!(t.deal_community_cards().unwrap().is_empty());
    assert_eq!(t.state(), RoundState::Showdown);
    assert_eq!(t.community_cards().len(), 5);
}

#[test]
fn evaluate_winner_only_at_showdown() {
    let mut t = table_with(&[1_000, 1_000]);
    assert!(matches!(
        t.evaluate_winner(),
        Err(GameError::InvalidTransition { .. })
    ));
    t.start_new_round().unwrap();
    assert!(t.evaluate_winner().is_err());
    assert_eq!(t.state(), RoundState::PreFlop);
}

#[test]
fn showdown_awards_whole_pot_and_conserves_chips() {
    let mut t = table_with(&[1_000, 1_000, 1_000]);
    let before = total_chips(&t);
    t.start_new_round().unwrap();
    while t.state() != RoundState::Showdown {
        run_street(&mut t).unwrap();
        assert_eq!(total_chips(&t), before);
        t.deal_community_cards().unwrap();
    }

    let result = t.evaluate_winner().unwrap();
    assert_eq!(result.pot, 30);
    assert_eq!(result.hands.len(), 3);
    let winner = result.winner.expect("a winner");
    let best = result.hands.iter().map(|(_, s)| *s).max().unwrap();
    let (first_best, _) = result.hands.iter().find(|(_, s)| *s == best).unwrap();
    assert_eq!(winner, *first_best);

    assert_eq!(t.pot(), 0);
    assert_eq!(t.state(), RoundState::GameOver);
    assert_eq!(total_chips(&t), before);
    assert_eq!(t.contestants()[winner].stack(), 990 + 30);
}

#[test]
fn tied_showdown_pays_first_seat_and_flags_tie() {
    let mut ties = 0;
    for seed in 0..400u64 {
        let mut t = Table::new(TableConfig::default(), seed).unwrap();
        for i in 0..3 {
            t.add_contestant(Contestant::new(format!("p{i}"), 1_000, Box::new(calling)))
                .unwrap();
        }
        t.start_new_round().unwrap();
        while t.state() != RoundState::Showdown {
            run_street(&mut t).unwrap();
            t.deal_community_cards().unwrap();
        }

        let result = t.evaluate_winner().unwrap();
        let best = result.hands.iter().map(|(_, s)| *s).max().unwrap();
        let top: Vec<usize> = result
            .hands
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(seat, _)| *seat)
            .collect();

        assert_eq!(result.tied, top.len() > 1, "seed {seed}");
        assert_eq!(result.winner, Some(top[0]), "seed {seed}");
        if result.tied {
            ties += 1;
            assert_eq!(t.contestants()[top[0]].stack(), 990 + result.pot);
            for &other in &top[1..] {
                assert_eq!(t.contestants()[other].stack(), 990);
            }
        }
    }
    assert!(ties > 0, "no tied showdown in the seed range");
}

#[test]
fn finish_round_allows_next_round_with_rotated_button() {
    let mut t = table_with(&[1_000, 1_000, 1_000]);
    t.start_new_round().unwrap();
    assert!(t.finish_round().is_err());
    while t.state() != RoundState::Showdown {
        run_street(&mut t).unwrap();
        t.deal_community_cards().unwrap();
    }
    t.evaluate_winner().unwrap();

    // GameOver does not restart directly
    assert!(t.start_new_round().is_err());
    t.finish_round().unwrap();
    assert_eq!(t.state(), RoundState::WaitingForPlayers);
    assert!(t.community_cards().is_empty());
    assert!(t.contestants().iter().all(|c| c.hand().is_empty()));

    t.start_new_round().unwrap();
    assert_eq!(t.dealer_seat(), Some(1));
    assert_eq!(t.small_blind_seat(), 2);
    assert_eq!(t.big_blind_seat(), 0);
    assert_eq!(t.acting_seat(), 1);
    assert_eq!(t.deck_remaining(), 52 - 6);
}

#[test]
fn award_uncontested_after_everyone_folds() {
    let mut t = Table::new(TableConfig::default(), 3).unwrap();
    t.add_contestant(Contestant::new("caller", 1_000, Box::new(calling)))
        .unwrap();
    t.add_contestant(Contestant::new(
        "folder",
        1_000,
        Box::new(|_: &ActionRequest<'_>| PlayerAction::Fold),
    ))
    .unwrap();
    t.start_new_round().unwrap();
    // heads-up: seat 0 is dealer and big blind, seat 1 acts first
    let summary = run_street(&mut t).unwrap();
    assert_eq!(summary.uncontested(), Some(0));

    assert_eq!(t.award_uncontested().unwrap(), 0);
    assert_eq!(t.state(), RoundState::GameOver);
    assert_eq!(t.contestants()[0].stack(), 1_005);
    assert_eq!(t.contestants()[1].stack(), 995);
    assert_eq!(t.pot(), 0);
}

#[test]
fn award_uncontested_requires_single_contestant() {
    let mut t = table_with(&[1_000, 1_000]);
    t.start_new_round().unwrap();
    assert!(t.award_uncontested().is_err());
    assert_eq!(t.pot(), 15);
}

#[test]
fn seating_changes_only_between_rounds() {
    let mut t = table_with(&[1_000, 1_000]);
    assert_eq!(
        t.add_contestant(Contestant::new("p0", 10, Box::new(calling))),
        Err(GameError::DuplicateContestant("p0".into()))
    );
    t.start_new_round().unwrap();
    assert!(matches!(
        t.add_contestant(Contestant::new("late", 10, Box::new(calling))),
        Err(GameError::InvalidTransition { .. })
    ));
    assert!(t.remove_contestant("p0").is_err());
    assert_eq!(t.contestants().len(), 2);
}

#[test]
fn remove_contestant_returns_stack() {
    let mut t = table_with(&[700, 1_000, 1_000]);
    let removed = t.remove_contestant("p0").unwrap();
    assert_eq!(removed.stack(), 700);
    assert_eq!(t.contestants().len(), 2);
    assert_eq!(
        t.remove_contestant("ghost").unwrap_err(),
        GameError::UnknownContestant("ghost".into())
    );
}

#[test]
fn remove_chips_rejects_overdraw_without_change() {
    let mut c = Contestant::new("short", 5, Box::new(calling));
    assert_eq!(
        c.remove_chips(10),
        Err(GameError::InsufficientChips {
            requested: 10,
            available: 5
        })
    );
    assert_eq!(c.stack(), 5);
    assert_eq!(c.remove_chips(0), Err(GameError::InvalidChipAmount(0)));
    c.remove_chips(5).unwrap();
    assert_eq!(c.stack(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = TableConfig {
        small_blind: 20,
        big_blind: 10,
        min_raise: 20,
    };
    assert!(matches!(
        Table::new(cfg, 1),
        Err(GameError::InvalidConfig(_))
    ));
}

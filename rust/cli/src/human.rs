//! Terminal-driven [`Player`].

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use holdem_engine::player::{ActionRequest, Player, PlayerAction};
use tracing::debug;

use crate::formatters::{format_board, format_cards};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// Asks for actions on a line-based input until one parses.
///
/// Typing `q`, reaching end of input or failing to write the prompt folds the
/// current hand and raises the shared quit flag; every later request folds
/// without prompting.
pub struct ConsolePlayer {
    input: Box<dyn BufRead>,
    prompt: Box<dyn Write>,
    quit: Rc<Cell<bool>>,
}

impl ConsolePlayer {
    /// Returns the player and the quit flag the session loop should watch.
    pub fn new(input: Box<dyn BufRead>, prompt: Box<dyn Write>) -> (Self, Rc<Cell<bool>>) {
        let quit = Rc::new(Cell::new(false));
        let player = Self {
            input,
            prompt,
            quit: Rc::clone(&quit),
        };
        (player, quit)
    }

    fn show(&mut self, req: &ActionRequest<'_>) -> std::io::Result<()> {
        writeln!(
            self.prompt,
            "Your hand: {}  Board: {}  Pot: {}  Stack: {}  To call: {}",
            format_cards(req.hand),
            format_board(req.community),
            req.pot,
            req.stack,
            req.to_call
        )?;
        let options = if req.to_call == 0 {
            format!("check/raise <n>/allin/fold/q (min raise {})", req.min_raise)
        } else {
            format!("call/raise <n>/allin/fold/q (min raise {})", req.min_raise)
        };
        write!(self.prompt, "Enter action ({}): ", options)?;
        self.prompt.flush()
    }

    fn give_up(&mut self) -> PlayerAction {
        self.quit.set(true);
        PlayerAction::Fold
    }
}

impl Player for ConsolePlayer {
    fn get_action(&mut self, request: &ActionRequest<'_>) -> PlayerAction {
        if self.quit.get() {
            return PlayerAction::Fold;
        }
        loop {
            if self.show(request).is_err() {
                return self.give_up();
            }
            let Some(line) = read_stdin_line(&mut *self.input) else {
                debug!("input closed, folding");
                return self.give_up();
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return action,
                ParseResult::Quit => return self.give_up(),
                ParseResult::Invalid(msg) => {
                    if ui::write_error(&mut *self.prompt, &msg).is_err() {
                        return self.give_up();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, sink};

    fn request() -> ActionRequest<'static> {
        ActionRequest {
            hand: &[],
            community: &[],
            to_call: 10,
            pot: 15,
            stack: 995,
            min_raise: 20,
        }
    }

    #[test]
    fn reprompts_until_valid() {
        let input = Cursor::new("dance\nraise 40\n");
        let (mut p, quit) = ConsolePlayer::new(Box::new(input), Box::new(sink()));
        assert_eq!(p.get_action(&request()), PlayerAction::Raise(40));
        assert!(!quit.get());
    }

    #[test]
    fn quit_and_eof_fold_and_raise_flag() {
        let (mut p, quit) = ConsolePlayer::new(Box::new(Cursor::new("q\ncall\n")), Box::new(sink()));
        assert_eq!(p.get_action(&request()), PlayerAction::Fold);
        assert!(quit.get());
        // later requests fold without reading
        assert_eq!(p.get_action(&request()), PlayerAction::Fold);

        let (mut p, quit) = ConsolePlayer::new(Box::new(Cursor::new("")), Box::new(sink()));
        assert_eq!(p.get_action(&request()), PlayerAction::Fold);
        assert!(quit.get());
    }
}

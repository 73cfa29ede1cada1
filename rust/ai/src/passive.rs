//! Calling station: never folds, never raises.

use holdem_engine::player::{ActionRequest, Player, PlayerAction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl Player for PassiveAI {
    fn get_action(&mut self, request: &ActionRequest<'_>) -> PlayerAction {
        if request.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }
}

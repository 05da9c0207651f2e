use super::{Action, GameState};
use engine::engine::GameEngine;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;

    fn try_action(&self, game_state: &mut Self::State, action: &Self::Action) -> bool {
        game_state.take_action(action)
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move().as_index()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.turn_count()
    }

    fn winner(&self, game_state: &Self::State) -> Option<usize> {
        game_state.winner().map(|player| player.as_index())
    }
}

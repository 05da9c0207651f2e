pub trait GameEngine {
    type Action;
    type State;

    /// Validates `action` against `game_state` and commits it when legal.
    ///
    /// Returns `false` and leaves the state untouched when the action is
    /// illegal. A rejected action does not consume the turn: the same player
    /// is still to move.
    fn try_action(&self, game_state: &mut Self::State, action: &Self::Action) -> bool;

    fn player_to_move(&self, game_state: &Self::State) -> usize;

    fn move_number(&self, game_state: &Self::State) -> usize;

    fn winner(&self, game_state: &Self::State) -> Option<usize>;
}

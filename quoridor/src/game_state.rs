use itertools::Itertools;
use log::debug;

use super::constants::{BOARD_HEIGHT, BOARD_WIDTH, NUM_WALLS_PER_PLAYER};
use super::{Action, Board, Coordinate, Player, Wall, WallOrientation};
use engine::game_state;

/// Geometric shape of a requested pawn move, classified from the
/// column/row delta between the pawn and its target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MoveKind {
    Step,
    Jump,
    Diagonal,
}

/// Candidate pawn targets relative to the pawn: the four orthogonal steps,
/// the two straight jumps, and the four diagonal sidesteps. Everything else
/// is unclassifiable and never legal.
const CANDIDATE_MOVE_DELTAS: [(i8, i8); 10] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (0, 2),
    (0, -2),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    fences_remaining: [u8; 2],
    turn_count: usize,
    winner: Option<Player>,
}

impl GameState {
    /// Validates and commits an action for the player to move. Returns
    /// `false` with the state untouched when the action is illegal; a
    /// rejected action does not consume the turn.
    pub fn take_action(&mut self, action: &Action) -> bool {
        let player = self.player_to_move();

        match action {
            Action::MovePawn(coordinate) => self.move_pawn(player, *coordinate),
            Action::PlaceHorizontalWall(coordinate) => {
                self.place_fence(player, WallOrientation::Horizontal, *coordinate)
            }
            Action::PlaceVerticalWall(coordinate) => {
                self.place_fence(player, WallOrientation::Vertical, *coordinate)
            }
        }
    }

    pub fn move_pawn(&mut self, player: Player, target: Coordinate) -> bool {
        if !self.is_legal_move(player, target) {
            return false;
        }

        self.board.move_pawn(player, target);
        if target.row() == player.goal_row() {
            self.winner = Some(player);
            debug!("player {} reaches the goal row at {}", player, target);
        }
        self.turn_count += 1;

        true
    }

    pub fn place_fence(
        &mut self,
        player: Player,
        orientation: WallOrientation,
        target: Coordinate,
    ) -> bool {
        if !self.is_legal_fence(player, orientation, target) {
            return false;
        }

        self.board.place_wall(Wall {
            orientation,
            coordinate: target,
        });
        self.fences_remaining[player.idx()] -= 1;
        self.turn_count += 1;
        debug!(
            "player {} fences {:?} {}, {} remaining",
            player,
            orientation,
            target,
            self.fences_remaining[player.idx()]
        );

        true
    }

    /// Whether `player` may move their pawn to `target` right now. Pure
    /// query: never mutates.
    pub fn is_legal_move(&self, player: Player, target: Coordinate) -> bool {
        if !self.common_preconditions(player, target) {
            return false;
        }

        if self.board.pawn_at(target).is_some() {
            return false;
        }

        let current = self.board.pawn(player);
        match Self::classify(current, target) {
            Some(MoveKind::Step) => !self.board.wall_between(current, target),
            Some(MoveKind::Jump) => self.jump_is_legal(current, target),
            Some(MoveKind::Diagonal) => self.diagonal_is_legal(current, target),
            None => false,
        }
    }

    /// Whether `player` may fence `target` right now. Pure query.
    ///
    /// Walls get the bounds check but not the pawn-occupancy check: a fence
    /// segment shares coordinates with a cell without contesting it.
    pub fn is_legal_fence(
        &self,
        player: Player,
        orientation: WallOrientation,
        target: Coordinate,
    ) -> bool {
        self.common_preconditions(player, target)
            && self.fences_remaining[player.idx()] > 0
            && !self.board.wall_at_segment(orientation, target)
    }

    /// Legal pawn moves for the player to move, probed through the same
    /// predicates the mutation path uses.
    pub fn valid_pawn_move_actions(&self) -> impl Iterator<Item = Action> + '_ {
        let player = self.player_to_move();
        let current = self.board.pawn(player);

        CANDIDATE_MOVE_DELTAS
            .iter()
            .filter_map(move |&(dcol, drow)| current.offset(dcol, drow))
            .filter(move |&target| self.is_legal_move(player, target))
            .map(Action::MovePawn)
    }

    /// Legal wall placements for the player to move, both orientations.
    pub fn valid_wall_actions(&self) -> impl Iterator<Item = Action> + '_ {
        let player = self.player_to_move();

        (0..BOARD_HEIGHT as u8)
            .cartesian_product(0..BOARD_WIDTH as u8)
            .flat_map(|(row, col)| {
                let coordinate = Coordinate::new(col, row);
                [
                    (WallOrientation::Horizontal, coordinate),
                    (WallOrientation::Vertical, coordinate),
                ]
            })
            .filter(move |&(orientation, coordinate)| {
                self.is_legal_fence(player, orientation, coordinate)
            })
            .map(|(orientation, coordinate)| match orientation {
                WallOrientation::Horizontal => Action::PlaceHorizontalWall(coordinate),
                WallOrientation::Vertical => Action::PlaceVerticalWall(coordinate),
            })
    }

    pub fn player_to_move(&self) -> Player {
        // Odd turns belong to player one.
        if self.turn_count % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn fences_remaining(&self, player: Player) -> u8 {
        self.fences_remaining[player.idx()]
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn pawn(&self, player: Player) -> Coordinate {
        self.board.pawn(player)
    }

    pub fn pawn_at(&self, coordinate: Coordinate) -> Option<Player> {
        self.board.pawn_at(coordinate)
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.board.walls()
    }

    /// Checks shared by every action: the actor holds the turn, the game is
    /// still running, and the target is on the board.
    fn common_preconditions(&self, player: Player, target: Coordinate) -> bool {
        self.player_to_move() == player && self.winner.is_none() && target.in_bounds()
    }

    fn classify(current: Coordinate, target: Coordinate) -> Option<MoveKind> {
        let dcol = current.col().abs_diff(target.col());
        let drow = current.row().abs_diff(target.row());

        match (dcol, drow) {
            (1, 1) => Some(MoveKind::Diagonal),
            // Jumps exist along the rows only; a two-column delta is
            // unclassifiable and rejected.
            (0, 2) => Some(MoveKind::Jump),
            (1, 0) | (0, 1) => Some(MoveKind::Step),
            _ => None,
        }
    }

    /// A straight jump is open when the cell in between holds the opponent
    /// pawn and neither half-step is fenced off.
    fn jump_is_legal(&self, current: Coordinate, target: Coordinate) -> bool {
        let mid = Coordinate::new(current.col(), (current.row() + target.row()) / 2);

        self.board.pawn_at(mid).is_some()
            && !self.board.wall_between(current, mid)
            && !self.board.wall_between(mid, target)
    }

    /// The sidestep is open only when the straight jump over the adjacent
    /// pawn is blocked past that pawn. The destination itself is already
    /// known to be empty; no wall along the diagonal is consulted.
    fn diagonal_is_legal(&self, current: Coordinate, target: Coordinate) -> bool {
        let ahead = Coordinate::new(current.col(), target.row());
        if self.board.pawn_at(ahead).is_none() {
            return false;
        }

        let drow = target.row() as i8 - current.row() as i8;
        match ahead.offset(0, drow) {
            Some(beyond) => self.board.wall_between(ahead, beyond),
            // Past the last row the frame blocks the jump like a fence does.
            None => true,
        }
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        GameState {
            board: Board::new(),
            fences_remaining: [NUM_WALLS_PER_PLAYER; 2],
            turn_count: 1,
            winner: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::game_state::GameState as GameStateTrait;

    #[test]
    fn test_initial_layout() {
        let game_state = GameState::initial();

        assert_eq!(game_state.turn_count(), 1);
        assert_eq!(game_state.player_to_move(), Player::One);
        assert_eq!(game_state.pawn(Player::One), "e1".parse().unwrap());
        assert_eq!(game_state.pawn(Player::Two), "e9".parse().unwrap());
        assert_eq!(game_state.fences_remaining(Player::One), 10);
        assert_eq!(game_state.fences_remaining(Player::Two), 10);
        assert_eq!(game_state.winner(), None);
        assert_eq!(game_state.walls().count(), 0);
    }

    #[test]
    fn test_classify_rejects_unrecognized_shapes() {
        let e5 = "e5".parse::<Coordinate>().unwrap();

        // Two-column jumps are not a move this engine knows.
        assert_eq!(GameState::classify(e5, "g5".parse().unwrap()), None);
        assert_eq!(GameState::classify(e5, "e8".parse().unwrap()), None);
        assert_eq!(GameState::classify(e5, "f7".parse().unwrap()), None);
        assert_eq!(GameState::classify(e5, e5), None);
    }

    #[test]
    fn test_classify_move_kinds() {
        let e5 = "e5".parse::<Coordinate>().unwrap();

        assert_eq!(
            GameState::classify(e5, "e6".parse().unwrap()),
            Some(MoveKind::Step)
        );
        assert_eq!(
            GameState::classify(e5, "d5".parse().unwrap()),
            Some(MoveKind::Step)
        );
        assert_eq!(
            GameState::classify(e5, "e3".parse().unwrap()),
            Some(MoveKind::Jump)
        );
        assert_eq!(
            GameState::classify(e5, "f6".parse().unwrap()),
            Some(MoveKind::Diagonal)
        );
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut game_state = GameState::initial();

        assert!(!game_state.move_pawn(Player::Two, "e8".parse().unwrap()));
        assert_eq!(game_state.turn_count(), 1);
        assert_eq!(game_state.pawn(Player::Two), "e9".parse().unwrap());
    }

    #[test]
    fn test_out_of_bounds_target_is_rejected() {
        let mut game_state = GameState::initial();

        assert!(!game_state.move_pawn(Player::One, Coordinate::new(4, 9)));
        assert!(!game_state.place_fence(
            Player::One,
            WallOrientation::Horizontal,
            Coordinate::new(9, 4)
        ));
        assert_eq!(game_state.turn_count(), 1);
    }
}

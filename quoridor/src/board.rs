use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use super::{Coordinate, Player};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

/// A single fence segment on the inter-cell grid.
///
/// A horizontal wall at `(c, r)` occupies the boundary below row `r`,
/// blocking vertical movement between `(c, r - 1)` and `(c, r)`. A vertical
/// wall at `(c, r)` occupies the gap left of column `c`, blocking horizontal
/// movement between `(c - 1, r)` and `(c, r)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Wall {
    pub orientation: WallOrientation,
    pub coordinate: Coordinate,
}

/// Pawn occupancy and placed walls, with the geometric queries movement
/// validation is built on. Holds no rule knowledge: bounds and legality are
/// the caller's responsibility, mutators trust their input.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Option<Player>; BOARD_WIDTH]; BOARD_HEIGHT],
    pawns: [Coordinate; 2],
    walls: HashSet<Wall>,
}

impl Board {
    pub fn new() -> Self {
        let p1_start = Coordinate::new(4, 0);
        let p2_start = Coordinate::new(4, 8);

        let mut cells = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        cells[p1_start.row() as usize][p1_start.col() as usize] = Some(Player::One);
        cells[p2_start.row() as usize][p2_start.col() as usize] = Some(Player::Two);

        Self {
            cells,
            pawns: [p1_start, p2_start],
            walls: HashSet::new(),
        }
    }

    pub fn pawn_at(&self, coordinate: Coordinate) -> Option<Player> {
        if !coordinate.in_bounds() {
            return None;
        }

        self.cells[coordinate.row() as usize][coordinate.col() as usize]
    }

    pub fn pawn(&self, player: Player) -> Coordinate {
        self.pawns[player.idx()]
    }

    /// True iff a wall segment blocks direct movement between two
    /// orthogonally-adjacent cells.
    pub fn wall_between(&self, a: Coordinate, b: Coordinate) -> bool {
        debug_assert!(
            a.col().abs_diff(b.col()) + a.row().abs_diff(b.row()) == 1,
            "{} and {} are not adjacent",
            a,
            b
        );

        if a.col() == b.col() {
            // Horizontal walls block vertical movement; the segment between
            // the two rows carries the upper row's coordinate.
            let boundary = Coordinate::new(a.col(), a.row().max(b.row()));
            self.wall_at_segment(WallOrientation::Horizontal, boundary)
        } else {
            let boundary = Coordinate::new(a.col().max(b.col()), a.row());
            self.wall_at_segment(WallOrientation::Vertical, boundary)
        }
    }

    /// True iff a wall of this orientation already occupies the segment.
    ///
    /// The frame around the grid occupies the outermost slot of each
    /// orientation: nothing can ever be placed there, and movement off the
    /// grid is blocked the same way a fence blocks it.
    pub fn wall_at_segment(&self, orientation: WallOrientation, coordinate: Coordinate) -> bool {
        let frame = match orientation {
            WallOrientation::Horizontal => coordinate.row() == 0,
            WallOrientation::Vertical => coordinate.col() == 0,
        };

        frame
            || self.walls.contains(&Wall {
                orientation,
                coordinate,
            })
    }

    pub fn place_wall(&mut self, wall: Wall) {
        self.walls.insert(wall);
    }

    pub fn move_pawn(&mut self, player: Player, coordinate: Coordinate) {
        let from = self.pawns[player.idx()];

        self.cells[from.row() as usize][from.col() as usize] = None;
        self.cells[coordinate.row() as usize][coordinate.col() as usize] = Some(player);
        self.pawns[player.idx()] = coordinate;
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls.iter().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

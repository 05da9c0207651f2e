use super::Coordinate;
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceHorizontalWall(Coordinate),
    PlaceVerticalWall(Coordinate),
}

impl Action {
    pub fn coord(&self) -> Coordinate {
        match self {
            Action::MovePawn(coordinate) => *coordinate,
            Action::PlaceHorizontalWall(coordinate) => *coordinate,
            Action::PlaceVerticalWall(coordinate) => *coordinate,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (coordinate, action_type) = match self {
            Action::MovePawn(coordinate) => (coordinate, ""),
            Action::PlaceHorizontalWall(coordinate) => (coordinate, "h"),
            Action::PlaceVerticalWall(coordinate) => (coordinate, "v"),
        };

        write!(f, "{}{}", coordinate, action_type)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let coordinate = chars.by_ref().take(2).collect::<String>().parse()?;

        match (chars.next(), chars.next()) {
            (None, _) => Ok(Action::MovePawn(coordinate)),
            (Some('h'), None) => Ok(Action::PlaceHorizontalWall(coordinate)),
            (Some('v'), None) => Ok(Action::PlaceVerticalWall(coordinate)),
            _ => bail!("Invalid action {:?}", s),
        }
    }
}

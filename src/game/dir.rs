use serde::{Serialize, Deserialize};
use super::Offset;

//up is -y and down is +y: the board origin is the top-left corner, matching
//the persisted grid layout
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const ALL_DIRS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {

    #[inline]
    pub fn offset(self) -> Offset {
        match self {
            Dir::Up => Offset::new(0, -1),
            Dir::Right => Offset::new(1, 0),
            Dir::Down => Offset::new(0, 1),
            Dir::Left => Offset::new(-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Coord;

    #[test]
    fn test_offsets() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin + Dir::Up.offset(), Coord::new(3, 2));
        assert_eq!(origin + Dir::Right.offset(), Coord::new(4, 3));
        assert_eq!(origin + Dir::Down.offset(), Coord::new(3, 4));
        assert_eq!(origin + Dir::Left.offset(), Coord::new(2, 3));
    }

    #[test]
    fn test_opposite() {
        for &dir in ALL_DIRS.iter() {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_serde_rename() {
        assert_eq!(serde_json::to_string(&Dir::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::from_str::<Dir>("\"up\"").unwrap(), Dir::Up);
    }
}

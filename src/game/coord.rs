use std::ops::{Add, Sub};
use serde::{Serialize, Deserialize};
use super::{Offset, Unit};

#[derive(Copy, Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coord {
    pub x: Unit,
    pub y: Unit,
}

impl Coord {

    #[inline]
    pub fn new(x: Unit, y: Unit) -> Coord {
        Coord {x, y}
    }

    #[inline]
    pub fn translate(self, offset: Offset) -> Coord {
        Coord {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

impl Add<Offset> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Offset) -> Coord {
        self.translate(rhs)
    }
}

impl Sub for Coord {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Coord) -> Offset {
        Offset::between(rhs, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_and_offset() {
        let a = Coord {x: 1, y: 2};
        let b = Coord {x: 10, y: 0};

        let ab = Offset::between(a, b);
        let c = a.translate(ab);
        assert_eq!(c.x, 10);
        assert_eq!(c.y, 0);

        assert_eq!(c, b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_coord_ops() {
        let a = Coord {x: 1, y: 2};
        let b = Coord {x: 10, y: 0};

        let ba = a - b;
        assert_eq!(ba.dx, -9);
        assert_eq!(ba.dy, 2);

        let c = b + ba;
        assert_eq!(c.x, 1);
        assert_eq!(c.y, 2);
    }
}

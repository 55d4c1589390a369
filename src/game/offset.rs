use super::{Coord, Unit, UnitAbs};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Offset {
    pub dx: Unit,
    pub dy: Unit,
}

impl Offset {

    #[inline]
    pub fn new(dx: Unit, dy: Unit) -> Offset {
        Offset {dx, dy}
    }

    #[inline]
    pub fn between(a: Coord, b: Coord) -> Offset {
        Offset {
            dx: b.x - a.x,
            dy: b.y - a.y,
        }
    }

    #[inline]
    pub fn manhattan_dist(self) -> UnitAbs {
        self.dx.abs() as UnitAbs + self.dy.abs() as UnitAbs
    }
}

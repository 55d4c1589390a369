use std::iter;
use super::{Coord, Dir, UnitAbs};

//body segments in order, head first; never empty, never self-overlapping
#[derive(Clone, PartialEq, Debug)]
pub struct Snake {
    segments: Vec<Coord>,
}

impl Snake {

    //starting body: `size` segments trailing off opposite to `facing`
    pub fn extend_from(head: Coord, facing: Dir, size: UnitAbs) -> Snake {
        let back = facing.opposite().offset();
        let mut segments = Vec::with_capacity(size);
        let mut cursor = head;
        for _ in 0..size {
            segments.push(cursor);
            cursor = cursor + back;
        }
        Snake {segments}
    }

    pub fn from_parts(head: Coord, rest: &[Coord]) -> Snake {
        Snake {
            segments: iter::once(head).chain(rest.iter().cloned()).collect(),
        }
    }

    #[inline]
    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    pub fn tail(&self) -> Coord {
        *self.segments.last().unwrap()
    }

    #[inline]
    pub fn segments(&self) -> &[Coord] {
        &self.segments
    }

    //segments after the head, in the persisted document's order
    pub fn behind_head(&self) -> &[Coord] {
        &self.segments[1..]
    }

    #[inline]
    pub fn size(&self) -> UnitAbs {
        self.segments.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.segments.iter().any(|&s| s == coord)
    }

    //the cells occupied after the next move lands, minus the new head: full
    //body when growing, tail dropped otherwise. doubles as the collision set,
    //so stepping onto a vacated tail cell is legal
    pub fn slid_body(&self, grow: bool) -> Vec<Coord> {
        if grow {
            self.segments.clone()
        } else {
            self.segments[..self.segments.len() - 1].to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_from() {
        //facing +x, so the body trails off in -x
        let snake = Snake::extend_from(Coord::new(2, 2), Dir::Right, 3);
        assert_eq!(snake.segments(), &[
            Coord::new(2, 2),
            Coord::new(1, 2),
            Coord::new(0, 2),
        ]);
        assert_eq!(snake.head(), Coord::new(2, 2));
        assert_eq!(snake.tail(), Coord::new(0, 2));
        assert_eq!(snake.size(), 3);

        let snake = Snake::extend_from(Coord::new(0, 0), Dir::Up, 2);
        assert_eq!(snake.segments(), &[Coord::new(0, 0), Coord::new(0, 1)]);

        let snake = Snake::extend_from(Coord::new(4, 4), Dir::Left, 1);
        assert_eq!(snake.segments(), &[Coord::new(4, 4)]);
    }

    #[test]
    fn test_contains() {
        let snake = Snake::extend_from(Coord::new(2, 2), Dir::Right, 3);
        assert!(snake.contains(Coord::new(2, 2)));
        assert!(snake.contains(Coord::new(0, 2)));
        assert!(!snake.contains(Coord::new(3, 2)));
    }

    #[test]
    fn test_slid_body() {
        let snake = Snake::extend_from(Coord::new(2, 2), Dir::Right, 3);

        //normal slide vacates the tail
        assert_eq!(snake.slid_body(false), vec![
            Coord::new(2, 2),
            Coord::new(1, 2),
        ]);

        //growth keeps every cell occupied
        assert_eq!(snake.slid_body(true), snake.segments().to_vec());
    }

    #[test]
    fn test_from_parts() {
        let rest = [Coord::new(1, 2), Coord::new(1, 3)];
        let snake = Snake::from_parts(Coord::new(2, 2), &rest);
        assert_eq!(snake.size(), 3);
        assert_eq!(snake.head(), Coord::new(2, 2));
        assert_eq!(snake.behind_head(), &rest);
    }
}

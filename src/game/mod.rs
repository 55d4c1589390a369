mod coord;
mod dir;
mod grid;
mod offset;
mod snake;
mod state;
mod turn;

use thiserror::Error;

pub use coord::*;
pub use dir::*;
pub use grid::*;
pub use offset::*;
pub use snake::*;
pub use state::*;
pub use turn::*;

pub type Unit = i16;
pub type UnitAbs = usize;

//validated once at startup; everything downstream assumes a sane board
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GameConfig {
    pub width: UnitAbs,
    pub height: UnitAbs,
    pub start_size: UnitAbs,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = Err(GameError::Config {
            width: self.width,
            height: self.height,
            start_size: self.start_size,
        });
        if self.width == 0 || self.height == 0 || self.start_size == 0 {
            return invalid;
        }
        //coordinates are Unit-sized; a larger board would wrap when cast
        let limit = Unit::max_value() as UnitAbs;
        if self.width > limit || self.height > limit || self.start_size > limit {
            return invalid;
        }
        //a straight snake must fit along at least one axis
        if self.start_size > self.width && self.start_size > self.height {
            return invalid;
        }
        Ok(())
    }

    #[inline]
    pub fn area(&self) -> UnitAbs {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && (coord.x as UnitAbs) < self.width &&
            coord.y >= 0 && (coord.y as UnitAbs) < self.height
    }

    //all board coordinates, x-major to match the persisted grid layout
    pub fn tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        let height = self.height;
        (0..self.width).flat_map(move |x| {
            (0..height).map(move |y| Coord::new(x as Unit, y as Unit))
        })
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum GameError {
    #[error("a snake of length {start_size} cannot start on a {width}x{height} board")]
    Config {
        width: UnitAbs,
        height: UnitAbs,
        start_size: UnitAbs,
    },
    #[error("no free tile left to place the {0}")]
    PlacementExhausted(&'static str),
    #[error("no legal move from {head:?} on turn {turn}")]
    NoLegalMove { head: Coord, turn: u32 },
    #[error("the snake occupies the whole board; nowhere left for an egg")]
    BoardFull,
}

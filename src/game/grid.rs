use serde::{Serialize, Deserialize};
use super::{Coord, GameConfig, GameState, Unit};

//colour tags consumed by the downstream charts; the body fades linearly
//from COLOUR_BODY_MAX at the neck toward COLOUR_BODY_MIN at the tail
pub const COLOUR_HEAD: f64 = 9.0;
pub const COLOUR_BODY_MAX: f64 = 8.0;
pub const COLOUR_BODY_MIN: f64 = 6.0;
pub const COLOUR_EMPTY: f64 = 5.0;
pub const COLOUR_EGG: f64 = 0.0;

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Debug)]
pub struct Tile {
    pub x: Unit,
    pub y: Unit,
    pub colour: f64,
}

//the persisted grid shape: board-width outer array of board-height inner
//arrays. purely derived, never read back by the engine
pub fn project(cfg: &GameConfig, state: &GameState) -> Vec<Vec<Tile>> {
    let body = state.snake.behind_head();
    (0..cfg.width as Unit).map(|x| {
        (0..cfg.height as Unit).map(|y| {
            let here = Coord::new(x, y);
            let colour = if here == state.snake.head() {
                COLOUR_HEAD
            } else if let Some(i) = body.iter().position(|&seg| seg == here) {
                COLOUR_BODY_MAX -
                    (COLOUR_BODY_MAX - COLOUR_BODY_MIN) * i as f64 / body.len() as f64
            } else if here == state.egg {
                COLOUR_EGG
            } else {
                COLOUR_EMPTY
            };
            Tile {x, y, colour}
        }).collect()
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, GameState};

    fn fixture() -> (GameConfig, GameState) {
        GameState::parse_basic("
        |  |()|  |
        |  |  |Y0|
        |  |  |Y1|
        |  |Y3|Y2|
        |  |  |  |
        ")
    }

    fn tile_at(grid: &[Vec<Tile>], coord: Coord) -> Tile {
        grid[coord.x as usize][coord.y as usize]
    }

    #[test]
    fn test_shape() {
        let (cfg, state) = fixture();
        let grid = project(&cfg, &state);
        assert_eq!(grid.len(), cfg.width);
        for (x, col) in grid.iter().enumerate() {
            assert_eq!(col.len(), cfg.height);
            for (y, tile) in col.iter().enumerate() {
                assert_eq!((tile.x as usize, tile.y as usize), (x, y));
            }
        }
    }

    #[test]
    fn test_tags() {
        let (cfg, state) = fixture();
        let grid = project(&cfg, &state);

        assert_eq!(tile_at(&grid, state.snake.head()).colour, COLOUR_HEAD);
        assert_eq!(tile_at(&grid, state.egg).colour, COLOUR_EGG);
        assert_eq!(tile_at(&grid, Coord::new(0, 0)).colour, COLOUR_EMPTY);

        //gradient: neck at full body intensity, fading toward the tail
        let body = state.snake.behind_head();
        assert_eq!(tile_at(&grid, body[0]).colour, COLOUR_BODY_MAX);
        let colours = body.iter()
            .map(|&seg| tile_at(&grid, seg).colour)
            .collect::<Vec<_>>();
        assert!(colours.windows(2).all(|w| w[1] < w[0]));
        assert!(colours.iter().all(|&c| c > COLOUR_BODY_MIN && c <= COLOUR_BODY_MAX));
    }

    #[test]
    fn test_projection_is_pure() {
        let (cfg, state) = fixture();
        assert_eq!(project(&cfg, &state), project(&cfg, &state));
    }

    #[test]
    fn test_single_segment_snake() {
        let (cfg, mut state) = fixture();
        state.snake = crate::game::Snake::extend_from(Coord::new(0, 0), crate::game::Dir::Up, 1);
        let grid = project(&cfg, &state);
        assert_eq!(tile_at(&grid, Coord::new(0, 0)).colour, COLOUR_HEAD);
    }
}

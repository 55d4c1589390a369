use rand::prelude::*;
use super::{ALL_DIRS, Coord, Dir, GameConfig, GameError, Offset, Snake, Unit};

//replaced wholesale every turn; only the turn engine derives a successor
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    pub turn: u32,
    pub snake: Snake,
    pub egg: Coord,
    pub facing: Dir,
    //true iff the egg was consumed on the immediately preceding turn
    pub eaten: bool,
    pub alive: bool,
}

impl GameState {

    pub fn init(cfg: &GameConfig, rng: &mut impl Rng) -> Result<GameState, GameError> {
        cfg.validate()?;

        let head = Coord::new(
            rng.gen_range(0, cfg.width) as Unit,
            rng.gen_range(0, cfg.height) as Unit,
        );

        //the whole starting body is a straight line, so it fits iff its far end does
        let fits = ALL_DIRS.iter().cloned().filter(|dir| {
            let back = dir.opposite().offset();
            let steps = (cfg.start_size - 1) as Unit;
            cfg.contains(head + Offset::new(back.dx * steps, back.dy * steps))
        }).collect::<Vec<_>>();

        let facing = *fits.choose(rng)
            .ok_or(GameError::PlacementExhausted("starting snake"))?;
        let snake = Snake::extend_from(head, facing, cfg.start_size);

        let egg = random_free_tile(cfg, &snake, rng)
            .ok_or(GameError::PlacementExhausted("egg"))?;

        Ok(GameState {
            turn: 0,
            snake,
            egg,
            facing,
            eaten: false,
            alive: true,
        })
    }

    //the terminal copy persisted when no further turn is possible
    pub fn halted(&self) -> GameState {
        GameState {
            alive: false,
            ..self.clone()
        }
    }
}

//uniform pick among tiles the snake does not occupy
pub(crate) fn random_free_tile(
    cfg: &GameConfig,
    snake: &Snake,
    rng: &mut impl Rng,
) -> Option<Coord> {
    let free = cfg.tiles().filter(|&t| !snake.contains(t)).collect::<Vec<_>>();
    free.choose(rng).cloned()
}

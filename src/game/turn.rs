use rand::prelude::*;
use super::{ALL_DIRS, Dir, GameConfig, GameError, GameState, Snake};
use super::state::random_free_tile;

//everything a movement rule may look at; candidate sets are computed once up
//front so each rule stays a trivial, separately testable predicate
#[derive(Debug)]
pub struct MoveSearch {
    pub facing: Dir,
    //in bounds and not colliding with the post-move body
    pub legal: Vec<Dir>,
    //directions that close the gap to the egg on one axis, in the fixed
    //tie-break order -x, +x, -y, +y
    pub aligned: Vec<Dir>,
}

impl MoveSearch {
    pub fn new(cfg: &GameConfig, state: &GameState) -> MoveSearch {
        let head = state.snake.head();
        let blocked = state.snake.slid_body(state.eaten);

        let legal = ALL_DIRS.iter().cloned().filter(|&dir| {
            let landing = head + dir.offset();
            cfg.contains(landing) && !blocked.contains(&landing)
        }).collect();

        let mut aligned = Vec::with_capacity(2);
        if state.egg.x < head.x {
            aligned.push(Dir::Left);
        } else if state.egg.x > head.x {
            aligned.push(Dir::Right);
        }
        if state.egg.y < head.y {
            aligned.push(Dir::Up);
        } else if state.egg.y > head.y {
            aligned.push(Dir::Down);
        }

        MoveSearch {
            facing: state.facing,
            legal,
            aligned,
        }
    }

    fn is_legal(&self, dir: Dir) -> bool {
        self.legal.contains(&dir)
    }

    fn is_aligned(&self, dir: Dir) -> bool {
        self.aligned.contains(&dir)
    }
}

type Rule = fn(&MoveSearch, &mut dyn RngCore) -> Option<Dir>;

//ranked movement rules, evaluated in order, first match wins
pub const RULES: [(&str, Rule); 4] = [
    ("keep-facing-toward-egg", |s, _| {
        Some(s.facing).filter(|&d| s.is_aligned(d) && s.is_legal(d))
    }),
    ("first-aligned", |s, _| {
        s.aligned.iter().cloned().find(|&d| s.is_legal(d))
    }),
    ("keep-facing", |s, _| {
        Some(s.facing).filter(|&d| s.is_legal(d))
    }),
    ("any-legal", |s, rng| {
        s.legal.choose(rng).cloned()
    }),
];

pub fn choose_dir(search: &MoveSearch, rng: &mut impl Rng) -> Option<Dir> {
    RULES.iter().find_map(|(_, rule)| rule(search, rng))
}

//one full turn; NoLegalMove and BoardFull are terminal and leave the input
//state untouched for the caller to wind down
pub fn advance(
    cfg: &GameConfig,
    state: &GameState,
    rng: &mut impl Rng,
) -> Result<GameState, GameError> {
    let head = state.snake.head();
    let search = MoveSearch::new(cfg, state);

    let facing = choose_dir(&search, rng).ok_or(GameError::NoLegalMove {
        head,
        turn: state.turn,
    })?;

    //growth applies on the turn after eating: the tail cell is retained
    let new_head = head + facing.offset();
    let snake = Snake::from_parts(new_head, &state.snake.slid_body(state.eaten));

    let eaten = new_head == state.egg;
    let egg = if eaten {
        random_free_tile(cfg, &snake, rng).ok_or(GameError::BoardFull)?
    } else {
        state.egg
    };

    Ok(GameState {
        turn: state.turn + 1,
        snake,
        egg,
        facing,
        eaten,
        alive: true,
    })
}

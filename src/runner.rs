use std::io;
use std::thread::sleep;
use std::time::Duration;
use log::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use thiserror::Error;
use uuid::Uuid;
use crate::doc::SnapshotDoc;
use crate::game::{self, GameConfig, GameError, GameState};
use crate::store::{SnapshotStore, StoreError};
use crate::util::draw_state;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Pace {
    //fixed wall-clock delay, for poll-driven charts
    Interval(Duration),
    //block on ENTER so a human can single-step the game
    Prompt,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn wait_for_prompt() {
    info!("Press [ENTER] for the next turn");
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
}

//starts a fresh game, discarding any persisted history, then advances and
//persists turn snapshots until the game ends or `max_turns` is reached
pub fn run_game(
    store: &mut dyn SnapshotStore,
    cfg: GameConfig,
    pace: Pace,
    seed: Option<u64>,
    max_turns: Option<u32>,
) -> Result<(), RunError> {
    let mut rng = make_rng(seed);

    store.reset()?;
    let game_id = Uuid::new_v4().to_string();
    let mut state = GameState::init(&cfg, &mut rng)?;

    info!("Initialized {}x{} board; game id {}", cfg.width, cfg.height, &game_id);
    store.append(&SnapshotDoc::build(&cfg, &state, &game_id))?;
    debug!("Turn {}\n{}", state.turn, draw_state(&cfg, &state));

    while max_turns.map_or(true, |cap| state.turn < cap) {
        match pace {
            Pace::Interval(delay) => sleep(delay),
            Pace::Prompt => wait_for_prompt(),
        }

        state = match step_once(&cfg, &state, &mut rng, store, &game_id)? {
            Some(next) => next,
            None => return Ok(()),
        };
    }

    info!("Stopping after the configured {} turn(s)", state.turn);
    Ok(())
}

//resumes from the latest persisted snapshot and advances exactly one turn
pub fn step_game(store: &mut dyn SnapshotStore, seed: Option<u64>) -> Result<(), RunError> {
    let latest = store.load_latest()?.ok_or(StoreError::Empty)?;
    if !latest.alive {
        info!("Game {} already ended on turn {}", latest.game_id, latest.turn);
        return Ok(());
    }
    let cfg = latest.config();
    let state = latest.to_state();
    let mut rng = make_rng(seed);
    step_once(&cfg, &state, &mut rng, store, &latest.game_id)?;
    Ok(())
}

//terminal conditions persist a final not-alive snapshot and yield None;
//the state is otherwise frozen
fn step_once(
    cfg: &GameConfig,
    state: &GameState,
    rng: &mut StdRng,
    store: &mut dyn SnapshotStore,
    game_id: &str,
) -> Result<Option<GameState>, RunError> {
    match game::advance(cfg, state, rng) {
        Ok(next) => {
            if next.eaten {
                info!("Egg eaten on turn {}; snake is now {} long", next.turn, next.snake.size());
            }
            store.append(&SnapshotDoc::build(cfg, &next, game_id))?;
            debug!("Turn {}\n{}", next.turn, draw_state(cfg, &next));
            Ok(Some(next))
        },
        Err(terminal @ GameError::NoLegalMove {..}) |
        Err(terminal @ GameError::BoardFull) => {
            warn!("Game over: {}", terminal);
            let last = state.halted();
            store.append(&SnapshotDoc::build(cfg, &last, game_id))?;
            info!("Final snapshot persisted at turn {}", last.turn);
            Ok(None)
        },
        Err(other) => Err(RunError::Game(other)),
    }
}

//renders the latest persisted snapshot to the terminal
pub fn show_latest(store: &dyn SnapshotStore) -> Result<String, RunError> {
    let latest = store.load_latest()?.ok_or(StoreError::Empty)?;
    let cfg = latest.config();
    let state = latest.to_state();
    Ok(format!(
        "game {} | turn {} | {}\n{}",
        latest.game_id,
        latest.turn,
        if latest.alive {"alive"} else {"ended"},
        draw_state(&cfg, &state),
    ))
}

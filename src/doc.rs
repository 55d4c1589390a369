use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::game::{self, Coord, Dir, GameConfig, GameState, Snake, Tile};

//one persisted turn snapshot. the layout is consumed by an external charting
//tool and must stay structurally stable: `grid` keeps the nested array shape
//the charts flatten/unwind, and `body` lists the segments after the head
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SnapshotDoc {
    pub game_id: String,
    pub turn: u32,
    pub head: Coord,
    pub body: Vec<Coord>,
    pub egg: Coord,
    pub direction: Dir,
    pub eaten: bool,
    pub alive: bool,
    pub written_at: DateTime<Utc>,
    pub grid: Vec<Vec<Tile>>,
}

impl SnapshotDoc {

    pub fn build(cfg: &GameConfig, state: &GameState, game_id: &str) -> SnapshotDoc {
        SnapshotDoc {
            game_id: String::from(game_id),
            turn: state.turn,
            head: state.snake.head(),
            body: state.snake.behind_head().to_vec(),
            egg: state.egg,
            direction: state.facing,
            eaten: state.eaten,
            alive: state.alive,
            written_at: Utc::now(),
            grid: game::project(cfg, state),
        }
    }

    //board dimensions as recorded by the grid shape
    pub fn config(&self) -> GameConfig {
        GameConfig {
            width: self.grid.len(),
            height: self.grid.first().map_or(0, Vec::len),
            start_size: 1 + self.body.len(),
        }
    }

    //rehydrates the engine state so a run can resume from the latest snapshot
    pub fn to_state(&self) -> GameState {
        GameState {
            turn: self.turn,
            snake: Snake::from_parts(self.head, &self.body),
            egg: self.egg,
            facing: self.direction,
            eaten: self.eaten,
            alive: self.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let (cfg, state) = GameState::parse_basic("
        |  |()|  |
        |  |  |Y0|
        |  |  |Y1|
        |  |Y3|Y2|
        ");
        let doc = SnapshotDoc::build(&cfg, &state, "g1");

        assert_eq!(doc.head, state.snake.head());
        assert_eq!(doc.body.len(), state.snake.size() - 1);
        assert_eq!(doc.config().width, cfg.width);
        assert_eq!(doc.config().height, cfg.height);
        assert_eq!(doc.to_state(), state);
    }

    #[test]
    fn test_json_layout() {
        let (cfg, state) = GameState::parse_basic("
        |Y0|Y1|()|
        |  |  |  |
        ");
        let doc = SnapshotDoc::build(&cfg, &state, "g1");
        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&doc).unwrap()
        ).unwrap();

        assert_eq!(json["turn"], 0);
        assert_eq!(json["head"]["x"], 0);
        assert_eq!(json["egg"]["x"], 2);
        assert_eq!(json["direction"], "left");
        assert_eq!(json["eaten"], false);
        assert_eq!(json["alive"], true);
        //width outer, height inner, tagged tiles
        assert_eq!(json["grid"].as_array().unwrap().len(), cfg.width);
        assert_eq!(json["grid"][0].as_array().unwrap().len(), cfg.height);
        assert_eq!(json["grid"][2][0]["colour"], 0.0);

        let back: SnapshotDoc = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}

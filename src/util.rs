use std::iter;
use ansi_term::{Colour, Style};
use crate::game::{Coord, GameConfig, GameState};

//ANSI render for logs and `show`: head underlined, body fading through the
//256-colour greens like the gradient the persisted grid carries
pub fn draw_state(cfg: &GameConfig, state: &GameState) -> String {
    let w = cfg.width;
    let h = cfg.height;

    let mut grid = iter::repeat_with(|| {
        iter::repeat_with(|| {
            String::from(" ")
        }).take(w).collect::<Vec<_>>()
    }).take(h).collect::<Vec<_>>();

    let Coord {x, y} = state.egg;
    grid[y as usize][x as usize] = Colour::Red.paint("*").to_string();

    let size = state.snake.size();
    for (i, &Coord {x, y}) in state.snake.segments().iter().enumerate() {
        //ansi 22..=28 is a dark-to-bright green ramp
        let green = 28 - (6 * i / size) as u8;
        let mut style = Style::from(Colour::Fixed(green));
        if i == 0 {
            style = style.underline();
        }
        grid[y as usize][x as usize] = style.paint("o").to_string();
    }

    let mut buf = String::new();
    buf.push_str(&horizontal_rule(w, "╔", "╤", "═", "╗\n"));

    for (i, row) in grid.iter().enumerate() {
        if i != 0 {
            buf.push_str(&horizontal_rule(w, "╟", "┼", "─", "╢\n"));
        }
        buf.push_str(&Colour::Black.paint("║ ").to_string());
        buf.push_str(&row.join(&Colour::Black.paint(" │ ").to_string()));
        buf.push_str(&Colour::Black.paint(" ║\n").to_string());
    }

    buf.push_str(&horizontal_rule(w, "╚", "╧", "═", "╝"));
    buf
}

fn horizontal_rule(w: usize, left: &str, joint: &str, bar: &str, right: &str) -> String {
    (0..=(w * 4)).map(|i| {
        if i == 0 {
            Colour::Black.paint(left).to_string()
        } else if i == w * 4 {
            Colour::Black.paint(right).to_string()
        } else if i % 4 == 0 {
            Colour::Black.paint(joint).to_string()
        } else {
            Colour::Black.paint(bar).to_string()
        }
    }).collect()
}

mod doc;
mod game;
mod runner;
mod store;
mod util;

use std::path::Path;
use std::process::exit;
use std::time::Duration;
use clap::{App, Arg, SubCommand};
use log::*;
use game::GameConfig;
use runner::Pace;
use store::FileStore;

fn main() {
    env_logger::init();

    let store_arg = Arg::with_name("store")
        .help("Directory the turn snapshots are written to")
        .required(true);
    let seed_arg = Arg::with_name("seed")
        .long("seed")
        .help("Fixed RNG seed for a reproducible game")
        .takes_value(true);

    let matches = App::new("Gridworm")
        .about("Plays Snake against itself and persists every turn for a polling chart to render.")
        .subcommand(SubCommand::with_name("run")
            .about("Starts a fresh game and keeps advancing it on a timer.")
            .arg(store_arg.clone())
            .arg(Arg::with_name("width")
                .short("W")
                .long("width")
                .help("Board width in tiles")
                .takes_value(true)
                .default_value("5")
            )
            .arg(Arg::with_name("height")
                .short("H")
                .long("height")
                .help("Board height in tiles")
                .takes_value(true)
                .default_value("4")
            )
            .arg(Arg::with_name("size")
                .short("s")
                .long("size")
                .help("Starting snake length")
                .takes_value(true)
                .default_value("3")
            )
            .arg(Arg::with_name("interval")
                .short("i")
                .long("interval")
                .help("Seconds between turns; polling charts refresh no faster than 10")
                .takes_value(true)
                .default_value("20")
            )
            .arg(Arg::with_name("prompt")
                .short("p")
                .long("prompt")
                .help("Wait for ENTER between turns instead of sleeping")
            )
            .arg(Arg::with_name("turns")
                .long("turns")
                .help("Stop after this many turns")
                .takes_value(true)
            )
            .arg(seed_arg.clone())
        )
        .subcommand(SubCommand::with_name("step")
            .about("Advances the persisted game by exactly one turn.")
            .arg(store_arg.clone())
            .arg(seed_arg)
        )
        .subcommand(SubCommand::with_name("show")
            .about("Renders the latest persisted snapshot to the terminal.")
            .arg(store_arg)
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("run", Some(args)) => {
            let cfg = GameConfig {
                width: parse_arg(args.value_of("width").unwrap(), "width"),
                height: parse_arg(args.value_of("height").unwrap(), "height"),
                start_size: parse_arg(args.value_of("size").unwrap(), "size"),
            };
            let pace = if args.is_present("prompt") {
                Pace::Prompt
            } else {
                let secs: u64 = parse_arg(args.value_of("interval").unwrap(), "interval");
                Pace::Interval(Duration::from_secs(secs))
            };
            let seed = args.value_of("seed").map(|s| parse_arg(s, "seed"));
            let turns = args.value_of("turns").map(|s| parse_arg(s, "turns"));

            open_store(args.value_of("store").unwrap())
                .and_then(|mut store| runner::run_game(&mut store, cfg, pace, seed, turns))
        },
        ("step", Some(args)) => {
            let seed = args.value_of("seed").map(|s| parse_arg(s, "seed"));
            open_store(args.value_of("store").unwrap())
                .and_then(|mut store| runner::step_game(&mut store, seed))
        },
        ("show", Some(args)) => {
            open_store(args.value_of("store").unwrap())
                .and_then(|store| runner::show_latest(&store))
                .map(|rendered| println!("{}", rendered))
        },
        _ => {
            eprintln!("{}", matches.usage());
            exit(2);
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
}

fn open_store(dir: &str) -> Result<FileStore, runner::RunError> {
    FileStore::open(Path::new(dir)).map_err(runner::RunError::from)
}

fn parse_arg<T: std::str::FromStr>(value: &str, name: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Argument `{}` must be numeric", name);
        exit(2)
    })
}

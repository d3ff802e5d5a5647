use guess_arena::cli::{CliInterface, parse_cli};
use guess_arena::logging::{init_logging, level_for};
use guess_arena::tui::TuiInterface;
use guess_arena::{MemoryStore, Table, game_loop};
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(level_for(cli.verbose, cli.tui));

    let mut table = match Table::new(MemoryStore::default(), cli.settings()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let result = if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                error!("Failed to initialise terminal: {e}");
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut table, cli.mode, &mut rng, &mut interface)
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut table, cli.mode, &mut rng, &mut interface)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Game loop stopped: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

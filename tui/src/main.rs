mod args;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use log::info;
use std::{error::Error, thread, time::Duration};
use torus_life_lib::Life;

/// Prints the generations to stdout.
///
/// Without a generation limit, it runs until killed.
fn run_without_tui(life: &mut Life, args: &Args) {
    let interval = Duration::from_millis(args.config.interval);
    loop {
        println!(
            "Gen: {}  Cells: {}\n{}",
            life.generation(),
            life.population(),
            life.grid()
        );
        if args.config.generations.map_or(false, |n| life.generation() >= n) {
            break;
        }
        thread::sleep(interval);
        life.advance();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    let mut life = Life::new(args.grid.clone());

    #[cfg(feature = "tui")]
    {
        if args.no_tui {
            run_without_tui(&mut life, &args);
        } else {
            tui::run_with_tui(&mut life, &args.config)?;
        }
    }
    #[cfg(not(feature = "tui"))]
    run_without_tui(&mut life, &args);

    info!(
        "Stopped at generation {} with {} living cells",
        life.generation(),
        life.population()
    );
    let grid = life.into_grid();
    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            println!("{}", grid);
        }
    }
    if let Some(path) = &args.save {
        grid.save(path)?;
    }
    Ok(())
}

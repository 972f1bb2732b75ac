use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use memory_match::core::DEFAULT_PAIR_COUNT;
use memory_match::{CardIndex, Game, GameConfig, Input, Outcome, Phase, TextLayout};

#[derive(Parser)]
#[command(name = "memory-match")]
#[command(version, about = "Find every pair of matching cards", long_about = None)]
struct Cli {
    /// Number of pairs on the board
    #[arg(short, long, default_value_t = DEFAULT_PAIR_COUNT)]
    pairs: usize,

    /// Comma-separated image identifiers, one per pair
    #[arg(short, long, value_delimiter = ',')]
    images: Option<Vec<String>>,

    /// Seed for a reproducible deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards per row
    #[arg(short, long, default_value_t = 4)]
    columns: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Keeps the game clock in step with the wall clock.
struct Driver {
    game: Game,
    layout: TextLayout,
    last: Instant,
}

impl Driver {
    fn catch_up(&mut self) {
        let elapsed = self.last.elapsed();
        self.last = Instant::now();
        self.game
            .advance(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    }

    fn draw(&self) {
        print!("\n{}", self.layout.draw(&self.game.view()));
    }

    /// Sleep through locked phases, redrawing whenever the visible faces change.
    fn wait_while_locked(&mut self) {
        let mut shown: Vec<CardIndex> = self.game.view().revealed();
        while matches!(self.game.state().phase, Phase::Idle | Phase::CheckingPair) {
            let Some(wait) = self.game.time_to_next_timer() else {
                break;
            };
            thread::sleep(Duration::from_millis(wait));
            self.catch_up();

            let revealed = self.game.view().revealed();
            if revealed != shown {
                self.draw();
                shown = revealed;
            }
        }
        self.draw();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let images = cli
        .images
        .unwrap_or_else(|| (1..=cli.pairs).map(|i| format!("img{i}.jpg")).collect());
    let mut config = GameConfig::default()
        .with_pair_count(cli.pairs)
        .with_images(images);
    config.seed = cli.seed;

    let game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };
    log::debug!("dealing with seed {}", game.seed());

    let mut driver = Driver {
        game,
        layout: TextLayout::new(cli.columns.max(1)),
        last: Instant::now(),
    };

    match run(&mut driver) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(driver: &mut Driver) -> io::Result<()> {
    println!("Memory Match: type a card number to flip it, r to reset, q to quit.");
    driver.wait_while_locked();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }

        driver.catch_up();
        match driver.game.dispatch(Input::parse(&line)) {
            Outcome::Ignored(reason) => {
                log::debug!("input {:?} ignored: {reason:?}", line.trim());
                println!("Nothing happened.");
                continue;
            }
            Outcome::Mismatched(..) => {
                driver.draw();
                println!("No match.");
            }
            _ => {}
        }
        driver.wait_while_locked();
    }
}

//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, dispatches intents to the engine and prints the
//! board as a plain text grid. Restart is handled here: the engine only knows
//! how to slide.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, terminal, QueueableCommand};
use env_logger::Env;
use log::{info, warn};

use slide2048::core::GameState;
use slide2048::input::{handle_key_event, should_quit};
use slide2048::types::Intent;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play a 4x4 sliding-tile game in the terminal")]
struct Cli {
    /// Seed for tile spawns; the same seed replays the same game
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.queue(terminal::EnterAlternateScreen)?;
    stdout.queue(cursor::Hide)?;
    stdout.flush()?;

    let result = run(&mut stdout, cli.seed);

    // Always try to restore terminal state.
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
    result
}

fn run(stdout: &mut Stdout, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    info!("starting game with seed {seed}");

    loop {
        draw(stdout, &game)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match handle_key_event(key) {
            Some(Intent::Restart) => {
                game = GameState::new(game.seed().wrapping_add(1));
            }
            Some(intent) => {
                if let Err(err) = game.apply_intent(intent) {
                    warn!("{err}");
                }
            }
            None => {}
        }
    }
}

fn draw(stdout: &mut Stdout, game: &GameState) -> Result<()> {
    stdout.queue(terminal::Clear(terminal::ClearType::All))?;
    stdout.queue(cursor::MoveTo(0, 0))?;

    // Raw mode does not translate '\n', so emit explicit carriage returns.
    for row in game.board().to_string().lines() {
        write!(stdout, "{row}\r\n")?;
    }
    write!(stdout, "\r\nseed {}  moves {}", game.seed(), game.moves())?;
    if game.game_over() {
        write!(stdout, "  no moves left")?;
    }
    write!(stdout, "\r\narrows/hjkl/wasd slide, r restart, q quit\r\n")?;
    stdout.flush()?;
    Ok(())
}

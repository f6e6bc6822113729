//! Terminal Minesweeper runner (default binary).
//!
//! Parses the board configuration, then runs two activities: the input thread
//! (blocking terminal reads, translated into actions) and this control loop,
//! which owns the game state, applies each action and repaints.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tui_mines::core::{GameSnapshot, GameState};
use tui_mines::input::{spawn_listener, InputEvent};
use tui_mines::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_mines::types::{BoardConfig, Difficulty, GameAction};

#[derive(Parser, Debug)]
#[command(name = "tui-mines", about = "Minesweeper in the terminal", version)]
struct Cli {
    /// Board preset: easy (8x8, 10), medium (16x16, 40) or hard (30x16, 99)
    #[arg(
        long,
        env = "MINES_DIFFICULTY",
        default_value = "medium",
        value_parser = parse_difficulty
    )]
    difficulty: Difficulty,

    /// Custom board width (requires --height and --mines)
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<u16>,

    /// Custom board height (requires --width and --mines)
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<u16>,

    /// Custom mine count (requires --width and --height)
    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<u32>,

    /// Seed for mine placement (random when omitted)
    #[arg(long, env = "MINES_SEED")]
    seed: Option<u64>,

    /// Write logs to this file; nothing is logged otherwise
    #[arg(long, env = "MINES_LOG_FILE", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn board_config(&self) -> BoardConfig {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => BoardConfig::new(width, height, mines),
            _ => self.difficulty.config(),
        }
    }

    /// Preset name for logging, `custom` when explicit dimensions are given.
    fn board_name(&self) -> &'static str {
        if self.width.is_some() && self.height.is_some() && self.mines.is_some() {
            "custom"
        } else {
            self.difficulty.as_str()
        }
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s)
        .ok_or_else(|| format!("unknown difficulty `{s}`, expected easy, medium or hard"))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    // Stderr shares the screen with the game, so logs only ever go to a file.
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.board_config();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let game = GameState::new(config.width, config.height, config.mines, seed).with_context(|| {
        format!(
            "cannot start a {}x{} game with {} mines",
            config.width, config.height, config.mines
        )
    })?;
    tracing::info!(
        board = cli.board_name(),
        width = config.width,
        height = config.height,
        mines = config.mines,
        seed,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let (tx, rx) = mpsc::channel::<InputEvent>();
    let listener = spawn_listener(tx)?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let (mut cols, mut rows) = crossterm::terminal::size().unwrap_or((80, 24));

    game.snapshot_into(&mut snap);
    view.render_into(&snap, Viewport::new(cols, rows), &mut fb);
    term.draw(&fb)?;

    // Blocks until the next action; ends on quit or when the listener goes away.
    while let Ok(event) = rx.recv() {
        match event {
            InputEvent::Action(GameAction::Quit) => break,
            InputEvent::Action(action) => {
                let was_over = game.game_over();
                if !game.apply_action(action) {
                    continue;
                }
                if !was_over && game.game_over() {
                    tracing::info!(
                        outcome = game.outcome().as_str(),
                        revealed = game.revealed_count(),
                        "game finished"
                    );
                }
            }
            InputEvent::Resize(w, h) => {
                cols = w;
                rows = h;
                term.invalidate();
            }
        }

        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(cols, rows), &mut fb);
        term.draw(&fb)?;
    }

    listener
        .join()
        .map_err(|_| anyhow!("input thread panicked"))?
}

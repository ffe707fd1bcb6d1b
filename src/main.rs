//! Terminal chess against the alpha-beta engine
//!
//! Reads commands from stdin on a helper thread and multiplexes them with a
//! frame ticker, so the AI search never blocks input handling.

use anyhow::Context;
use chess_engine::{Color, Game};
use chess_masters::game::{AIDifficulty, ChessAIResource, GameMode, GameSession, Reply};
use chess_masters::ui;
use clap::{Parser, ValueEnum};
use crossbeam_channel::{never, select, tick, unbounded, Receiver};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "chess_masters", version, about = "Play chess against a minimax engine")]
struct Args {
    /// AI strength
    #[arg(long, value_enum, default_value_t = AIDifficulty::Medium)]
    difficulty: AIDifficulty,

    /// Fixed search depth in plies (overrides --difficulty)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    depth: Option<u8>,

    /// Side the AI plays
    #[arg(long, value_enum, default_value_t = SideArg::Black)]
    ai_color: SideArg,

    /// Two humans, no AI
    #[arg(long, conflicts_with = "self_play")]
    two_player: bool,

    /// AI plays both sides
    #[arg(long)]
    self_play: bool,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,
}

impl Args {
    fn ai_config(&self) -> ChessAIResource {
        let mode = if self.two_player {
            GameMode::VsHuman
        } else if self.self_play {
            GameMode::AiVsAi
        } else {
            GameMode::VsAI {
                ai_color: self.ai_color.into(),
            }
        };
        ChessAIResource {
            mode,
            difficulty: self.difficulty,
            depth_override: self.depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid --fen {fen:?}"))?,
        None => Game::new(),
    };
    let config = args.ai_config();
    let perspective = match config.mode {
        GameMode::VsAI { ai_color } => ai_color.opponent(),
        _ => Color::White,
    };

    let mut session = GameSession::new(game, config);
    println!("{}", ui::render_board(session.game().position(), perspective));
    println!("{}", ui::render_status(session.game()));
    println!("Type 'help' for commands.");

    run(&mut session, perspective)
}

fn run(session: &mut GameSession, perspective: Color) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader()?;
    let closed: Receiver<String> = never();
    let ticker = tick(FRAME);
    let mut input_open = true;
    let mut prompted = false;

    loop {
        if session.awaiting_human() && !prompted {
            print!("> ");
            std::io::stdout().flush()?;
            prompted = true;
        }

        let input = if input_open { &lines } else { &closed };
        select! {
            recv(input) -> line => match line {
                Ok(line) => {
                    prompted = false;
                    if line.trim().is_empty() {
                        continue;
                    }
                    match session.handle_line(&line) {
                        Ok(Reply::Quit) => break,
                        Ok(reply) => show_reply(session, &reply, perspective),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(_) => {
                    info!("[GAME] Input closed");
                    if !matches!(session.config().mode, GameMode::AiVsAi) {
                        break;
                    }
                    input_open = false;
                }
            },
            recv(ticker) -> _ => {
                match session.tick() {
                    Ok(Some(ai_move)) => {
                        println!();
                        println!("{}", ui::render_ai_move(&ai_move, session.ai_stats()));
                        println!("{}", ui::render_board(session.game().position(), perspective));
                        println!("{}", ui::render_status(session.game()));
                        prompted = false;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        error!(error = %err, "[AI] Search failed");
                        return Err(err.into());
                    }
                }
                if session.game().is_over()
                    && matches!(session.config().mode, GameMode::AiVsAi)
                {
                    println!("{}", ui::render_move_list(session.game()));
                    break;
                }
            }
        }
    }

    Ok(())
}

fn show_reply(session: &GameSession, reply: &Reply, perspective: Color) {
    let game = session.game();
    match reply {
        Reply::Moved(_) | Reply::Undone(_) | Reply::Reset => {
            println!("{}", ui::render_board(game.position(), perspective));
            println!("{}", ui::render_status(game));
            if !game.is_over() && !session.awaiting_human() {
                println!("AI is thinking...");
            }
        }
        Reply::Moves(moves) => println!("{}", ui::render_moves(moves)),
        Reply::Fen(fen) => println!("{fen}"),
        Reply::History(_) => println!("{}", ui::render_move_list(game)),
        Reply::Help => println!("{}", ui::HELP_TEXT),
        Reply::Quit => {}
    }
}

/// Forward stdin lines over a channel; the channel closes at EOF
fn spawn_stdin_reader() -> anyhow::Result<Receiver<String>> {
    let (sender, receiver) = unbounded();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;
    Ok(receiver)
}

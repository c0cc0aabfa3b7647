mod logging;
mod session;
pub use logging::*;
pub use session::*;

use std::io::{BufRead, Write};

use anyhow::Context;
use blokus::{Grid, Move, Okay, PlayerId, Request, Strategy};
use tracing::{debug, info};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, player: PlayerId);
    fn play_turn(&mut self, grid: Grid) -> anyhow::Result<Move>;

    fn run(&mut self) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        self.serve(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// Answers requests, one JSON line each, until the input ends, a
    /// [`Request::Bye`] arrives or the bot passes.
    fn serve<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        let mut buf = String::new();

        loop {
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the server has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            let mut done = false;
            match req {
                Request::NewGame { player } => {
                    info!("New game as {}", player);
                    self.new_game(player);
                    serde_json::to_writer(&mut output, &Okay())?;
                }
                Request::PlayTurn { board } => {
                    let grid: Grid = board.parse()?;
                    let mv = self.play_turn(grid)?;
                    serde_json::to_writer(&mut output, &mv)?;
                    // The pass token ends the session
                    done = mv.is_pass();
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
            if done {
                debug!("Passed, closing the session");
                break Ok(());
            }
        }
    }
}

/// A [`Bot`] that plays every game with the same [`Strategy`].
pub struct StrategyBot<S> {
    strategy: S,
    session: Option<Session>,
}

impl<S: Strategy> StrategyBot<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            session: None,
        }
    }
}

impl<S: Strategy> Bot for StrategyBot<S> {
    fn new_game(&mut self, player: PlayerId) {
        self.session = Some(Session::new(player));
    }

    fn play_turn(&mut self, grid: Grid) -> anyhow::Result<Move> {
        let session = self
            .session
            .as_mut()
            .context("Asked to play a turn before a new game was started")?;
        Ok(session.play_turn(grid, &mut self.strategy)?)
    }
}

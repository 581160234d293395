use std::io::{BufRead, Write};

use crate::ai::Agent;
use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{Color, GameOutcome, GameState};

use super::input::{read_choice, read_column};
use super::render::{render_board, Symbols};

/// Text-mode game between a human on `input`/`output` and a computer player.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    games_played: u64,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        ConsoleGame {
            input,
            output,
            config,
            games_played: 0,
        }
    }

    /// Red always opens; the human is Red when they move first.
    pub fn human_color(&self) -> Color {
        if self.config.game.human_first {
            Color::Red
        } else {
            Color::Yellow
        }
    }

    fn symbols(&self) -> Symbols {
        let game = &self.config.game;
        match self.human_color() {
            Color::Red => Symbols {
                red: game.human_symbol,
                yellow: game.computer_symbol,
            },
            Color::Yellow => Symbols {
                red: game.computer_symbol,
                yellow: game.human_symbol,
            },
        }
    }

    fn build_opponent(&self) -> Box<dyn Agent> {
        let seed = self
            .config
            .engine
            .seed
            .map(|seed| seed.wrapping_add(self.games_played));
        self.config
            .game
            .difficulty
            .build(self.config.engine.depth, seed)
    }

    /// Play games until the human declines another.
    pub fn run(&mut self) -> Result<(), PlayError> {
        loop {
            self.play_game()?;
            let answer = read_choice(
                &mut self.input,
                &mut self.output,
                "Play Again? [y/n]",
                &["y", "n"],
            )?;
            if answer == "n" {
                return Ok(());
            }
        }
    }

    /// Play one game to completion and return how it ended.
    pub fn play_game(&mut self) -> Result<GameOutcome, PlayError> {
        let human = self.human_color();
        let symbols = self.symbols();
        let mut opponent = self.build_opponent();
        let opponent_label = self.config.game.difficulty.label();
        let mut state = GameState::initial();

        self.print_intro(&symbols)?;
        write!(self.output, "{}", render_board(state.board(), &symbols))?;

        let outcome = loop {
            let column = if state.current_player() == human {
                read_column(&mut self.input, &mut self.output, state.board())?
            } else {
                let column = opponent.select_action(&state)?;
                writeln!(self.output, "{opponent_label} played {}.", column + 1)?;
                column
            };
            state.apply_move_mut(column)?;
            write!(self.output, "{}", render_board(state.board(), &symbols))?;

            if let Some(outcome) = state.outcome() {
                break outcome;
            }
        };

        match outcome {
            GameOutcome::Winner(color) if color == human => writeln!(self.output, "You won!")?,
            GameOutcome::Winner(_) => writeln!(self.output, "{opponent_label} won!")?,
            GameOutcome::Draw => writeln!(self.output, "Board full, thus draw!")?,
        }
        tracing::info!(?outcome, difficulty = ?self.config.game.difficulty, "game finished");

        self.games_played += 1;
        Ok(outcome)
    }

    fn print_intro(&mut self, symbols: &Symbols) -> Result<(), PlayError> {
        let human = self.human_color();
        writeln!(self.output, "Welcome to Connect 4")?;
        writeln!(
            self.output,
            "You play '{}' against the {} playing '{}'.",
            symbols.for_color(human),
            self.config.game.difficulty.label(),
            symbols.for_color(human.other()),
        )?;
        if self.config.game.human_first {
            writeln!(self.output, "You move first.")?;
        } else {
            writeln!(self.output, "The computer moves first.")?;
        }
        writeln!(
            self.output,
            "Type the number of the column you want to drop your counter in."
        )?;
        writeln!(
            self.output,
            "Connect 4 counters in a row - vertically, horizontally or diagonally - to win."
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

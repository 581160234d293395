use crate::ai::Agent;
use crate::config::AppConfig;
use crate::game::{Color, GameOutcome, GameState, MoveError, CENTER_COL, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    opponent: Box<dyn Agent>,
    human: Color,
    games_started: u64,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let human = if config.game.human_first {
            Color::Red
        } else {
            Color::Yellow
        };
        let opponent = config
            .game
            .difficulty
            .build(config.engine.depth, config.engine.seed);
        let mut app = App {
            config,
            game_state: GameState::initial(),
            opponent,
            human,
            games_started: 1,
            selected_column: CENTER_COL, // Start in middle
            should_quit: false,
            message: None,
        };
        app.computer_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as usize) - ('1' as usize);
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        let seed = self
            .config
            .engine
            .seed
            .map(|seed| seed.wrapping_add(self.games_started));
        self.opponent = self
            .config
            .game
            .difficulty
            .build(self.config.engine.depth, seed);
        self.games_started += 1;
        self.game_state = GameState::initial();
        self.selected_column = CENTER_COL;
        self.message = Some("New game started!".to_string());
        self.computer_turn();
    }

    /// Drop the human's piece in the selected column, then let the computer reply.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                if !self.announce_outcome() {
                    self.computer_turn();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Play the computer's move if it is its turn.
    fn computer_turn(&mut self) {
        if self.game_state.is_terminal() || self.game_state.current_player() == self.human {
            return;
        }

        let played = self
            .opponent
            .select_action(&self.game_state)
            .map_err(|e| e.to_string())
            .and_then(|column| {
                self.game_state
                    .apply_move_mut(column)
                    .map(|()| column)
                    .map_err(|e| e.to_string())
            });

        match played {
            Ok(column) => {
                if !self.announce_outcome() {
                    self.message = Some(format!(
                        "{} played {}.",
                        self.config.game.difficulty.label(),
                        column + 1
                    ));
                }
            }
            Err(err) => {
                tracing::error!(%err, "computer move failed");
                self.message = Some(format!("Computer move failed: {err}"));
            }
        }
    }

    /// Set the end-of-game message; returns whether the game is over.
    fn announce_outcome(&mut self) -> bool {
        let Some(outcome) = self.game_state.outcome() else {
            return false;
        };
        self.message = Some(match outcome {
            GameOutcome::Winner(color) if color == self.human => "You win!".to_string(),
            GameOutcome::Winner(_) => {
                format!("{} wins!", self.config.game.difficulty.label())
            }
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
        true
    }

    fn mode_label(&self) -> String {
        format!(
            "You: {}  vs  {} (depth {})",
            self.human.name(),
            self.config.game.difficulty.label(),
            self.config.engine.depth
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::game::{Cell, ROWS};

    fn config(human_first: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.engine.depth = 4;
        config.engine.seed = Some(5);
        config.game.difficulty = Difficulty::Hard;
        config.game.human_first = human_first;
        config
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn human_move_gets_a_reply() {
        let mut app = App::new(config(true));
        assert_eq!(app.game_state().board().piece_count(), 0);

        press(&mut app, KeyCode::Enter);
        let board = app.game_state().board();
        assert_eq!(board.get(ROWS - 1, CENTER_COL), Cell::Red);
        assert_eq!(board.piece_count(), 2);
        assert_eq!(app.game_state().current_player(), Color::Red);
        assert!(app.message().unwrap().starts_with("Hard AI played"));
    }

    #[test]
    fn computer_opens_when_human_second() {
        let app = App::new(config(false));
        let board = app.game_state().board();
        assert_eq!(board.piece_count(), 1);
        assert_eq!(board.get(ROWS - 1, CENTER_COL), Cell::Red);
        assert_eq!(app.game_state().current_player(), Color::Yellow);
    }

    #[test]
    fn arrows_move_selection_within_bounds() {
        let mut app = App::new(config(true));
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn digit_keys_drop_directly() {
        let mut app = App::new(config(true));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game_state().board().get(ROWS - 1, 0), Cell::Red);
    }

    #[test]
    fn full_column_is_reported() {
        let mut app = App::new(config(true));
        app.selected_column = 0;
        let mut guard = 0;
        while !app.game_state().board().is_column_full(0) && !app.game_state().is_terminal() {
            press(&mut app, KeyCode::Enter);
            guard += 1;
            assert!(guard <= ROWS);
        }
        if !app.game_state().is_terminal() {
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.message(), Some("Column is full!"));
        }
    }

    #[test]
    fn restart_clears_board() {
        let mut app = App::new(config(true));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().board().piece_count(), 0);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(config(true));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

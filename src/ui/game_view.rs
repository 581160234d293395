use crate::game::{self, Board, Cell, GameOutcome, GameState, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(color: game::Color) -> Color {
    match color {
        game::Color::Red => Color::Red,
        game::Color::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(winner)) => (
            format!("{} wins  |  {}", winner.name(), game_mode),
            piece_color(winner),
        ),
        Some(GameOutcome::Draw) => (format!("Draw  |  {}", game_mode), Color::White),
        None => {
            let mover = game_state.current_player();
            (
                format!(
                    "Move {}  |  {} to play  |  {}",
                    game_state.board().piece_count() + 1,
                    mover.name(),
                    game_mode
                ),
                piece_color(mover),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Cell symbol, with a dim preview where the next piece in the selected
/// column would land.
fn cell_span(board: &Board, row: usize, col: usize, preview: Option<(usize, game::Color)>) -> Span<'static> {
    match board.get(row, col) {
        Cell::Red => Span::styled(" ● ", Style::default().fg(Color::Red)),
        Cell::Yellow => Span::styled(" ● ", Style::default().fg(Color::Yellow)),
        Cell::Empty => match preview {
            Some((preview_row, mover)) if preview_row == row => Span::styled(
                " ○ ",
                Style::default().fg(piece_color(mover)).add_modifier(Modifier::DIM),
            ),
            _ => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        },
    }
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let playing = !game_state.is_terminal();
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers, selected one highlighted
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column && playing {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let preview = (playing && col == selected_column)
                .then(|| board.landing_row(col))
                .flatten()
                .map(|landing| (landing, game_state.current_player()));
            row_spans.push(cell_span(board, row, col, preview));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && playing {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter/Space: Drop  |  1-7: Drop in column");
    let line2 = Line::from(vec![
        Span::styled("R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Restart   "),
        Span::styled("Q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Quit"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

use crate::game::{GameState, GameStatus, Grid, PlayerColor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal color used to draw a player's pieces.
pub fn piece_color(player: &PlayerColor) -> Color {
    match *player {
        PlayerColor::Red => Color::Red,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
        PlayerColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState<PlayerColor>,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = u16::try_from(game_state.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),        // Message
            Constraint::Length(3),        // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState<PlayerColor>, area: Rect) {
    let (status, color) = match game_state.status() {
        GameStatus::Active => {
            let current = game_state.current_player();
            (format!("Current Player: {current}"), piece_color(current))
        }
        GameStatus::Won(winner) => (format!("Game Over  |  {winner} wins"), piece_color(winner)),
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

/// Build the board lines: column numbers, framed grid, selection marker.
/// Full columns have their number dimmed.
pub fn board_lines(
    game_state: &GameState<PlayerColor>,
    selected_column: usize,
) -> Vec<Line<'static>> {
    let grid: &Grid<PlayerColor> = game_state.grid();
    let width = grid.width();
    let mut lines = Vec::with_capacity(grid.height() + 4);

    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if game_state.is_column_full(col) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let border = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in grid.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for cell in row {
            row_spans.push(match cell {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => Span::styled(" ● ", Style::default().fg(piece_color(player))),
            });
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState<PlayerColor>,
    selected_column: usize,
    area: Rect,
) {
    let board_widget =
        Paragraph::new(board_lines(game_state, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

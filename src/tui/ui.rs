//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{GameStatus, Player};
use crate::renderer::{BoardView, Theme};
use strum::IntoEnumIterator;

const RESET_LABEL: &str = "Reset game";
const RESET_WIDTH: u16 = 20;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Turn / winner / draw line.
    pub status: Rect,
    /// Running scores.
    pub scoreboard: Rect,
    /// Board including its border.
    pub board: Rect,
    /// Board drawing area inside the border.
    pub board_inner: Rect,
    /// Key hints or the reset button.
    pub controls: Rect,
    /// Reset button, present only once the game is over.
    pub reset_button: Option<Rect>,
}

/// Splits `area` into the screen regions.
///
/// The board is kept twice as wide as tall in terminal cells so it looks
/// square on typical fonts.
pub fn layout(area: Rect, game_over: bool) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Scoreboard
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let region = chunks[2];
    let height = region.height.min(region.width / 2);
    let board = center_rect(region, height.saturating_mul(2), height);
    let board_inner = board.inner(Margin::new(1, 1));

    let controls = chunks[3];
    let reset_button = game_over.then(|| center_rect(controls, RESET_WIDTH, 3));

    UiLayout {
        status: chunks[0],
        scoreboard: chunks[1],
        board,
        board_inner,
        controls,
        reset_button,
    }
}

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let regions = layout(frame.area(), game.is_over());
    let theme = app.theme();

    draw_status(frame, regions.status, game.status(), game.current_player(), &theme);
    draw_scoreboard(frame, regions.scoreboard, app, &theme);

    let view = BoardView {
        board: game.board(),
        surface: app.surface(),
        theme,
        animation: app.animation(),
        cursor: (!game.is_over()).then(|| app.cursor()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(view.canvas(block), regions.board);

    match regions.reset_button {
        Some(button) => draw_reset_button(frame, button),
        None => draw_hints(frame, regions.controls),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &GameStatus, to_move: Player, theme: &Theme) {
    let line = match status {
        GameStatus::InProgress => Line::from(vec![
            Span::raw("Turn: "),
            player_span(to_move, theme),
        ]),
        GameStatus::Won { winner, .. } => Line::from(vec![
            Span::raw("Winner: "),
            player_span(*winner, theme),
        ]),
        GameStatus::Draw => Line::from("Draw"),
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Toe")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let scores = app.game().scores();
    let mut spans: Vec<Span> = Player::iter()
        .flat_map(|player| {
            [
                player_span(player, theme),
                Span::raw(format!(": {}   ", scores.wins(player))),
            ]
        })
        .collect();
    spans.push(Span::styled("Draws", Style::default().fg(Color::Gray)));
    spans.push(Span::raw(format!(": {}", scores.draws())));
    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_reset_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new(RESET_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new("Click a cell or press 1-9 | arrows + Enter | q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, area);
}

fn player_span(player: Player, theme: &Theme) -> Span<'static> {
    Span::styled(
        player.to_string(),
        Style::default()
            .fg(theme.mark(player))
            .add_modifier(Modifier::BOLD),
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Coord;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_layout_keeps_board_inside_area() {
        let area = Rect::new(0, 0, 60, 30);
        let regions = layout(area, false);
        assert!(area.contains(regions.board.as_position()));
        assert_eq!(regions.board.width, regions.board.height * 2);
        assert!(regions.reset_button.is_none());
        assert!(layout(area, true).reset_button.is_some());
    }

    #[test]
    fn test_layout_survives_tiny_terminal() {
        let regions = layout(Rect::new(0, 0, 4, 4), true);
        assert!(regions.board_inner.width <= 4);
    }

    #[test]
    fn test_in_progress_screen() {
        let text = render(&App::default());
        assert!(text.contains("Turn: X"));
        assert!(text.contains("Draws: 0"));
        assert!(!text.contains(RESET_LABEL));
    }

    #[test]
    fn test_finished_screen_shows_reset() {
        let mut app = App::default();
        let area = Rect::new(0, 0, 60, 30);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            app.handle(Action::Play(Coord::new(row, col)), area);
        }
        let text = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains(RESET_LABEL));
    }

    #[test]
    fn test_scoreboard_lists_every_player() {
        let mut app = App::default();
        let area = Rect::new(0, 0, 60, 30);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            app.handle(Action::Play(Coord::new(row, col)), area);
        }
        let text = render(&app);
        assert!(text.contains("X: 1   O: 0   Draws: 0"));
    }
}

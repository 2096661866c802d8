//! Tests for the board renderer: click mapping and the winning-line overlay.

use canvas_tictactoe::{
    Board, BoardView, Coord, GameState, LineAnimation, Surface, Theme, WinningLine,
    pointer_offset,
};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders},
};

fn render(view: BoardView<'_>) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(42, 21)).unwrap();
    terminal
        .draw(|f| {
            let block = Block::default().borders(Borders::ALL);
            f.render_widget(view.canvas(block), f.area());
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn count_fg(buffer: &Buffer, color: ratatui::style::Color) -> usize {
    buffer
        .content()
        .iter()
        .filter(|cell| cell.fg == color && cell.symbol() != " ")
        .count()
}

fn won_view<'a>(board: &'a Board, animation: &'a LineAnimation, theme: Theme) -> BoardView<'a> {
    BoardView {
        board,
        surface: Surface::default(),
        theme,
        animation: Some(animation),
        cursor: None,
    }
}

#[test]
fn test_every_terminal_cell_maps_to_expected_board_cell() {
    let surface = Surface::new(300.0);
    let area = Rect::new(3, 2, 36, 18);

    for row in area.y..area.y + area.height {
        for column in area.x..area.x + area.width {
            let offset = pointer_offset(area, &surface, column, row).unwrap();
            let coord = surface.cell_at(offset.x, offset.y).unwrap();
            assert_eq!(coord.col, usize::from((column - area.x) / 12));
            assert_eq!(coord.row, usize::from((row - area.y) / 6));
        }
    }
}

#[test]
fn test_click_then_apply_move() {
    let surface = Surface::default();
    let area = Rect::new(0, 0, 30, 15);
    let mut game = GameState::new();

    let offset = pointer_offset(area, &surface, 29, 0).unwrap();
    let coord = surface.cell_at(offset.x, offset.y).unwrap();
    assert_eq!(coord, Coord::new(0, 2));

    assert!(game.apply_move(coord.row, coord.col).is_applied());
    assert!(!game.board().is_empty(Coord::new(0, 2)));
}

#[test]
fn test_winning_line_overlay_grows_with_progress() {
    let theme = Theme::default();
    let mut game = GameState::new();
    for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        game.apply_move(r, c);
    }
    let line = game.winning_line().unwrap();
    let mut animation = LineAnimation::new(line, 0.25);

    animation.advance();
    let partial = count_fg(
        &render(won_view(game.board(), &animation, theme)),
        theme.winning_line,
    );
    while animation.advance() {}
    let full = count_fg(
        &render(won_view(game.board(), &animation, theme)),
        theme.winning_line,
    );

    assert!(partial > 0);
    assert!(full > partial);
}

#[test]
fn test_marks_drawn_in_player_colors() {
    let theme = Theme::default();
    let mut game = GameState::new();
    game.apply_move(0, 0);
    let view = BoardView {
        board: game.board(),
        surface: Surface::default(),
        theme,
        animation: None,
        cursor: None,
    };
    let buffer = render(view);
    assert!(count_fg(&buffer, theme.x) > 0);
    assert_eq!(count_fg(&buffer, theme.o), 0);
}

#[test]
fn test_empty_board_has_no_overlay() {
    let theme = Theme::default();
    let board = Board::new();
    let view = BoardView {
        board: &board,
        surface: Surface::default(),
        theme,
        animation: None,
        cursor: None,
    };
    assert_eq!(count_fg(&render(view), theme.winning_line), 0);
}

#[test]
fn test_line_point_follows_diagonal() {
    let surface = Surface::new(300.0);
    let line = WinningLine::new(Coord::new(0, 2), Coord::new(2, 0));
    let mid = surface.line_point(line, 0.5);
    assert_eq!((mid.x, mid.y), (150.0, 150.0));
}

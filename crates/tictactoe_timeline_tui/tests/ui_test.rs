//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_timeline::HistoryOrder;
use tictactoe_timeline_tui::{app::App, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::default());
    assert!(screen.contains("Tic-Tac-Toe Timeline"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Sort descending"));
}

#[test]
fn test_winner_and_moves_rendered() {
    let mut app = App::default();
    for c in ['1', '5', '2', '8', '3'] {
        app.handle_key(KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5 (row 1, col 3)"));
}

#[test]
fn test_descending_order_lists_latest_first() {
    let mut app = App::new(HistoryOrder::Descending);
    app.handle_key(KeyCode::Char('5'));
    let screen = render(&app);

    let latest = screen.find("Go to move #1").expect("move row");
    let start = screen.find("Go to game start").expect("start row");
    assert!(latest < start);
    assert!(screen.contains("Sort ascending"));
}

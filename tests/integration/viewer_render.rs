//! Rendering the environment viewer into a test terminal

use super::common::terminal::{buffer_contains, buffer_lines, create_test_terminal_sized};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use varo_fixtures::{App, EnvironmentSnapshot, StaticEnvironment, ViewerConfig};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_viewer_shows_sorted_variables_under_label() {
    let env = StaticEnvironment::new([("B", "2"), ("A", "1"), ("HOME", "/home/varo")]);
    let snapshot = EnvironmentSnapshot::capture(&env);
    let mut app = App::new(ViewerConfig::default(), &snapshot);
    let mut terminal = create_test_terminal_sized(40, 10);

    terminal.draw(|f| app.draw(f)).unwrap();

    let lines = buffer_lines(terminal.backend().buffer());
    assert_eq!(lines[0], "Environment Variables");
    assert!(lines[2].starts_with("│A=1"));
    assert!(lines[3].starts_with("│B=2"));
    assert!(lines[4].starts_with("│HOME=/home/varo"));
    assert!(lines[9].contains("3 variables"));
}

#[test]
fn test_viewer_custom_label() {
    let env = StaticEnvironment::new([("A", "1")]);
    let config = ViewerConfig {
        label: "Node Environment".into(),
        ..ViewerConfig::default()
    };
    let mut app = App::new(config, &EnvironmentSnapshot::capture(&env));
    let mut terminal = create_test_terminal_sized(40, 6);

    terminal.draw(|f| app.draw(f)).unwrap();

    assert!(buffer_contains(terminal.backend().buffer(), "Node Environment"));
}

#[test]
fn test_viewer_scrolls_with_keys() {
    let env = StaticEnvironment::new((0..30).map(|i| (format!("VAR_{i:02}"), "v")));
    let mut app = App::new(ViewerConfig::default(), &EnvironmentSnapshot::capture(&env));
    // 12 rows: label, 2 borders and a footer leave 8 text rows
    let mut terminal = create_test_terminal_sized(40, 12);
    terminal.draw(|f| app.draw(f)).unwrap();

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Down));
    terminal.draw(|f| app.draw(f)).unwrap();
    assert!(buffer_lines(terminal.backend().buffer())[2].starts_with("│VAR_02=v"));

    app.handle_event(key(KeyCode::End));
    terminal.draw(|f| app.draw(f)).unwrap();
    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines[9].starts_with("│VAR_29=v"));
    assert_eq!(app.view().scroll_offset().0, 22);

    app.handle_event(key(KeyCode::PageUp));
    assert_eq!(app.view().scroll_offset().0, 14);

    app.handle_event(key(KeyCode::Home));
    assert_eq!(app.view().scroll_offset().0, 0);
}

#[test]
fn test_viewer_window_is_bounded_by_config_size() {
    let env = StaticEnvironment::new([("A", "1")]);
    let config = ViewerConfig {
        width: 20,
        height: 6,
        ..ViewerConfig::default()
    };
    let mut app = App::new(config, &EnvironmentSnapshot::capture(&env));
    let mut terminal = create_test_terminal_sized(40, 10);

    terminal.draw(|f| app.draw(f)).unwrap();

    let lines = buffer_lines(terminal.backend().buffer());
    // 20x6 window centred in 40x10 starts at column 10, row 2
    assert!(lines[0].is_empty());
    assert!(lines[2].starts_with("          Environment"));
    assert!(lines[4].starts_with("          │A=1"));
}

#[test]
fn test_viewer_closes_on_escape() {
    let snapshot = EnvironmentSnapshot::capture(&StaticEnvironment::default());
    let mut app = App::new(ViewerConfig::default(), &snapshot);

    app.handle_event(key(KeyCode::Esc));

    assert!(app.should_quit());
}

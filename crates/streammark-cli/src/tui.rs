use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    time::{Duration, Instant},
};

use crate::editor::Editor;

/// Polling interval when no simulation is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press asks the main loop to do.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// Runs the two-pane live preview until the user quits.
pub fn run(sample: String, interval: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor = Editor::new();
    let res = run_app(&mut terminal, &mut editor, &sample, interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    editor: &mut Editor,
    sample: &str,
    interval: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui(f, editor))?;

        let timeout = if editor.is_simulating() {
            interval.saturating_sub(last_tick.elapsed())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(editor, key, sample) == Action::Quit
        {
            return Ok(());
        }

        if editor.is_simulating() && last_tick.elapsed() >= interval {
            editor.tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(editor: &mut Editor, key: KeyEvent, sample: &str) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('s') if ctrl => editor.toggle_simulation(sample),
        KeyCode::Char('l') if ctrl => editor.clear(),
        KeyCode::Char(c) if !ctrl => editor.insert(c),
        KeyCode::Enter => editor.insert('\n'),
        KeyCode::Tab => editor.insert('\t'),
        KeyCode::Backspace => editor.backspace(),
        _ => {}
    }
    Action::Continue
}

fn ui(f: &mut Frame, editor: &Editor) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    f.render_widget(pane("Markdown", editor.input(), panes[0]), panes[0]);
    f.render_widget(pane("HTML", editor.html(), panes[1]), panes[1]);

    let status = if editor.is_simulating() {
        Span::styled("streaming... ", Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };
    let help = Line::from(vec![
        status,
        Span::raw("Ctrl-S: Simulate stream | "),
        Span::raw("Ctrl-L: Clear | "),
        Span::raw("Esc: Quit"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

/// A bordered pane scrolled so the end of `text` stays visible.
fn pane<'a>(title: &'a str, text: &'a str, area: Rect) -> Paragraph<'a> {
    let lines: Vec<Line> = text.split('\n').map(Line::from).collect();
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = u16::try_from(lines.len().saturating_sub(visible)).unwrap_or(u16::MAX);
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(editor: &mut Editor, code: KeyCode, modifiers: KeyModifiers) -> Action {
        handle_key(editor, KeyEvent::new(code, modifiers), "# s")
    }

    #[test]
    fn typing_keys_edit_the_buffer() {
        let mut editor = Editor::new();
        for c in "# a".chars() {
            press(&mut editor, KeyCode::Char(c), KeyModifiers::NONE);
        }
        press(&mut editor, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut editor, KeyCode::Char('B'), KeyModifiers::SHIFT);
        press(&mut editor, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(editor.input(), "# a\n");
    }

    #[test]
    fn control_keys() {
        let mut editor = Editor::new();
        press(&mut editor, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(
            press(&mut editor, KeyCode::Char('s'), KeyModifiers::CONTROL),
            Action::Continue
        );
        assert!(editor.is_simulating());
        assert_eq!(editor.input(), "");

        press(&mut editor, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert!(!editor.is_simulating());

        assert_eq!(
            press(&mut editor, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        );
        assert_eq!(
            press(&mut editor, KeyCode::Esc, KeyModifiers::NONE),
            Action::Quit
        );
    }
}

//! TUI rendering with ratatui
//!
//! Guess grid, keyboard, messages and the share panel.

use super::app::{App, MessageStyle};
use crate::core::LetterVerdict;
use crate::game::{MAX_GUESSES, StateStore};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: StateStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Grid
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(5),                         // Messages / share
            Constraint::Length(1),                      // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    render_messages(f, app, bottom[0]);
    render_share(f, app, bottom[1]);

    render_status(f, app, chunks[4]);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    match verdict {
        LetterVerdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterVerdict::Unknown => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("LESBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let length = game.word_length();
    let blank = Style::default().fg(Color::DarkGray);
    let typed = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = game
        .guesses()
        .iter()
        .map(|record| {
            Line::from(
                record
                    .word()
                    .chars()
                    .zip(record.letters())
                    .map(|(c, &v)| tile(c, verdict_style(v)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if !game.is_complete() {
        let pending: Vec<char> = app.session.pending().chars().collect();
        let row = (0..length)
            .map(|i| pending.get(i).map_or_else(|| tile('·', blank), |&c| tile(c, typed)))
            .collect::<Vec<_>>();
        lines.push(Line::from(row));
    }

    while lines.len() < MAX_GUESSES {
        lines.push(Line::from(
            (0..length).map(|_| tile('·', blank)).collect::<Vec<_>>(),
        ));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Day #{} ", game.day()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let knowledge = app.session.game().knowledge();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| tile(c, verdict_style(knowledge.get(c))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_share<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let text = if game.is_complete() {
        game.share_summary()
    } else {
        String::new()
    };

    let share = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(share, area);
}

fn render_status<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let help = if game.is_complete() {
        "q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let status = Paragraph::new(format!(
        "v{} #{} | {}/{} | {help}",
        env!("CARGO_PKG_VERSION"),
        game.day(),
        game.guesses().len(),
        MAX_GUESSES
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MemoryStore;
    use crate::session::Session;
    use crate::wordlists::WordData;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn app() -> App<MemoryStore> {
        let data = WordData::new(
            ["crane", "trace"].map(String::from).to_vec(),
            vec!["crane".to_string()],
        );
        App::new(Session::start(0, data, MemoryStore::new()).unwrap())
    }

    #[test]
    fn draws_header_and_day() {
        let text = screen(&app());
        assert!(text.contains("LESBLE"));
        assert!(text.contains("Day #0"));
    }

    #[test]
    fn draws_guessed_letters() {
        let mut app = app();
        app.session.submit("trace").unwrap();

        let text = screen(&app);
        assert!(text.contains(" T  R  A  C  E "));
    }
}

/// Best-effort diagnostic screen: render the failure text on the terminal
/// long enough to read instead of dying into a restored shell prompt.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const GRACE: Duration = Duration::from_secs(10);

pub fn show_failure_screen(err: &anyhow::Error) {
    // Errors while showing the error are swallowed; there is nothing left
    // to report them to.
    let _ = try_show(err);
}

fn try_show(err: &anyhow::Error) -> Result<()> {
    let mut terminal = ratatui::init();
    let deadline = Instant::now() + GRACE;
    let text = format!(
        "Ошибка исполнения:\n\n{err:#}\n\nЛюбая клавиша закрывает окно; иначе оно закроется само."
    );

    while Instant::now() < deadline {
        terminal.draw(|frame| {
            frame.render_widget(
                Paragraph::new(text.as_str())
                    .style(Style::default().fg(Color::LightRed))
                    .wrap(Wrap { trim: false })
                    .block(Block::default().borders(Borders::ALL).title(" СБОЙ ")),
                frame.area(),
            );
        })?;
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(_) = event::read()? {
                break;
            }
        }
    }
    ratatui::restore();
    Ok(())
}

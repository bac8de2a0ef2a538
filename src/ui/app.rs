/// The frame loop: poll input, feed the round engine, draw. One logical
/// thread, strict request/response; the loop paces itself by polling with a
/// ~16 ms timeout.
use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::core::round::{Round, MAX_MISTAKES};
use crate::core::words::Category;
use crate::ui::layout::ScreenLayout;
use crate::ui::{keyboard, view};

const FRAME_POLL: Duration = Duration::from_millis(16);

pub struct App {
    round: Round,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    pub fn new(now: Instant) -> Self {
        Self {
            round: Round::new(Category::ALL[0], None, now),
            layout: ScreenLayout::default(),
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        execute!(stdout(), EnableMouseCapture)?;
        let result = self.event_loop(&mut terminal);
        // Mouse capture must come off even when the loop failed.
        let restore = execute!(stdout(), DisableMouseCapture);
        result.and(restore.map_err(Into::into))
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.round.tick(Instant::now());

            let size = terminal.size()?;
            self.layout = ScreenLayout::compute(Rect::new(0, 0, size.width, size.height));
            terminal.draw(|frame| view::render(frame, &self.round, &self.layout))?;

            if event::poll(FRAME_POLL)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(key),
                    Event::Mouse(mouse) => self.on_mouse(mouse),
                    // Resize is picked up by the per-frame layout pass.
                    _ => {}
                }
            }
        }
        info!("normal quit");
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char(ch) => self.round.guess(ch),
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        let over = self.round.is_over();

        if self.layout.btn_category.contains(pos) {
            if !over {
                self.change_category();
            }
        } else if self.layout.btn_hint.contains(pos) {
            if !over && self.round.mistakes < MAX_MISTAKES {
                self.round.reveal_hint();
            }
        } else if self.layout.btn_again.contains(pos) {
            self.play_again();
        } else if self.layout.btn_eyo.contains(pos) {
            self.round.toggle_equivalence();
        } else if !over {
            if let Some(letter) = keyboard::key_at(&self.layout.keys, pos) {
                self.round.guess(letter);
            }
        }
    }

    /// "Сыграть ещё": same category, fresh word, equivalence carried over.
    fn play_again(&mut self) {
        self.round = Round::new(
            self.round.category,
            Some(self.round.eyo_equivalence),
            Instant::now(),
        );
    }

    /// Cycle to the next category and start over. Only reachable while the
    /// round is still active.
    fn change_category(&mut self) {
        self.round = Round::new(
            self.round.category.next(),
            Some(self.round.eyo_equivalence),
            Instant::now(),
        );
    }
}

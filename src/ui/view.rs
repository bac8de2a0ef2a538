/// Draws the whole screen from the current round state: left panel with the
/// gallows and stats, right panel with the word, the on-screen keyboard and
/// the control buttons, plus the end-of-round overlay.
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::round::{Round, MAX_MISTAKES};
use crate::ui::gallows;
use crate::ui::layout::ScreenLayout;
use crate::ui::text::ellipsize;

const ACCENT: Color = Color::Cyan;
const GOOD: Color = Color::Green;
const BAD: Color = Color::Red;
const MUTED: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, round: &Round, layout: &ScreenLayout) {
    render_left_panel(frame, round, layout.left);
    render_right_panel(frame, round, layout);
    if round.is_over() {
        render_overlay(frame, round, layout.right);
    }
}

fn render_left_panel(frame: &mut Frame, round: &Round, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" ВИСЕЛИЦА ");
    let inner = block.inner(area).inner(Margin::new(2, 0));
    frame.render_widget(block, area);

    let [gallows_area, stats] =
        Layout::vertical([Constraint::Length(9), Constraint::Min(4)]).areas(inner);

    frame.render_widget(
        Paragraph::new(gallows::stage(round.mistakes)).style(Style::default().fg(MUTED)),
        gallows_area,
    );

    let time_color = if round.remaining_seconds > 20 {
        GOOD
    } else if round.remaining_seconds <= 10 {
        BAD
    } else {
        ACCENT
    };
    let wrong = round.wrong_letters();
    let wrong_line = if wrong.is_empty() {
        "—".to_string()
    } else {
        wrong
            .iter()
            .map(|ch| ch.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let lines = vec![
        Line::from(format!("Ошибок: {} / {}", round.mistakes, MAX_MISTAKES)),
        Line::from(Span::styled(
            format!("Время: {:02} сек", round.remaining_seconds),
            Style::default().fg(time_color),
        )),
        Line::raw(""),
        Line::from(Span::styled("Неверные:", Style::default().fg(MUTED))),
        Line::from(Span::styled(wrong_line, Style::default().fg(BAD))),
    ];
    frame.render_widget(Paragraph::new(lines), stats);
}

fn render_right_panel(frame: &mut Frame, round: &Round, layout: &ScreenLayout) {
    frame.render_widget(Block::default().borders(Borders::ALL), layout.right);

    let cat_label = format!("Категория: {}", round.category.label());
    frame.render_widget(
        Paragraph::new(ellipsize(
            &cat_label,
            layout.category_line.width as usize,
        ))
        .style(Style::default().fg(MUTED)),
        layout.category_line,
    );

    button(
        frame,
        layout.btn_category,
        "Сменить категорию",
        Style::default(),
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Угадайте слово:",
                Style::default().fg(MUTED),
            )),
            Line::from(Span::styled(
                masked_word(round),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ]),
        layout.word_line,
    );

    let tip = "Кликайте по клавишам или печатайте с физической клавиатуры";
    frame.render_widget(
        Paragraph::new(ellipsize(tip, layout.instruction.width as usize))
            .style(Style::default().fg(MUTED)),
        layout.instruction,
    );

    render_keyboard(frame, round, layout);

    let hint_active = !round.is_over() && round.mistakes < MAX_MISTAKES;
    button(
        frame,
        layout.btn_hint,
        "Подсказка (-1 жизнь)",
        Style::default().fg(if hint_active { ACCENT } else { MUTED }),
    );
    button(
        frame,
        layout.btn_again,
        "Сыграть ещё",
        Style::default().fg(ACCENT),
    );
    let eyo_label = if round.eyo_equivalence {
        "Е=Ё: ВКЛ"
    } else {
        "Е=Ё: ВЫКЛ"
    };
    button(
        frame,
        layout.btn_eyo,
        eyo_label,
        Style::default().fg(if round.eyo_equivalence { GOOD } else { MUTED }),
    );
}

fn render_keyboard(frame: &mut Frame, round: &Round, layout: &ScreenLayout) {
    for key in &layout.keys {
        let used = round.used.contains(key.letter);
        let style = if used {
            Style::default().fg(MUTED)
        } else {
            Style::default()
        };
        let label = Paragraph::new(key.letter.to_string())
            .alignment(Alignment::Center)
            .style(style);
        if key.rect.height >= 3 {
            frame.render_widget(
                label.block(Block::default().borders(Borders::ALL).border_style(style)),
                key.rect,
            );
        } else {
            frame.render_widget(label, key.rect);
        }
    }
}

fn render_overlay(frame: &mut Frame, round: &Round, panel: Rect) {
    let width = panel.width.saturating_sub(8).max(20).min(panel.width);
    let area = Rect {
        x: panel.x + (panel.width.saturating_sub(width)) / 2,
        y: panel.y + panel.height.saturating_mul(2) / 3,
        width,
        height: 4,
    }
    .intersection(panel);
    if area.is_empty() {
        return;
    }
    let (msg, color) = if round.won {
        ("Победа! Слово:", GOOD)
    } else {
        ("Поражение. Слово:", BAD)
    };
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(msg, Style::default().fg(color))),
            Line::from(Span::styled(
                round.word(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Masked word: guessed letters shown, hidden ones as bullets.
fn masked_word(round: &Round) -> String {
    let mut out = String::new();
    for ch in round.word().chars() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(if round.is_letter_shown(ch) { ch } else { '•' });
    }
    out
}

fn button(frame: &mut Frame, rect: Rect, label: &str, style: Style) {
    if rect.is_empty() {
        return;
    }
    let fitted = ellipsize(label, rect.width.saturating_sub(2) as usize);
    frame.render_widget(
        Paragraph::new(fitted)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::words::Category;
    use std::time::Instant;

    #[test]
    fn masked_word_hides_unguessed_letters() {
        let mut r = Round::from_word(Category::Space, "РАКЕТА", Some(true), Instant::now());
        assert_eq!(masked_word(&r), "• • • • • •");
        r.guess('А');
        assert_eq!(masked_word(&r), "• А • • • А");
    }

    #[test]
    fn masked_word_respects_equivalence() {
        let mut r = Round::from_word(Category::YoWords, "ЁЛКА", Some(true), Instant::now());
        r.guess('Е');
        assert_eq!(masked_word(&r), "Ё • • •");
    }

    #[test]
    fn toggling_equivalence_on_reveals_the_paired_letter() {
        // Guessed with the rule off, Е is recorded alone; turning the rule
        // on makes the Ё in the word count as shown.
        let mut r = Round::from_word(Category::YoWords, "БЕРЁЗА", Some(false), Instant::now());
        r.guess('Е');
        assert_eq!(masked_word(&r), "• Е • • • •");
        r.toggle_equivalence();
        assert_eq!(masked_word(&r), "• Е • Ё • •");
    }
}

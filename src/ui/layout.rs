/// Responsive screen layout: every rect the renderer draws into and the
/// pointer hit-testing uses. Recomputed from the frame area each frame, so
/// a terminal resize just takes effect on the next draw.
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::ui::keyboard::{build_keyboard, Key};

#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub left: Rect,
    pub right: Rect,
    pub category_line: Rect,
    pub btn_category: Rect,
    pub word_line: Rect,
    pub instruction: Rect,
    pub keyboard_area: Rect,
    pub btn_hint: Rect,
    pub btn_again: Rect,
    pub btn_eyo: Rect,
    pub keys: Vec<Key>,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);

        // Right panel body, inside the panel border.
        let body = right.inner(Margin::new(2, 1));
        let [category_line, btn_category, word_line, instruction, keyboard_area, button_row] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .areas(body);

        let btn_category = Rect {
            width: btn_category.width.min(26),
            ..btn_category
        };

        let [btn_hint, btn_again, btn_eyo] = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(32),
            Constraint::Percentage(28),
        ])
        .areas(button_row);

        Self {
            left,
            right,
            category_line,
            btn_category,
            word_line,
            instruction,
            keyboard_area,
            btn_hint,
            btn_again,
            btn_eyo,
            keys: build_keyboard(keyboard_area),
        }
    }
}

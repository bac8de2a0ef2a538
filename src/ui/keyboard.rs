/// On-screen keyboard: three ЙЦУКЕН rows of clickable key rects laid out
/// inside the keyboard area of the right panel.
use ratatui::layout::{Position, Rect};

use crate::core::alphabet::KEYBOARD_ROWS;

#[derive(Debug, Clone, Copy)]
pub struct Key {
    pub letter: char,
    pub rect: Rect,
}

/// Fit the three rows into `area`. Key height grows to bordered keys (3
/// rows) when there is room; width per key comes from the row's column
/// count, so the shorter rows get slightly wider keys.
pub fn build_keyboard(area: Rect) -> Vec<Key> {
    let rows = KEYBOARD_ROWS.len() as u16;
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }
    let key_h = (area.height / rows).clamp(1, 3);

    let mut keys = Vec::new();
    let mut y = area.y;
    for row in KEYBOARD_ROWS {
        let cols = row.chars().count() as u16;
        let key_w = (area.width / cols).max(3);
        let mut x = area.x;
        for letter in row.chars() {
            let w = key_w.min(area.right().saturating_sub(x));
            if w == 0 {
                break;
            }
            keys.push(Key {
                letter,
                rect: Rect::new(x, y, w, key_h),
            });
            x += key_w;
        }
        y += key_h;
    }
    keys
}

/// Letter under a pointer position, if any.
pub fn key_at(keys: &[Key], pos: Position) -> Option<char> {
    keys.iter().find(|k| k.rect.contains(pos)).map(|k| k.letter)
}

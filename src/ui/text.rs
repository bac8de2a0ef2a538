/// Cell-width text fitting for labels and panel lines.
///
/// The terminal gives us a fixed-width grid, so fitting a label is plain
/// truncation with an ellipsis rather than font shrinking.
pub fn ellipsize(text: &str, max_cells: usize) -> String {
    let len = text.chars().count();
    if len <= max_cells {
        return text.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let keep = max_cells.saturating_sub(1).max(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

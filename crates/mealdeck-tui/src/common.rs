//! Small shared render helpers.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Centers a `width` x `height` box inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Truncates a string to a display width, appending "..." when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthStr::width(ch.encode_utf8(&mut [0u8; 4]) as &str);
        if used + w > max_width.saturating_sub(ellipsis_width) {
            break;
        }
        used += w;
        out.push(ch);
    }
    format!("{}...", out.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: centering stays inside the parent area.
    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 60, 40);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);

        let inner = centered_rect(area, 10, 4);
        assert_eq!(inner.x, 5);
        assert_eq!(inner.y, 3);
    }

    /// Test: truncation preserves short strings and marks cut ones.
    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a very long grocery item", 10), "a very...");
    }
}

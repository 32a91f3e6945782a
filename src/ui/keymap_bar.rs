//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP_TEXT: &str = "←/→:prev/next | Home/End:first/last | Del:numbers | q/Esc:quit";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}

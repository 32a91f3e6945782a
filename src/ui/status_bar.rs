//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the status bar: message on the left; theme, palette and numbering
/// state on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let settings = format!(
        "{} | {} | numbers: {} ",
        app.theme.name(),
        app.palette.name(),
        if app.sequence.numbering_enabled() { "on" } else { "off" }
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(settings.width() as u16)])
        .split(area);

    f.render_widget(Paragraph::new(app.status.as_str()).style(style), chunks[0]);
    f.render_widget(Paragraph::new(settings).style(style), chunks[1]);
}

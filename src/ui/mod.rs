//! User interface rendering.

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::sequence::ui::{draw_sequence, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_number, format_tick};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Frame area, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let ctx = RenderContext {
        colors: &colors,
        palette: app.palette,
        layout: &app.layout,
    };
    draw_sequence(f, chunks[0], &app.sequence, &ctx);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ColorPalette, Theme};
    use crate::sequence::FrameSequence;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn status_bar_shows_settings() {
        let mut sequence = FrameSequence::new();
        sequence.create_frame().plot_y(&[1.0, 2.0]);
        let mut app = App::new(sequence, Theme::GruvboxLight, ColorPalette::BlueRed);

        let rows = screen(&app);
        assert!(rows[10].starts_with("1 frames loaded"), "{:?}", rows[10]);
        assert!(
            rows[10].trim_end().ends_with("Gruvbox Light | Blue-Red | numbers: off"),
            "{:?}",
            rows[10]
        );
        assert!(rows[11].contains("Home/End"));

        app.sequence.toggle_numbering();
        let rows = screen(&app);
        assert!(rows[10].trim_end().ends_with("numbers: on"), "{:?}", rows[10]);
    }
}

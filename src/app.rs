//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sequence::FrameSequence;
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Color palette for images and line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    #[value(name = "blue-red")]
    BlueRed,
}

impl ColorPalette {
    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The frames being paged through.
    pub sequence: FrameSequence,
    /// Current theme.
    pub theme: Theme,
    /// Palette for images and line series.
    pub palette: ColorPalette,
    /// Rendering layout settings.
    pub layout: LayoutConfig,
    /// Status message.
    pub status: String,
    redraw: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(sequence: FrameSequence, theme: Theme, palette: ColorPalette) -> Self {
        let status = if sequence.is_empty() {
            "No frames".to_string()
        } else {
            format!("{} frames loaded", sequence.len())
        };
        Self {
            sequence,
            theme,
            palette,
            layout: LayoutConfig::default(),
            status,
            redraw: true,
        }
    }

    /// Handle a key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return true;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return false,
            _ => {},
        }

        if let Some(action) = self.sequence.handle_key(key) {
            self.status = match self.sequence.current_frame() {
                Some(frame) => format!(
                    "{} | {}",
                    action.name(),
                    frame.title().unwrap_or_else(|| "untitled".to_string())
                ),
                None => format!("{} | no frames", action.name()),
            };
            self.redraw = true;
        }
        true
    }

    /// Whether the screen should be redrawn.
    pub fn needs_redraw(&mut self) -> bool {
        let sequence_changed = self.sequence.take_redraw_request();
        std::mem::take(&mut self.redraw) || sequence_changed
    }

    /// Force a redraw on the next check, e.g. after a terminal resize.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }
}

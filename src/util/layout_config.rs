//! Layout configuration constants for frame rendering.

/// Configuration for line plots.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
    /// Number of tick labels per axis.
    pub tick_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            tick_count: 3,
        }
    }
}

/// Configuration for image (heatmap) rendering.
#[derive(Debug, Clone)]
pub struct HeatmapLayoutConfig {
    /// Terminal characters per pixel horizontally (for aspect ratio correction).
    pub pixel_width: usize,
    /// Height reserved for colorbar.
    pub colorbar_height: u16,
    /// Width of colorbar in characters.
    pub colorbar_width: usize,
}

impl Default for HeatmapLayoutConfig {
    fn default() -> Self {
        Self {
            pixel_width: 2,
            colorbar_height: 1,
            colorbar_width: 50,
        }
    }
}

/// Configuration for grid frames.
#[derive(Debug, Clone)]
pub struct GridLayoutConfig {
    /// Rows reserved for the super-title.
    pub title_height: u16,
}

impl Default for GridLayoutConfig {
    fn default() -> Self {
        Self { title_height: 1 }
    }
}

/// Combined layout configuration for all frame kinds.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for line plots.
    pub plot: PlotLayoutConfig,
    /// Configuration for images.
    pub heatmap: HeatmapLayoutConfig,
    /// Configuration for grid frames.
    pub grid: GridLayoutConfig,
}

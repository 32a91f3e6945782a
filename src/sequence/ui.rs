//! Frame rendering - pure rendering layer.

use super::{
    Axes, AxesContent, AxesGrid, FrameContent, FrameSequence, GridSlot, GridSpacing, NumberPlacement,
};
use crate::app::ColorPalette;
use crate::ui::{format_tick, ThemeColors};
use crate::util::LayoutConfig;
use ndarray::Array2;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Everything the renderer needs besides the sequence itself.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Theme colors.
    pub colors: &'a ThemeColors,
    /// Palette for images and line series.
    pub palette: ColorPalette,
    /// Layout settings.
    pub layout: &'a LayoutConfig,
}

/// Draw the visible frame and its number label.
pub fn draw_sequence(f: &mut Frame<'_>, area: Rect, seq: &FrameSequence, ctx: &RenderContext<'_>) {
    let Some(frame) = seq.current_frame() else {
        draw_placeholder(f, area, "No frames to display", ctx.colors);
        return;
    };

    let axes_rects = match frame.content() {
        FrameContent::Single(ax) => {
            draw_axes(f, area, ax, ctx);
            vec![area]
        },
        FrameContent::Grid(grid) => draw_grid(f, area, grid, ctx),
    };

    if let Some(overlay) = seq.overlay() {
        let anchor = frame
            .anchor()
            .and_then(|i| axes_rects.get(i).copied())
            .unwrap_or(area);
        draw_number_label(f, anchor, &overlay.text, overlay.placement, ctx.colors);
    }
}

fn draw_grid(f: &mut Frame<'_>, area: Rect, grid: &AxesGrid, ctx: &RenderContext<'_>) -> Vec<Rect> {
    let mut grid_area = area;

    if let Some(title) = grid.title() {
        let title_height = ctx.layout.grid.title_height;
        if area.height > title_height {
            let [title_area, rest] =
                Layout::vertical([Constraint::Length(title_height), Constraint::Min(0)]).areas(area);
            let paragraph = Paragraph::new(title)
                .style(
                    Style::default()
                        .fg(ctx.colors.heading)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            f.render_widget(paragraph, title_area);
            grid_area = rest;
        }
    }

    if grid.is_empty() {
        draw_placeholder(f, grid_area, "Empty grid", ctx.colors);
        return Vec::new();
    }

    let slots: Vec<GridSlot> = grid.cells().iter().map(|(slot, _)| slot.clone()).collect();
    let rects = grid_rects(grid_area, grid.shape(), grid.spacing(), &slots);
    for (rect, ax) in rects.iter().zip(grid.iter()) {
        draw_axes(f, *rect, ax, ctx);
    }
    rects
}

/// Screen rectangles for grid slots, one per slot. Spans reaching past the
/// grid are clamped to its last row or column.
pub(crate) fn grid_rects(
    area: Rect,
    shape: (usize, usize),
    spacing: GridSpacing,
    slots: &[GridSlot],
) -> Vec<Rect> {
    let (rows, cols) = shape;
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows])
        .spacing(spacing.vertical)
        .split(area);
    let col_areas = Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols])
        .spacing(spacing.horizontal)
        .split(area);

    slots
        .iter()
        .map(|slot| {
            let (first_row, last_row) = span_edges(&row_areas, &slot.rows);
            let (first_col, last_col) = span_edges(&col_areas, &slot.cols);
            let (top, bottom) = (first_row.y, last_row.bottom());
            let (left, right) = (first_col.x, last_col.right());
            Rect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
        })
        .collect()
}

/// First and last areas covered by `span`. `areas` must not be empty.
fn span_edges(areas: &[Rect], span: &Range<usize>) -> (Rect, Rect) {
    let last = areas.len() - 1;
    let first = span.start.min(last);
    let end = span.end.saturating_sub(1).clamp(first, last);
    (areas[first], areas[end])
}

fn draw_axes(f: &mut Frame<'_>, area: Rect, ax: &Axes, ctx: &RenderContext<'_>) {
    let content = ax.content();
    let block = axes_block(&content, ctx.colors);

    if let Some(image) = &content.image {
        draw_image(f, area, block, image, ctx);
    } else if content.series.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        draw_placeholder(f, inner, "Nothing plotted", ctx.colors);
    } else {
        draw_lines(f, area, block, &content, ctx);
    }
}

fn axes_block<'a>(content: &AxesContent, colors: &ThemeColors) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    match &content.title {
        Some(title) => block
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(colors.heading)),
        None => block,
    }
}

fn draw_lines(
    f: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    content: &AxesContent,
    ctx: &RenderContext<'_>,
) {
    let colors = ctx.colors;

    // Non-finite points are dropped
    let data: Vec<Vec<(f64, f64)>> = content
        .series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect()
        })
        .collect();

    let Some(([x_min, x_max], [y_min, y_max])) = data_bounds(&data) else {
        let inner = block.inner(area);
        f.render_widget(block, area);
        draw_placeholder(f, inner, "No finite data to display", colors);
        return;
    };

    let [x_min, x_max] = widen(x_min, x_max, 0.0);
    let [y_min, y_max] = widen(y_min, y_max, ctx.layout.plot.y_axis_padding_factor);

    let n = data.len();
    let datasets: Vec<Dataset<'_>> = data
        .iter()
        .enumerate()
        .map(|(i, points)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(ctx.palette.series_color(i, n)))
                .data(points)
        })
        .collect();

    let ticks = ctx.layout.plot.tick_count;
    let mut x_axis = Axis::default()
        .style(Style::default().fg(colors.label))
        .bounds([x_min, x_max])
        .labels(tick_labels(x_min, x_max, ticks));
    if let Some(label) = &content.xlabel {
        x_axis = x_axis.title(label.clone());
    }

    let mut y_axis = Axis::default()
        .style(Style::default().fg(colors.label))
        .bounds([y_min, y_max])
        .labels(tick_labels(y_min, y_max, ticks));
    if let Some(label) = &content.ylabel {
        y_axis = y_axis.title(label.clone());
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Min/max over all points as `([x_min, x_max], [y_min, y_max])`.
fn data_bounds(data: &[Vec<(f64, f64)>]) -> Option<([f64; 2], [f64; 2])> {
    let mut points = data.iter().flatten();
    let &(x0, y0) = points.next()?;
    let bounds = points.fold(([x0, x0], [y0, y0]), |([xl, xh], [yl, yh]), &(x, y)| {
        ([xl.min(x), xh.max(x)], [yl.min(y), yh.max(y)])
    });
    Some(bounds)
}

/// Pad a range by `factor` of its width; degenerate ranges get a unit margin.
fn widen(min: f64, max: f64, factor: f64) -> [f64; 2] {
    let span = max - min;
    if span.abs() < 1e-12 {
        return [min - 1.0, max + 1.0];
    }
    let pad = span * factor;
    [min - pad, max + pad]
}

fn tick_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format_tick((min + max) / 2.0)],
        _ => (0..count)
            .map(|i| format_tick(min + (max - min) * i as f64 / (count - 1) as f64))
            .collect(),
    }
}

fn draw_image(
    f: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    image: &Array2<f64>,
    ctx: &RenderContext<'_>,
) {
    let colors = ctx.colors;
    let config = &ctx.layout.heatmap;

    let inner = block.inner(area);
    f.render_widget(block, area);

    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        draw_placeholder(f, inner, "Empty image", colors);
        return;
    }
    if inner.width < 4 || inner.height < 2 {
        return;
    }

    let (min_val, max_val) = image
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let range = if (max_val - min_val).abs() < 1e-10 {
        1.0
    } else {
        max_val - min_val
    };

    // Colorbar with min/max labels on the first row
    let colorbar_height = config.colorbar_height.min(inner.height - 1);
    if colorbar_height > 0 {
        let width = config.colorbar_width.min(inner.width as usize);
        let start = inner.x + ((inner.width as usize - width) / 2) as u16;
        let buf = f.buffer_mut();
        for i in 0..width {
            let t = i as f64 / width as f64;
            if let Some(cell) = buf.cell_mut((start + i as u16, inner.y)) {
                cell.set_char('█').set_fg(ctx.palette.color(t));
            }
        }

        if min_val.is_finite() {
            let min_label = format_tick(min_val);
            let max_label = format_tick(max_val);
            buf.set_string(inner.x, inner.y, &min_label, Style::default().fg(colors.label));
            let max_x = inner.right().saturating_sub(max_label.width() as u16);
            buf.set_string(max_x, inner.y, &max_label, Style::default().fg(colors.label));
        }
    }

    let heatmap = Rect {
        x: inner.x,
        y: inner.y + colorbar_height,
        width: inner.width,
        height: inner.height - colorbar_height,
    };

    // Terminal cells are about twice as tall as wide
    let pixel_width = config.pixel_width.max(1);
    let display_cols = (heatmap.width as usize / pixel_width).max(1);
    let display_rows = heatmap.height as usize;
    let row_step = (rows as f64 / display_rows as f64).max(1.0);
    let col_step = (cols as f64 / display_cols as f64).max(1.0);

    let buf = f.buffer_mut();
    for y in 0..display_rows {
        let row_idx = (y as f64 * row_step) as usize;
        if row_idx >= rows {
            break;
        }

        for px in 0..display_cols {
            let col_idx = (px as f64 * col_step) as usize;
            if col_idx >= cols {
                break;
            }

            let val = image[[row_idx, col_idx]];
            let (symbol, color) = if val.is_finite() {
                ('█', ctx.palette.color((val - min_val) / range))
            } else {
                ('?', colors.missing)
            };

            for i in 0..pixel_width {
                let x = heatmap.x + (px * pixel_width + i) as u16;
                if x >= heatmap.right() {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, heatmap.y + y as u16)) {
                    cell.set_char(symbol).set_fg(color);
                }
            }
        }
    }
}

/// Where the frame-number label goes for an anchor rectangle.
///
/// The label sits right-aligned on the anchor's top or bottom border, one
/// cell in from the corner.
pub fn number_label_rect(anchor: Rect, text: &str, placement: NumberPlacement) -> Rect {
    if anchor.is_empty() {
        return Rect::new(anchor.x, anchor.y, 0, 0);
    }
    let width = (text.width() as u16).min(anchor.width);
    let x = anchor.x + anchor.width.saturating_sub(width + 1);
    let y = match placement {
        NumberPlacement::Top => anchor.y,
        NumberPlacement::Bottom => anchor.bottom() - 1,
    };
    Rect::new(x, y, width, 1)
}

fn draw_number_label(
    f: &mut Frame<'_>,
    anchor: Rect,
    text: &str,
    placement: NumberPlacement,
    colors: &ThemeColors,
) {
    let rect = number_label_rect(anchor, text, placement);
    if rect.is_empty() {
        return;
    }
    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(colors.number_fg)
            .bg(colors.number_bg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(paragraph, rect);
}

fn draw_placeholder(f: &mut Frame<'_>, area: Rect, message: &str, colors: &ThemeColors) {
    if area.is_empty() {
        return;
    }
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, middle);
}

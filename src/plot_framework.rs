// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    CAPTION_AREA_ESTIMATE, CHART_MARGIN, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE,
    FONT_SIZE_LEGEND, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
    X_LABEL_AREA_SIZE, Y_LABEL_AREA_SIZE,
};

/// Number of chart panels in the fixed 2x2 grid.
pub const GRID_PANEL_COUNT: usize = 4;

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Everything one grid panel needs to draw itself. Panels with
/// `equal_aspect` get their ranges expanded so both axes share one
/// data-unit-per-pixel scale.
#[derive(Clone)]
pub struct PanelConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub equal_aspect: bool,
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Expands the narrower of the two ranges around its midpoint until both
/// axes map to the same data units per pixel inside a plot box of
/// `px_width` x `px_height`.
pub fn expand_to_equal_aspect(
    x_range: Range<f64>,
    y_range: Range<f64>,
    px_width: f64,
    px_height: f64,
) -> (Range<f64>, Range<f64>) {
    let x_span = x_range.end - x_range.start;
    let y_span = y_range.end - y_range.start;
    if px_width <= 0.0 || px_height <= 0.0 || x_span <= 0.0 || y_span <= 0.0 {
        return (x_range, y_range);
    }

    // Units per pixel; the coarser axis wins and the other is widened.
    let scale = (x_span / px_width).max(y_span / px_height);
    let new_x_span = scale * px_width;
    let new_y_span = scale * px_height;
    let x_mid = (x_range.start + x_range.end) / 2.0;
    let y_mid = (y_range.start + y_range.end) / 2.0;

    (
        (x_mid - new_x_span / 2.0)..(x_mid + new_x_span / 2.0),
        (y_mid - new_y_span / 2.0)..(y_mid + new_y_span / 2.0),
    )
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size, for centering.
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{panel_name} Data Unavailable: {reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = message.len() as i32 * estimated_char_width;
    let center_x = width / 2 - estimated_text_width / 2;
    let center_y = height / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Draws a single grid panel from its PanelConfig.
fn draw_single_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    config: &PanelConfig,
) -> Result<(), Box<dyn Error>> {
    // Guard degenerate spans (single-sample trajectories) before plotters
    // sees them.
    let (x_start, x_end) = if (config.x_range.end - config.x_range.start).abs() < 1e-9 {
        calculate_range(config.x_range.start, config.x_range.end)
    } else {
        (config.x_range.start, config.x_range.end)
    };
    let (y_start, y_end) = if (config.y_range.end - config.y_range.start).abs() < 1e-9 {
        calculate_range(config.y_range.start, config.y_range.end)
    } else {
        (config.y_range.start, config.y_range.end)
    };

    let (x_range, y_range) = if config.equal_aspect {
        let (area_w, area_h) = area.dim_in_pixel();
        let plot_w = (area_w as i32 - Y_LABEL_AREA_SIZE - 2 * CHART_MARGIN).max(1) as f64;
        let plot_h = (area_h as i32 - X_LABEL_AREA_SIZE - CAPTION_AREA_ESTIMATE - 2 * CHART_MARGIN)
            .max(1) as f64;
        expand_to_equal_aspect(x_start..x_end, y_start..y_end, plot_w, plot_h)
    } else {
        (x_start..x_end, y_start..y_end)
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &config.series {
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Renders the fixed 2x2 grid into one PNG. Panels are drawn row-major;
/// a `None` panel gets a placeholder message instead of aborting the image.
pub fn draw_grid_plot(
    output_file: &str,
    panels: [(&str, Option<PanelConfig>); GRID_PANEL_COUNT],
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    let sub_plot_areas = root_area.split_evenly((2, 2));

    for ((panel_name, panel), area) in panels.iter().zip(sub_plot_areas.iter()) {
        match panel {
            Some(config) => draw_single_panel(area, config)?,
            None => {
                println!("  INFO: No {panel_name} data available. Drawing placeholder.");
                draw_unavailable_message(area, panel_name, "empty trajectory")?;
            }
        }
    }

    root_area.present()?;
    println!("  Trajectory plot saved as '{output_file}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - -1.5).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_fixed_padding_for_tiny_span() {
        let (min, max) = calculate_range(2.0, 2.0);
        assert!((min - 1.5).abs() < 1e-9);
        assert!((max - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_accepts_swapped_bounds() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
    }

    #[test]
    fn test_equal_aspect_widens_narrower_axis() {
        // Square pixel box, x spans 10 units, y spans 2: y must widen to 10.
        let (x, y) = expand_to_equal_aspect(0.0..10.0, 0.0..2.0, 100.0, 100.0);
        assert!((x.end - x.start - 10.0).abs() < 1e-9);
        assert!((y.end - y.start - 10.0).abs() < 1e-9);
        // Widening is centered on the original midpoint.
        assert!(((y.start + y.end) / 2.0 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_aspect_matches_units_per_pixel() {
        let (x, y) = expand_to_equal_aspect(0.0..4.0, 0.0..4.0, 200.0, 100.0);
        let x_scale = (x.end - x.start) / 200.0;
        let y_scale = (y.end - y.start) / 100.0;
        assert!((x_scale - y_scale).abs() < 1e-12);
    }

    #[test]
    fn test_equal_aspect_degenerate_input_unchanged() {
        let (x, y) = expand_to_equal_aspect(1.0..1.0, 0.0..2.0, 100.0, 100.0);
        assert_eq!(x, 1.0..1.0);
        assert_eq!(y, 0.0..2.0);
    }
}

// src/plot_framework.rs

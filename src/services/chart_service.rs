//! Chart rendering for the vesting schedule
//!
//! Renders the schedule as a stacked bar chart (exercise cost / taxes /
//! profit per month) and the selected month as a donut, both as PNG files.

use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::models::{ChartDataPoint, VestingBreakdown};

// Series palette
const COST_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xd8);
const TAX_COLOR: RGBColor = RGBColor(0x82, 0xca, 0x9d);
const PROFIT_COLOR: RGBColor = RGBColor(0xff, 0xc6, 0x58);
const VESTED_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xd8);
const UNVESTED_COLOR: RGBColor = RGBColor(0x82, 0xca, 0x9d);

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No schedule data to draw. Run `calc` first")]
    NoData,
    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Render the month-by-month schedule as a stacked bar chart PNG.
///
/// Positive segments stack upward from zero and negative ones (a strike
/// above the estimated share price) stack downward, so the bar total always
/// reads as the signed sum.
pub fn render_schedule_chart(
    points: &[ChartDataPoint],
    path: &str,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    if points.is_empty() {
        return Err(ChartError::NoData);
    }
    debug!("Rendering schedule chart: {} points -> {}", points.len(), path);

    // Per-month stacked band extents, cost then taxes then profit
    let mut bands: Vec<[(f64, f64); 3]> = Vec::with_capacity(points.len());
    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for point in points {
        let mut base_up = 0.0;
        let mut base_down = 0.0;
        let mut month_bands = [(0.0, 0.0); 3];
        for (band, value) in [point.exercise_cost, point.taxes, point.profit]
            .into_iter()
            .enumerate()
        {
            month_bands[band] = if value >= 0.0 {
                let segment = (base_up, base_up + value);
                base_up += value;
                segment
            } else {
                let segment = (base_down + value, base_down);
                base_down += value;
                segment
            };
        }
        bands.push(month_bands);
        y_max = y_max.max(base_up);
        y_min = y_min.min(base_down);
    }

    // Pad the value range; avoid a zero-height axis when everything is zero
    let span = (y_max - y_min).max(1e-8);
    let y_top = y_max + span * 0.1;
    let y_bottom = if y_min < 0.0 { y_min - span * 0.1 } else { 0.0 };

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Vesting Schedule", ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..points.len() as f64, y_bottom..y_top)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let labels: Vec<String> = points.iter().map(|p| p.month.clone()).collect();
    chart
        .configure_mesh()
        .y_desc("USD")
        .x_desc("Month")
        .x_labels(labels.len().min(12))
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let names = ["Exercise Cost", "Taxes", "Profit"];
    let colors = [COST_COLOR, TAX_COLOR, PROFIT_COLOR];
    for band in 0..3 {
        let color = colors[band];
        let series = chart
            .draw_series(bands.iter().enumerate().map(|(i, month_bands)| {
                let (y0, y1) = month_bands[band];
                Rectangle::new(
                    [(i as f64 + 0.1, y0), (i as f64 + 0.9, y1)],
                    color.filled(),
                )
            }))
            .map_err(|e| ChartError::Render(e.to_string()))?;
        series.label(names[band]).legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
        });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}

/// Render the vested/unvested split for one month as a donut chart PNG.
pub fn render_donut_chart(
    breakdown: VestingBreakdown,
    as_of: &str,
    path: &str,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    debug!(
        "Rendering donut chart: {:.2}% vested as of {} -> {}",
        breakdown.vested, as_of, path
    );

    let area = BitMapBackend::new(path, (width, height)).into_drawing_area();
    area.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let caption = format!("Vesting Status as of {}", as_of);
    let root = area
        .titled(&caption, ("sans-serif", 30.0).into_font())
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;
    let sizes = vec![breakdown.vested, breakdown.unvested];
    let colors = vec![VESTED_COLOR, UNVESTED_COLOR];
    let labels = vec!["Vested".to_string(), "Unvested".to_string()];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20.0).into_font());
    pie.percentages(("sans-serif", 16.0).into_font().color(&BLACK));
    root.draw(&pie)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    // Hollow out the center to read as a donut
    let hole = (radius * 0.55) as i32;
    root.draw(&Circle::new(center, hole, WHITE.filled()))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}

//! The two figures: forecast overlay and component decomposition.

use chrono::{DateTime, NaiveDateTime};
use eframe::egui::{Stroke, Ui};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::config::PLOT_CONFIG;
use crate::pipeline::PipelineOutcome;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Figure 1: observed values, point forecast, and uncertainty band over time.
pub fn show_forecast_figure(ui: &mut Ui, outcome: &PipelineOutcome) {
    ui.heading(format!("Forecast for {}", outcome.value_label));

    let forecast = &outcome.forecast;

    // Uncertainty band: upper bound left-to-right, lower bound back again
    let mut band = Vec::with_capacity(forecast.len() * 2);
    for (t, upper) in forecast.timestamps.iter().zip(&forecast.yhat_upper) {
        band.push([plot_x(*t), *upper]);
    }
    for (t, lower) in forecast.timestamps.iter().zip(&forecast.yhat_lower).rev() {
        band.push([plot_x(*t), *lower]);
    }
    let band_polygon = Polygon::new("80% interval", PlotPoints::new(band))
        .fill_color(
            PLOT_CONFIG
                .uncertainty_band_color
                .linear_multiply(PLOT_CONFIG.band_opacity_pct),
        )
        .stroke(Stroke::NONE);

    let forecast_points: Vec<[f64; 2]> = forecast
        .timestamps
        .iter()
        .zip(&forecast.yhat)
        .map(|(t, y)| [plot_x(*t), *y])
        .collect();
    let forecast_line = Line::new("Forecast", PlotPoints::new(forecast_points))
        .color(PLOT_CONFIG.forecast_color)
        .width(PLOT_CONFIG.forecast_line_width);

    let observed_points: Vec<[f64; 2]> = outcome
        .observations
        .timestamps
        .iter()
        .zip(&outcome.observations.values)
        .map(|(t, y)| [plot_x(*t), *y])
        .collect();
    let observed = Points::new("Observed", PlotPoints::new(observed_points))
        .color(PLOT_CONFIG.observed_color)
        .radius(PLOT_CONFIG.observed_point_radius);

    Plot::new("forecast_figure")
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_axis("Date")])
        .custom_y_axes(vec![value_axis(&outcome.value_label)])
        .show(ui, |plot_ui| {
            plot_ui.polygon(band_polygon);
            plot_ui.line(forecast_line);
            plot_ui.points(observed);
        });
}

/// Figure 2: trend and seasonal components, stacked vertically.
pub fn show_components_figure(ui: &mut Ui, outcome: &PipelineOutcome) {
    ui.heading("Forecast components");

    let panel_height = (ui.available_height() / 2.0 - 24.0).max(120.0);
    let forecast = &outcome.forecast;

    let trend_points: Vec<[f64; 2]> = forecast
        .timestamps
        .iter()
        .zip(&forecast.trend)
        .map(|(t, y)| [plot_x(*t), *y])
        .collect();
    let trend_line = Line::new("Trend", PlotPoints::new(trend_points))
        .color(PLOT_CONFIG.trend_color)
        .width(PLOT_CONFIG.component_line_width);

    Plot::new("trend_component")
        .height(panel_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_axis("Date")])
        .custom_y_axes(vec![value_axis("trend")])
        .show(ui, |plot_ui| {
            plot_ui.line(trend_line);
        });

    if let Some(profile) = outcome.model.seasonal_profile() {
        let seasonal_points: Vec<[f64; 2]> = profile
            .iter()
            .enumerate()
            .map(|(month, value)| [(month + 1) as f64, *value])
            .collect();
        let seasonal_line = Line::new("Yearly seasonality", PlotPoints::new(seasonal_points))
            .color(PLOT_CONFIG.seasonal_color)
            .width(PLOT_CONFIG.component_line_width);

        Plot::new("seasonal_component")
            .height(panel_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![month_axis()])
            .custom_y_axes(vec![value_axis("seasonal")])
            .show(ui, |plot_ui| {
                plot_ui.line(seasonal_line);
            });
    }
}

/// Timestamps plot as seconds since the epoch.
fn plot_x(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp() as f64
}

fn date_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label.to_string())
        .formatter(|grid_mark, _range| {
            match DateTime::from_timestamp(grid_mark.value as i64, 0) {
                Some(dt) => dt.format("%Y-%m").to_string(),
                None => String::new(),
            }
        })
}

fn value_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|grid_mark, _range| format!("{:.1}", grid_mark.value))
        .placement(HPlacement::Left)
}

fn month_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label("Month")
        .formatter(|grid_mark, _range| {
            let month = grid_mark.value.round();
            if (1.0..=12.0).contains(&month) && (grid_mark.value - month).abs() < 1e-6 {
                MONTH_LABELS[month as usize - 1].to_string()
            } else {
                String::new()
            }
        })
}

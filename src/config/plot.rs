//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub observed_color: Color32,
    pub forecast_color: Color32,
    pub uncertainty_band_color: Color32,
    pub trend_color: Color32,
    pub seasonal_color: Color32,
    /// Width of the point-forecast line
    pub forecast_line_width: f32,
    /// Width of the component lines in the decomposition figure
    pub component_line_width: f32,
    /// Radius of observed-value markers
    pub observed_point_radius: f32,
    /// Opacity applied to the uncertainty band (0.0 = invisible, 1.0 = opaque)
    pub band_opacity_pct: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    observed_color: Color32::from_rgb(60, 60, 60),     // Near black
    forecast_color: Color32::from_rgb(0, 114, 178),    // Prophet-style blue
    uncertainty_band_color: Color32::from_rgb(0, 114, 178),
    trend_color: Color32::from_rgb(213, 94, 0),        // Vermillion
    seasonal_color: Color32::from_rgb(0, 158, 115),    // Bluish green
    forecast_line_width: 2.0,
    component_line_width: 2.0,
    observed_point_radius: 1.5,
    band_opacity_pct: 0.25,
};

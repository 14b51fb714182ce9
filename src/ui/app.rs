use eframe::{Frame, egui};

use crate::pipeline::PipelineOutcome;
use crate::ui::plot_view;

/// The two figures a successful run renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Forecast,
    Components,
}

pub struct ForecastApp {
    outcome: PipelineOutcome,
    active_figure: Figure,
}

impl ForecastApp {
    pub fn new(outcome: PipelineOutcome) -> Self {
        Self {
            outcome,
            active_figure: Figure::Forecast,
        }
    }
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("figure_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_figure, Figure::Forecast, "Forecast");
                ui.selectable_value(&mut self.active_figure, Figure::Components, "Components");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_figure {
            Figure::Forecast => plot_view::show_forecast_figure(ui, &self.outcome),
            Figure::Components => plot_view::show_components_figure(ui, &self.outcome),
        });
    }
}

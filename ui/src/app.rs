use chrono::Utc;
use triage_business::AppConfig;
use triage_states::Time;

use crate::{state::State, widgets};

/// Top-level eframe application.
pub struct TriageApp {
    pub state: State,
}

impl TriageApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for TriageApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the mockable clock, then fold async results into state
        // before anything renders.
        *self.state.ctx.state_mut::<Time>().as_mut() = Utc::now();
        widgets::poll_request_responses(&mut self.state.ctx, ctx);

        let api_base_url = self.state.ctx.state::<AppConfig>().api_url().to_owned();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pending Requests");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::requests_panel(&mut self.state.ctx, &api_base_url, ui);
        });
    }
}

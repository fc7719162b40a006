//! Detail popup for a selected request.

use egui::{Modal, Ui};
use triage_business::RequestBrowserState;

/// Shows the detail modal for the currently selected request.
///
/// Dismissed by the Close button or by clicking outside the modal surface.
pub fn show_request_popup(state: &mut RequestBrowserState, ui: &mut Ui) {
    let Some(request) = state.selected().cloned() else {
        return;
    };

    let mut close_clicked = false;

    let modal = Modal::new(egui::Id::new("request_detail")).show(ui.ctx(), |ui| {
        ui.set_width(320.0);

        ui.heading(&request.name);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.strong("Email:");
            ui.label(&request.email);
        });

        ui.add_space(4.0);
        ui.label(&request.description);

        ui.add_space(8.0);
        ui.add(egui::Image::new(request.uploaded_url.as_str()).max_width(300.0));

        ui.add_space(8.0);
        if ui.button("Close").clicked() {
            close_clicked = true;
        }
    });

    if close_clicked || modal.should_close() {
        state.close_detail();
    }
}

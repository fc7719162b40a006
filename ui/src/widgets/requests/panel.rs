//! Request browser panel: search box, paged list and pagination controls.

use egui::{Response, Ui};
use triage_business::{PAGE_SIZE, RequestBrowserState};
use triage_states::{StateCtx, Time};

use super::api::{
    ACTION_SUCCESS_ID, PAGE_RESPONSE_ID, PageResponse, approve_request, fetch_requests,
    reject_request,
};
use super::popup::show_request_popup;

/// Displays the request browser panel.
///
/// This is the single dispatch point for network calls: any interaction that
/// needs fresh data only schedules a fetch on the state, and the scheduled
/// fetch is issued here at the top of the next render.
pub fn requests_panel(state_ctx: &mut StateCtx, api_base_url: &str, ui: &mut Ui) -> Response {
    let state = state_ctx.state_mut::<RequestBrowserState>();
    if state.take_pending_fetch() {
        let generation = state.begin_fetch();
        fetch_requests(
            api_base_url,
            state.current_page(),
            PAGE_SIZE,
            state.search_query(),
            generation,
            ui.ctx().clone(),
        );
    }

    let response = ui.vertical(|ui| {
        let state = state_ctx.state_mut::<RequestBrowserState>();

        // Search row. Every keystroke re-queries page 1 immediately, and an
        // empty box still counts as an active search.
        ui.horizontal(|ui| {
            ui.label("Search:");
            let edit = ui.text_edit_singleline(state.search_input_mut());
            if edit.changed() {
                state.submit_search();
            }
            if state.is_fetching() {
                ui.spinner();
            }
        });

        ui.add_space(8.0);

        // Collect actions (avoiding borrow issues inside the grid closure)
        let mut detail_to_open = None;
        let mut approve_id: Option<String> = None;
        let mut reject_id: Option<String> = None;

        egui::Grid::new("requests_table")
            .num_columns(3)
            .striped(true)
            .spacing([16.0, 4.0])
            .min_col_width(40.0)
            .show(ui, |ui| {
                ui.strong("#");
                ui.strong("Name");
                ui.strong("Actions");
                ui.end_row();

                for (index, request) in state.requests().iter().enumerate() {
                    ui.label(state.display_number(index).to_string());

                    if ui.link(&request.name).clicked() {
                        detail_to_open = Some(request.clone());
                    }

                    ui.horizontal(|ui| {
                        if ui.button("Approve").clicked() {
                            approve_id = Some(request.user_id.clone());
                        }
                        if ui.button("Reject").clicked() {
                            reject_id = Some(request.user_id.clone());
                        }
                    });

                    ui.end_row();
                }
            });

        if state.show_no_results() {
            ui.label("No results found");
        }

        ui.add_space(8.0);

        // Pagination row.
        let (prev_enabled, next_enabled) = state.pagination_buttons();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(prev_enabled, egui::Button::new("Previous"))
                .clicked()
            {
                state.prev_page();
            }
            ui.label(state.pagination_text());
            if ui
                .add_enabled(next_enabled, egui::Button::new("Next"))
                .clicked()
            {
                state.next_page();
            }
        });

        if let Some(request) = detail_to_open {
            state.open_detail(request);
        }
        if let Some(user_id) = approve_id {
            approve_request(api_base_url, &user_id, ui.ctx().clone());
        }
        if let Some(user_id) = reject_id {
            reject_request(api_base_url, &user_id, ui.ctx().clone());
        }

        // A fetch scheduled during this frame is issued on the next one.
        if state.is_fetching() {
            ui.ctx().request_repaint();
        }
    });

    // Detail popup.
    let state = state_ctx.state_mut::<RequestBrowserState>();
    if state.selected().is_some() {
        show_request_popup(state, ui);
    }

    response.response
}

/// Poll async responses parked in egui temp memory and fold them into state.
/// Call this once per frame, before rendering.
pub fn poll_request_responses(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    // Check for a fetched page. Stale generations are discarded by the state.
    if let Some(page) =
        ctx.memory(|mem| mem.data.get_temp::<PageResponse>(egui::Id::new(PAGE_RESPONSE_ID)))
    {
        ctx.memory_mut(|mem| {
            mem.data.remove::<PageResponse>(egui::Id::new(PAGE_RESPONSE_ID));
        });
        let now = *state_ctx.state_mut::<Time>().as_ref();
        state_ctx.state_mut::<RequestBrowserState>().apply_page(
            page.generation,
            page.requests,
            page.total_items,
            now,
        );
    }

    // Check for a successful approve/reject: the view returns to the
    // unfiltered first page.
    if let Some(user_id) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new(ACTION_SUCCESS_ID)))
    {
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new(ACTION_SUCCESS_ID));
        });
        log::info!("action for user {user_id} succeeded");
        state_ctx
            .state_mut::<RequestBrowserState>()
            .on_action_success();
    }
}

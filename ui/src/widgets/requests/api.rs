//! API calls against the request backend.
//!
//! Callbacks hand results back to the render loop through `egui::Context`
//! temp memory; `poll_request_responses` drains the slots into
//! `RequestBrowserState` each frame.

use triage_business::{ActionRequest, ListRequestsResponse, RequestItem};

/// Memory slot for a fetched page of requests.
pub(crate) const PAGE_RESPONSE_ID: &str = "requests_page_response";

/// Memory slot set after a successful approve/reject.
pub(crate) const ACTION_SUCCESS_ID: &str = "request_action_success";

/// A fetched page plus the generation token the fetch was issued with.
#[derive(Debug, Clone)]
pub(crate) struct PageResponse {
    pub generation: u64,
    pub requests: Vec<RequestItem>,
    pub total_items: u64,
}

impl PageResponse {
    fn empty(generation: u64) -> Self {
        Self {
            generation,
            requests: Vec::new(),
            total_items: 0,
        }
    }
}

/// Fetch one page of pending requests.
///
/// Transport errors, non-2xx statuses and parse failures all degrade to an
/// empty page: the operator sees "no results", never an error surface.
pub fn fetch_requests(
    api_base_url: &str,
    page: u64,
    page_size: u64,
    search: &str,
    generation: u64,
    ctx: egui::Context,
) {
    let mut url = format!("{api_base_url}/requests?page={page}&pageSize={page_size}");
    if !search.is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let payload = match result {
            Ok(response) if response.ok => {
                match serde_json::from_slice::<ListRequestsResponse>(&response.bytes) {
                    Ok(list) => PageResponse {
                        generation,
                        requests: list.requests,
                        total_items: list.total_items,
                    },
                    Err(err) => {
                        log::error!("failed to parse requests page: {err}");
                        PageResponse::empty(generation)
                    }
                }
            }
            Ok(response) => {
                log::error!("requests endpoint returned status: {}", response.status);
                PageResponse::empty(generation)
            }
            Err(err) => {
                log::error!("error fetching requests: {err}");
                PageResponse::empty(generation)
            }
        };
        ctx.memory_mut(|mem| {
            mem.data
                .insert_temp(egui::Id::new(PAGE_RESPONSE_ID), payload);
        });
    });
}

/// Approve a request via `POST /accept-request`.
pub fn approve_request(api_base_url: &str, user_id: &str, ctx: egui::Context) {
    log::info!("accepting request for user: {user_id}");
    post_action(format!("{api_base_url}/accept-request"), user_id, ctx);
}

/// Reject a request via `POST /reject-request`.
pub fn reject_request(api_base_url: &str, user_id: &str, ctx: egui::Context) {
    log::info!("rejecting request for user: {user_id}");
    post_action(format!("{api_base_url}/reject-request"), user_id, ctx);
}

/// POST `{"userId": ...}` to an action endpoint.
///
/// Only a 2xx response touches state (via the success memory slot). Failures
/// are logged and otherwise dropped; the operator can retry manually.
fn post_action(url: String, user_id: &str, ctx: egui::Context) {
    let user_id = user_id.to_owned();
    let body = match serde_json::to_vec(&ActionRequest {
        user_id: user_id.clone(),
    }) {
        Ok(body) => body,
        Err(err) => {
            log::error!("failed to serialize action body: {err}");
            return;
        }
    };

    let request = ehttp::Request {
        method: "POST".to_owned(),
        url,
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    };

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) if response.ok => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(egui::Id::new(ACTION_SUCCESS_ID), user_id);
                });
            }
            Ok(response) => {
                log::error!("action endpoint returned status: {}", response.status);
            }
            Err(err) => {
                log::error!("error performing action: {err}");
            }
        }
    });
}

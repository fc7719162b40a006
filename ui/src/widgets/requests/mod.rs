//! Request browser module.
//!
//! - `api`: network calls against the request backend
//! - `panel`: search box, paged list and pagination controls, plus the
//!   per-frame response polling
//! - `popup`: detail modal for a selected request

mod api;
mod panel;
mod popup;

pub use panel::{poll_request_responses, requests_panel};
pub use popup::show_request_popup;

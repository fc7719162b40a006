mod requests;

pub use requests::{poll_request_responses, requests_panel, show_request_popup};

mod browser_state;
mod config;
mod requests;

pub use browser_state::{PAGE_SIZE, RequestBrowserState};
pub use config::AppConfig;
pub use requests::{ActionRequest, ListRequestsResponse, RequestItem};

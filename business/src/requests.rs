//! Wire types for the request backend.
//!
//! Field names follow the server's JSON: item fields are snake_case, while
//! the list envelope uses `totalItems` and action bodies use `userId`.

use serde::{Deserialize, Serialize};

/// A pending submission awaiting operator approval or rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Stable opaque identifier, round-tripped to the server for actions.
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    /// Externally hosted image attached to the submission.
    pub uploaded_url: String,
}

/// Response from `GET /requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequestsResponse {
    pub requests: Vec<RequestItem>,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
}

/// Body of `POST /accept-request` and `POST /reject-request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

//! Search re-queries page 1 with the URL-encoded filter.

mod common;

use common::{requests_body, settle};
use triage_business::RequestBrowserState;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_search_requeries_first_page_with_filter() {
    let mock_server = common::start_mock_server().await;

    // Filtered query: one matching request.
    Mock::given(method("GET"))
        .and(path("/requests"))
        .and(query_param("search", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(requests_body(1, 1)))
        .expect(1..)
        .mount(&mock_server)
        .await;

    // Unfiltered query: a multi-page result.
    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(requests_body(10, 25)))
        .mount(&mock_server)
        .await;

    let mut ctx = common::finish_setup(mock_server);
    let harness = ctx.harness_mut();
    settle(harness).await;

    // Drive the search exactly as the widget does on a keystroke: untrimmed
    // input, immediate submit.
    {
        let state = harness
            .state_mut()
            .state
            .ctx
            .state_mut::<RequestBrowserState>();
        state.search_input_mut().push_str("  alice ");
        state.submit_search();
    }
    settle(harness).await;

    let state = harness
        .state_mut()
        .state
        .ctx
        .state_mut::<RequestBrowserState>();
    assert_eq!(state.current_page(), 1, "search always restarts at page 1");
    assert!(state.search_active());
    assert_eq!(state.search_query(), "alice", "query is trimmed");
    assert_eq!(state.requests().len(), 1);
    assert_eq!(state.total_items(), 1);
    assert_eq!(
        state.pagination_buttons(),
        (false, false),
        "single-page search locks both buttons"
    );
}

#[tokio::test]
async fn test_empty_search_queries_without_filter_but_stays_active() {
    let mock_server = common::start_mock_server().await;

    // Both the initial load and the empty-string search must arrive without
    // a `search` parameter.
    Mock::given(method("GET"))
        .and(path("/requests"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(requests_body(5, 5)))
        .expect(2..)
        .mount(&mock_server)
        .await;

    let mut ctx = common::finish_setup(mock_server);
    let harness = ctx.harness_mut();
    settle(harness).await;

    {
        let state = harness
            .state_mut()
            .state
            .ctx
            .state_mut::<RequestBrowserState>();
        state.submit_search();
    }
    settle(harness).await;

    let state = harness
        .state_mut()
        .state
        .ctx
        .state_mut::<RequestBrowserState>();
    assert!(
        state.search_active(),
        "an empty search box still counts as an active search"
    );
    assert_eq!(state.search_query(), "");
    assert_eq!(
        state.pagination_buttons(),
        (false, false),
        "active search fitting one page locks both buttons"
    );
}

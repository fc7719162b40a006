use egui_kittest::Harness;
use triage_ui::TriageApp;
use triage_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    pub mock_server: MockServer,
    harness: Harness<'a, TriageApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, TriageApp> {
        &mut self.harness
    }
}

/// Start a mock backend whose `/requests` endpoint answers with `body`, and
/// boot the app against it.
#[allow(dead_code)]
pub async fn setup_with_requests_body(body: serde_json::Value) -> TestCtx<'static> {
    let mock_server = start_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    finish_setup(mock_server)
}

/// Start a mock backend without any `/requests` mock; callers mount their own.
pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

pub fn finish_setup(mock_server: MockServer) -> TestCtx<'static> {
    let state = State::test(mock_server.uri());
    let app = TriageApp::new(state);
    let harness = Harness::new_eframe(|_| app);

    TestCtx {
        mock_server,
        harness,
    }
}

/// A `/requests` body with `count` rows out of `total`.
#[allow(dead_code)]
pub fn requests_body(count: usize, total: u64) -> serde_json::Value {
    let requests: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "user_id": format!("u-{i}"),
                "name": format!("Applicant {i}"),
                "email": format!("applicant{i}@example.com"),
                "description": format!("Submission number {i}"),
                "uploaded_url": format!("https://img.example.com/{i}.png"),
            })
        })
        .collect();

    serde_json::json!({
        "requests": requests,
        "totalItems": total,
    })
}

/// Step the harness until in-flight responses have been folded into state.
#[allow(dead_code)]
pub async fn settle(harness: &mut Harness<'_, TriageApp>) {
    // Several cycles so a response that schedules a follow-up request (e.g.
    // the refetch after an approve/reject) also gets time to land.
    for _ in 0..3 {
        harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        for _ in 0..10 {
            harness.step();
        }
    }
}

use triage_business::{AppConfig, RequestBrowserState};
use triage_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl State {
    fn with_config(config: AppConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(RequestBrowserState::new());

        Self { ctx }
    }

    /// State wired to a test backend.
    pub fn test(base_url: String) -> Self {
        Self::with_config(AppConfig::new(base_url))
    }
}

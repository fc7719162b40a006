mod basic_state;
mod ctx;
mod state;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use state::State;

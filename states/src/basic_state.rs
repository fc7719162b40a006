use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Wall-clock state.
///
/// Widgets read "now" through the registry instead of calling `Utc::now()`
/// directly, so tests can pin the clock to a fixed instant.
#[derive(Debug, Default)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

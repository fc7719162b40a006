use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::State;

/// Typed registry of application state, keyed by `TypeId`.
///
/// All access happens on the UI thread; there is no interior locking. Looking
/// up a state type that was never registered is a programming error and
/// panics.
#[derive(Default)]
pub struct StateCtx {
    storage: HashMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state value, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn state<T: State>(&self) -> &T {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    /// Run a mutation against a single state value.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn contains<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .finish()
    }
}

use std::any::Any;

/// A piece of application state stored in a [`crate::StateCtx`].
///
/// States are plain structs owned by the registry; widgets look them up by
/// type and mutate them directly between frames.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions dispatched to the store.
///
/// Actions describe intents to change state. They are cloned into the task
/// layer and logged, hence the bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Coarse action name for logging and filtering.
    fn name(&self) -> &'static str;
}

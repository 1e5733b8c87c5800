//! Effect-aware state store
//!
//! The reducer returns both a change indicator and declarative effects.
//! Effects describe work (write a file, start a timed task); the runtime
//! executes them after dispatch, which keeps the reducer pure and every
//! side effect explicit.

use std::marker::PhantomData;

use tracing::debug;

use crate::dispatch::action::Action;

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified and a re-render is needed.
    pub changed: bool,
    /// Effects to process after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that can emit effects alongside state changes.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// The single state container. Dispatch is the only mutation path the app
/// uses; every action is traced at debug level with its outcome.
pub struct EffectStore<S, A: Action, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> EffectStore<S, A, E> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access, for initialization only. Everything else goes
    /// through `dispatch`.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        let name = action.name();
        let detail = format!("{:?}", action);
        let result = (self.reducer)(&mut self.state, action);
        debug!(
            action = name,
            detail = %detail,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Add(i32),
        Flush,
        Noop,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Add(_) => "Add",
                TestAction::Flush => "Flush",
                TestAction::Noop => "Noop",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Persist(i32),
    }

    #[derive(Default)]
    struct TestState {
        total: i32,
    }

    fn reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Add(n) => {
                state.total += n;
                DispatchResult::changed()
            }
            TestAction::Flush => DispatchResult::effect(TestEffect::Persist(state.total)),
            TestAction::Noop => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn dispatch_runs_the_reducer() {
        let mut store = EffectStore::new(TestState::default(), reducer);

        let result = store.dispatch(TestAction::Add(3));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(store.state().total, 3);
    }

    #[test]
    fn effects_are_returned_without_state_change() {
        let mut store = EffectStore::new(TestState::default(), reducer);
        store.dispatch(TestAction::Add(5));

        let result = store.dispatch(TestAction::Flush);
        assert!(!result.changed);
        assert!(result.has_effects());
        assert_eq!(result.effects, vec![TestEffect::Persist(5)]);
    }

    #[test]
    fn noop_reports_unchanged() {
        let mut store = EffectStore::new(TestState::default(), reducer);
        let result = store.dispatch(TestAction::Noop);
        assert!(!result.changed);
        assert!(!result.has_effects());
    }
}

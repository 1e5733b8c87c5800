//! The event/action/render loop
//!
//! One tokio select loop drives the app: terminal events are mapped to
//! actions by the UI, actions are dispatched to the store, effects from the
//! reducer are executed, and the frame is redrawn whenever the state
//! changed. Interval subscriptions (the studio clock) and keyed tasks (the
//! partner sync) feed the same action queue.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dispatch::action::Action;
use crate::dispatch::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::dispatch::store::{EffectReducer, EffectStore};
use crate::dispatch::tasks::TaskManager;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);

/// Actions produced by mapping one terminal event, plus a render hint for
/// events (resize) that need a redraw even without a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

/// Handle effect handlers use to spawn tasks and emit follow-up actions.
pub struct EffectContext<'a, A: Action> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

/// Runtime owning the store, the action queue, tasks and subscriptions.
pub struct Runtime<S, A: Action, E> {
    store: EffectStore<S, A, E>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    tasks: TaskManager<A>,
    intervals: HashMap<&'static str, JoinHandle<()>>,
    should_render: bool,
}

impl<S: 'static, A: Action, E> Runtime<S, A, E> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        Self {
            store: EffectStore::new(state, reducer),
            action_tx,
            action_rx,
            tasks,
            intervals: HashMap::new(),
            should_render: true,
        }
    }

    /// Queue an action for the next loop iteration.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Emit `action_fn()` every `period`, starting one period from now.
    /// Re-registering a name replaces the old interval.
    pub fn interval(&mut self, name: &'static str, period: Duration, action_fn: fn() -> A) {
        if let Some(handle) = self.intervals.remove(name) {
            handle.abort();
        }
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await; // skip the immediate tick
            loop {
                ticker.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });
        self.intervals.insert(name, handle);
    }

    /// Run until `should_quit` matches a dispatched action.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> EventOutcome<A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };
                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            action_tx: &self.action_tx,
                            tasks: &mut self.tasks,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    if result.changed {
                        self.should_render = true;
                    }
                }

                else => break,
            }
        }

        cancel_token.cancel();
        for (_, handle) in self.intervals.drain() {
            handle.abort();
        }
        self.tasks.cancel_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Tick,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Tick"
        }
    }

    fn reducer(
        state: &mut u32,
        _action: TestAction,
    ) -> crate::dispatch::store::DispatchResult<()> {
        *state += 1;
        crate::dispatch::store::DispatchResult::changed()
    }

    #[tokio::test]
    async fn interval_feeds_the_action_queue() {
        let mut runtime: Runtime<u32, TestAction, ()> = Runtime::new(0, reducer);
        runtime.interval("tick", Duration::from_millis(10), || TestAction::Tick);

        let action = tokio::time::timeout(Duration::from_millis(200), runtime.action_rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, TestAction::Tick);
    }

    #[tokio::test]
    async fn enqueue_is_fifo() {
        let mut runtime: Runtime<u32, TestAction, ()> = Runtime::new(0, reducer);
        runtime.enqueue(TestAction::Tick);
        runtime.enqueue(TestAction::Tick);

        assert!(runtime.action_rx.recv().await.is_some());
        assert!(runtime.action_rx.recv().await.is_some());
    }
}

//! Terminal event plumbing
//!
//! A background task polls crossterm and forwards raw events over a
//! channel; the runtime turns them into [`EventKind`] values and hands them
//! to the UI's event mapper. The poller is cancellable so shutdown can
//! drain the crossterm buffer before the terminal is restored.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Raw event from crossterm before processing.
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// The event payload components receive.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Convert a raw event into an [`EventKind`].
///
/// Key releases and repeats are dropped here so components only ever see
/// press events.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind == KeyEventKind::Press => Some(EventKind::Key(key)),
        RawEvent::Key(_) => None,
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

/// Spawn the crossterm polling task.
///
/// Polls with `poll_timeout`, sleeps `loop_sleep` between cycles, and exits
/// when the token is cancelled (draining any buffered events first).
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    debug!("event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        if let Ok(evt) = event::read() {
                            let raw = match evt {
                                event::Event::Key(key) => Some(RawEvent::Key(key)),
                                event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(raw) = raw {
                                if tx.send(raw).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

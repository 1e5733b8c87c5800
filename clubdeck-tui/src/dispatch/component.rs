//! The component contract every widget in the console follows

use ratatui::{layout::Rect, Frame};

use crate::dispatch::event::EventKind;

/// A pure UI element: props in, actions out.
///
/// Props carry every piece of read-only data the component needs, focus
/// included; the only state a component may keep for itself is presentation
/// state such as a text cursor or a scroll offset. Events never mutate
/// anything directly; they are translated into actions and dispatched
/// through the store like everything else.
pub trait Component<A> {
    /// Borrowed, read-only data for one render or event pass.
    type Props<'a>;

    /// Translate a terminal event into zero or more actions. Components
    /// that only display (status bar) keep the default no-op.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        std::iter::empty()
    }

    /// Draw into `area` from props and internal presentation state.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

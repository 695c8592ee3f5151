use reorderable::{
    AnimationTick, DragEnd, DragOutcome, ListLayout, Offset, ReorderError, ReorderOptions,
    ReorderState,
};

use crate::{ScrollReceiver, ScrollSender, scroll_channel};

/// A framework-neutral controller that wraps a `reorderable::ReorderState` and publishes its
/// auto-scroll requests to a [`crate::run_auto_scroll`] loop.
///
/// Adapters drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` / `on_drag_cancel` from pointer events
/// - `on_visible_items_changed` whenever the list re-lays out (scroll, resize, data change)
/// - `tick(now_ms)` each frame while a cancelled drag animates back
#[derive(Debug)]
pub struct Controller<K> {
    state: ReorderState<K>,
    scroll: ScrollSender,
}

impl<K: Clone + PartialEq> Controller<K> {
    /// Creates a controller and the receiving end of its scroll request slot.
    pub fn new(options: ReorderOptions<K>) -> (Self, ScrollReceiver) {
        Self::from_state(ReorderState::new(options))
    }

    pub fn from_state(state: ReorderState<K>) -> (Self, ScrollReceiver) {
        let (scroll, requests) = scroll_channel();
        (Self { state, scroll }, requests)
    }

    pub fn state(&self) -> &ReorderState<K> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ReorderState<K> {
        &mut self.state
    }

    pub fn into_state(self) -> ReorderState<K> {
        self.state
    }

    /// Another receiver for the same scroll request slot.
    pub fn scroll_requests(&self) -> ScrollReceiver {
        self.scroll.subscribe()
    }

    pub fn on_drag_start<L: ListLayout<K> + ?Sized>(&mut self, layout: &L, x: f32, y: f32) -> bool {
        self.state.on_drag_start(layout, x, y)
    }

    /// Forwards a pointer delta and publishes the resulting scroll request.
    ///
    /// On error nothing is published; the previous request stays in the slot.
    pub fn on_drag<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
        dx: f32,
        dy: f32,
    ) -> Result<DragOutcome<K>, ReorderError> {
        let outcome = self.state.on_drag(layout, dx, dy)?;
        if self.state.is_dragging() {
            self.scroll.request(outcome.scroll);
        }
        Ok(outcome)
    }

    /// Re-evaluates the drag after the visible items changed. Publishes nothing while idle.
    pub fn on_visible_items_changed<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
    ) -> Result<DragOutcome<K>, ReorderError> {
        let outcome = self.state.on_visible_items_changed(layout)?;
        if self.state.is_dragging() {
            self.scroll.request(outcome.scroll);
        }
        Ok(outcome)
    }

    pub fn on_drag_end(&mut self) -> Option<DragEnd> {
        self.scroll.stop();
        self.state.on_drag_end()
    }

    pub fn on_drag_cancel<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
        now_ms: u64,
    ) -> Option<DragEnd> {
        self.scroll.stop();
        self.state.on_drag_cancel(layout, now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> AnimationTick {
        self.state.tick(now_ms)
    }

    pub fn offset_of<L: ListLayout<K> + ?Sized>(&self, key: &K, layout: &L) -> Offset {
        self.state.offset_of(key, layout)
    }
}

use std::sync::Arc;

use crate::{BoxError, DragCancelledAnimation, ItemPosition};

/// Reorder callback: move the item at `from` to `to` in the host's backing data.
///
/// The engine assumes the next layout snapshot reflects the new order.
pub type OnMove<K> =
    Arc<dyn Fn(&ItemPosition<K>, &ItemPosition<K>) -> Result<(), BoxError> + Send + Sync>;

/// Target filter: `(dragged_over, dragging) -> allowed`.
pub type CanDragOver<K> = Arc<dyn Fn(&ItemPosition<K>, &ItemPosition<K>) -> bool + Send + Sync>;

/// Fired when a drag starts, with `(index, x, y)`.
pub type OnDragStart = Arc<dyn Fn(usize, f32, f32) + Send + Sync>;

/// Fired when a drag ends or is cancelled, with `(start_index, end_index)`.
pub type OnDragEnd = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Fired exactly once per cancelled-drag animation, when it settles or is interrupted.
pub type OnReturnFinished<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Default auto-scroll cap, in density-independent units per frame.
pub const DEFAULT_MAX_SCROLL_PER_FRAME: f32 = 20.0;

/// Configuration for [`crate::ReorderState`].
///
/// Callbacks live in `Arc`s so options are cheap to clone and update.
pub struct ReorderOptions<K> {
    pub on_move: OnMove<K>,
    /// Optional target filter. When unset every visible item is a valid target.
    pub can_drag_over: Option<CanDragOver<K>>,
    pub on_drag_start: Option<OnDragStart>,
    pub on_drag_end: Option<OnDragEnd>,
    pub on_return_finished: Option<OnReturnFinished<K>>,

    /// Auto-scroll cap in density-independent units per frame.
    pub max_scroll_per_frame: f32,
    /// Pixels per density-independent unit.
    pub density: f32,

    pub drag_cancelled_animation: DragCancelledAnimation,
}

impl<K> Clone for ReorderOptions<K> {
    fn clone(&self) -> Self {
        Self {
            on_move: Arc::clone(&self.on_move),
            can_drag_over: self.can_drag_over.clone(),
            on_drag_start: self.on_drag_start.clone(),
            on_drag_end: self.on_drag_end.clone(),
            on_return_finished: self.on_return_finished.clone(),
            max_scroll_per_frame: self.max_scroll_per_frame,
            density: self.density,
            drag_cancelled_animation: self.drag_cancelled_animation,
        }
    }
}

impl<K> ReorderOptions<K> {
    /// Creates options with an infallible reorder callback.
    pub fn new(
        on_move: impl Fn(&ItemPosition<K>, &ItemPosition<K>) + Send + Sync + 'static,
    ) -> Self {
        Self::new_fallible(move |from, to| {
            on_move(from, to);
            Ok(())
        })
    }

    /// Creates options with a reorder callback that may fail.
    ///
    /// A failure is returned from `on_drag` and leaves the session as it was, so the next drag
    /// update retries the same move.
    pub fn new_fallible(
        on_move: impl Fn(&ItemPosition<K>, &ItemPosition<K>) -> Result<(), BoxError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            on_move: Arc::new(on_move),
            can_drag_over: None,
            on_drag_start: None,
            on_drag_end: None,
            on_return_finished: None,
            max_scroll_per_frame: DEFAULT_MAX_SCROLL_PER_FRAME,
            density: 1.0,
            drag_cancelled_animation: DragCancelledAnimation::default(),
        }
    }

    pub fn with_can_drag_over(
        mut self,
        can_drag_over: Option<
            impl Fn(&ItemPosition<K>, &ItemPosition<K>) -> bool + Send + Sync + 'static,
        >,
    ) -> Self {
        self.can_drag_over = can_drag_over.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_start(
        mut self,
        on_drag_start: Option<impl Fn(usize, f32, f32) + Send + Sync + 'static>,
    ) -> Self {
        self.on_drag_start = on_drag_start.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_end(
        mut self,
        on_drag_end: Option<impl Fn(usize, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_drag_end = on_drag_end.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_return_finished(
        mut self,
        on_return_finished: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_return_finished = on_return_finished.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_max_scroll_per_frame(mut self, max_scroll_per_frame: f32) -> Self {
        self.max_scroll_per_frame = max_scroll_per_frame;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_drag_cancelled_animation(mut self, animation: DragCancelledAnimation) -> Self {
        self.drag_cancelled_animation = animation;
        self
    }

    /// The auto-scroll cap converted to pixels.
    pub fn max_scroll_per_frame_px(&self) -> f32 {
        self.max_scroll_per_frame * self.density
    }
}

impl<K> core::fmt::Debug for ReorderOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderOptions")
            .field("can_drag_over", &self.can_drag_over.is_some())
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_return_finished", &self.on_return_finished.is_some())
            .field("max_scroll_per_frame", &self.max_scroll_per_frame)
            .field("density", &self.density)
            .field("drag_cancelled_animation", &self.drag_cancelled_animation)
            .finish_non_exhaustive()
    }
}

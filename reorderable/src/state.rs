use crate::{
    AutoScroll, DragOutcome, Geometry, HitTester, ItemBounds, ItemPosition, ListLayout, Offset,
    ReorderError, ReorderOptions, ReturnAnimation, ScrollAnchor,
};

/// Whether a drag gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// How a drag session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEnd {
    /// The item stays where the last move put it; its visual offset snaps to zero.
    Committed,
    /// The item's visual offset animates back to zero.
    Cancelled,
}

/// Transient state of one drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    /// The dragged item. `index` follows committed moves; `key` never changes.
    pub dragged: ItemPosition<K>,
    /// Where the dragged item was when the gesture started.
    pub start: ItemPosition<K>,
    /// Visual bounds of the dragged item when the gesture started.
    pub origin: ItemBounds,
    /// Pointer position at drag start.
    pub start_offset: Offset,
    /// Cumulative main-axis drag delta.
    pub current_offset: Offset,
    pub last_target: Option<ItemPosition<K>>,
    /// Raw scroll direction for this session's list, see [`crate::Geometry::scroll_sign`].
    pub scroll_sign: f32,
}

impl<K> DragSession<K> {
    /// Visual bounds of the dragged item right now (origin shifted by the drag delta).
    pub fn current_bounds(&self) -> ItemBounds {
        self.origin.translate(self.current_offset)
    }
}

/// Result of advancing the cancelled-drag animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationTick {
    /// No animation is running.
    Idle,
    Running(Offset),
    /// The animation just settled at zero. Reported once.
    Finished,
}

#[derive(Clone, Debug)]
struct Returning<K> {
    key: K,
    animation: ReturnAnimation,
}

/// The drag-to-reorder state machine: `Idle -> Dragging -> {Committed, Cancelled} -> Idle`.
///
/// The host drives it with pointer events and a fresh [`ListLayout`] snapshot for each call. At
/// most one drag session exists at a time.
#[derive(Clone, Debug)]
pub struct ReorderState<K> {
    options: ReorderOptions<K>,
    session: Option<DragSession<K>>,
    returning: Option<Returning<K>>,
}

impl<K: Clone + PartialEq> ReorderState<K> {
    pub fn new(options: ReorderOptions<K>) -> Self {
        rdebug!(
            max_scroll_per_frame = options.max_scroll_per_frame,
            density = options.density,
            "ReorderState::new"
        );
        Self {
            options,
            session: None,
            returning: None,
        }
    }

    pub fn options(&self) -> &ReorderOptions<K> {
        &self.options
    }

    /// Replaces the options. A running session picks them up on its next update.
    pub fn set_options(&mut self, options: ReorderOptions<K>) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ReorderOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    pub fn dragged_key(&self) -> Option<&K> {
        self.session.as_ref().map(|s| &s.dragged.key)
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.dragged.index)
    }

    /// Whether a cancelled-drag animation is still running.
    pub fn is_returning(&self) -> bool {
        self.returning.is_some()
    }

    /// Starts a drag on the item under `(x, y)`.
    ///
    /// Returns `false` (and changes nothing) when no visible item is under the pointer or a drag
    /// is already in progress.
    pub fn on_drag_start<L: ListLayout<K> + ?Sized>(&mut self, layout: &L, x: f32, y: f32) -> bool {
        if self.session.is_some() {
            rwarn!(x, y, "on_drag_start: rejected, a drag is already in progress");
            return false;
        }

        let hit = HitTester::new(layout);
        let Some(item) = hit.item_at(x, y) else {
            rdebug!(x, y, "on_drag_start: no item under pointer");
            return false;
        };
        let geometry = hit.geometry();
        let position = item.position();

        if self.returning.as_ref().is_some_and(|r| r.key == position.key) {
            self.finish_returning();
        }

        rdebug!(index = position.index, x, y, "on_drag_start");
        self.session = Some(DragSession {
            dragged: position.clone(),
            start: position,
            origin: geometry.bounds(item),
            start_offset: Offset::new(x, y),
            current_offset: Offset::ZERO,
            last_target: None,
            scroll_sign: geometry.scroll_sign(),
        });

        if let Some(cb) = &self.options.on_drag_start {
            cb(item.index, x, y);
        }
        true
    }

    /// Applies a pointer delta.
    ///
    /// Re-evaluates the drop target against `layout`, invokes `on_move` when the target changed,
    /// and returns the auto-scroll request for this update. Calls while idle are no-ops.
    pub fn on_drag<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
        dx: f32,
        dy: f32,
    ) -> Result<DragOutcome<K>, ReorderError> {
        let options = &self.options;
        let Some(session) = self.session.as_mut() else {
            return Ok(DragOutcome::idle());
        };

        let hit = HitTester::new(layout);
        let geometry = hit.geometry();
        let orientation = geometry.orientation();

        session.current_offset += Offset::new(dx, dy).project(orientation);
        let bounds = session.current_bounds();
        let point = Offset::on_axis(orientation, bounds.center(orientation));

        let candidates = hit.find_targets(point.x, point.y, &session.dragged);
        let target = hit.choose_drop_item(
            &session.dragged,
            candidates,
            point.x,
            point.y,
            options
                .can_drag_over
                .as_deref()
                .map(|f| f as &dyn Fn(&ItemPosition<K>, &ItemPosition<K>) -> bool),
        );

        let mut outcome = DragOutcome::idle();
        if let Some(target) = target {
            let to = target.position();
            let is_new_target = session.last_target.as_ref() != Some(&to);
            if to.index != session.dragged.index && is_new_target {
                let from = session.dragged.clone();
                if let Err(source) = (options.on_move)(&from, &to) {
                    rwarn!(from = from.index, to = to.index, "on_move failed");
                    return Err(ReorderError::MoveFailed {
                        from: from.index,
                        to: to.index,
                        source,
                    });
                }
                rdebug!(from = from.index, to = to.index, "on_move");

                outcome.anchor = layout.first_visible().and_then(|first| {
                    (first.index == from.index || first.index == to.index).then(|| ScrollAnchor {
                        index: first.index,
                        offset: layout.viewport().start - first.offset,
                    })
                });
                session.dragged.index = to.index;
                session.last_target = Some(to.clone());
                outcome.moved = Some((from, to));
            }
        }

        let auto_scroll = AutoScroll::new(options.max_scroll_per_frame_px());
        outcome.scroll = auto_scroll.request(&geometry, &bounds, session.scroll_sign);
        rtrace!(delta = outcome.scroll.delta(), "auto-scroll request");
        Ok(outcome)
    }

    /// Re-evaluates the target after the visible items changed (scroll, resize, data change)
    /// without new pointer movement. Does nothing unless a drag is in progress.
    pub fn on_visible_items_changed<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
    ) -> Result<DragOutcome<K>, ReorderError> {
        if self.session.is_none() {
            return Ok(DragOutcome::idle());
        }
        self.on_drag(layout, 0.0, 0.0)
    }

    /// Ends the drag, keeping the item where the last move put it.
    pub fn on_drag_end(&mut self) -> Option<DragEnd> {
        let session = self.session.take()?;
        rdebug!(
            start = session.start.index,
            end = session.dragged.index,
            "on_drag_end"
        );
        self.notify_drag_end(&session);
        Some(DragEnd::Committed)
    }

    /// Cancels the drag and starts animating the dragged item back to rest.
    ///
    /// Moves already reported through `on_move` are not undone.
    pub fn on_drag_cancel<L: ListLayout<K> + ?Sized>(
        &mut self,
        layout: &L,
        now_ms: u64,
    ) -> Option<DragEnd> {
        let session = self.session.take()?;
        let from = visual_offset(&session, layout);
        rdebug!(
            start = session.start.index,
            end = session.dragged.index,
            "on_drag_cancel"
        );

        if self.returning.is_some() {
            self.finish_returning();
        }
        self.returning = Some(Returning {
            key: session.dragged.key.clone(),
            animation: self.options.drag_cancelled_animation.start(from, now_ms),
        });
        self.notify_drag_end(&session);
        Some(DragEnd::Cancelled)
    }

    /// Advances the cancelled-drag animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> AnimationTick {
        let Some(returning) = self.returning.as_mut() else {
            return AnimationTick::Idle;
        };
        let value = returning.animation.advance(now_ms);
        if returning.animation.is_finished() {
            self.finish_returning();
            return AnimationTick::Finished;
        }
        AnimationTick::Running(value)
    }

    /// The translation to render the item with `key` at.
    ///
    /// While dragging, this keeps the dragged item under the pointer even as the list scrolls or
    /// reorders underneath it. During a cancelled-drag animation it is the animated value.
    pub fn offset_of<L: ListLayout<K> + ?Sized>(&self, key: &K, layout: &L) -> Offset {
        if let Some(session) = self.session.as_ref().filter(|s| s.dragged.key == *key) {
            return visual_offset(session, layout);
        }
        match &self.returning {
            Some(r) if r.key == *key => r.animation.value(),
            _ => Offset::ZERO,
        }
    }

    fn finish_returning(&mut self) {
        let Some(returning) = self.returning.take() else {
            return;
        };
        if let Some(cb) = &self.options.on_return_finished {
            cb(&returning.key);
        }
    }

    fn notify_drag_end(&self, session: &DragSession<K>) {
        if let Some(cb) = &self.options.on_drag_end {
            cb(session.start.index, session.dragged.index);
        }
    }
}

// Pointer-following offset of the dragged item relative to where the layout currently places it.
fn visual_offset<K: PartialEq, L: ListLayout<K> + ?Sized>(
    session: &DragSession<K>,
    layout: &L,
) -> Offset {
    let geometry = Geometry::of(layout);
    let orientation = geometry.orientation();
    let Some(item) = layout.find_by_key(&session.dragged.key) else {
        return session.current_offset;
    };
    let current = geometry.bounds(item).leading(orientation);
    let dragged = session.current_bounds().leading(orientation);
    Offset::on_axis(orientation, dragged - current)
}

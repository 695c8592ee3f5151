use std::time::Duration;

use reorderable::{DragCancelledAnimation, Offset};
use tokio::time::{Instant, MissedTickBehavior};

/// Default frame interval for [`animate`].
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Runs a cancelled-drag animation from `from` to zero on a timer.
///
/// `on_frame` receives every intermediate offset, the last one being exactly zero. `on_done` is
/// called exactly once: when the animation settles, or when this future is dropped before that
/// (for example because a new drag started on the same item).
pub async fn animate(
    animation: DragCancelledAnimation,
    from: Offset,
    on_frame: impl FnMut(Offset),
    on_done: impl FnOnce(),
) {
    animate_with_interval(animation, from, FRAME_INTERVAL, on_frame, on_done).await;
}

/// Same as [`animate`], with a custom frame interval.
pub async fn animate_with_interval(
    animation: DragCancelledAnimation,
    from: Offset,
    frame: Duration,
    mut on_frame: impl FnMut(Offset),
    on_done: impl FnOnce(),
) {
    let _done = OnDone(Some(on_done));

    let start = Instant::now();
    let mut frames = tokio::time::interval(frame.max(Duration::from_millis(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut running = animation.start(from, 0);
    loop {
        frames.tick().await;
        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        on_frame(running.advance(now_ms));
        if running.is_finished() {
            atrace!(now_ms, "return animation finished");
            break;
        }
    }
}

struct OnDone<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for OnDone<F> {
    fn drop(&mut self) {
        if let Some(done) = self.0.take() {
            done();
        }
    }
}

use core::future::Future;

use reorderable::{ScrollAnchor, ScrollRequest};
use tokio::sync::watch;

/// The host list's scroll primitives.
pub trait ScrollHost {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scrolls by `delta` raw pixels, resolving once the list has finished scrolling.
    ///
    /// Returns the distance actually consumed (less than `delta` at the ends of the list).
    fn scroll_by(&mut self, delta: f32) -> impl Future<Output = Result<f32, Self::Error>>;

    /// Jumps so that item `index` starts `offset` pixels before the viewport start.
    fn scroll_to_item(
        &mut self,
        index: usize,
        offset: f32,
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScrollLoopError<E> {
    /// The host's scroll primitive failed. Auto-scroll stops; the caller decides what's next.
    #[error("host scroll failed")]
    Host(#[source] E),
}

/// Creates the single-slot scroll request channel.
///
/// The slot always holds the most recent request: publishing replaces whatever the applier has
/// not picked up yet, so requests never queue up behind a slow host.
pub fn scroll_channel() -> (ScrollSender, ScrollReceiver) {
    let (tx, rx) = watch::channel(ScrollRequest::IDLE);
    (ScrollSender { tx }, ScrollReceiver { rx })
}

#[derive(Debug)]
pub struct ScrollSender {
    tx: watch::Sender<ScrollRequest>,
}

impl ScrollSender {
    /// Publishes `request`, superseding any pending one.
    pub fn request(&self, request: ScrollRequest) {
        self.tx.send_replace(request);
    }

    /// Publishes an idle request so the applier stops scrolling.
    pub fn stop(&self) {
        self.request(ScrollRequest::IDLE);
    }

    pub fn latest(&self) -> ScrollRequest {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ScrollReceiver {
        ScrollReceiver {
            rx: self.tx.subscribe(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollReceiver {
    rx: watch::Receiver<ScrollRequest>,
}

impl ScrollReceiver {
    pub fn latest(&self) -> ScrollRequest {
        *self.rx.borrow()
    }

    /// Waits for a request newer than the last one seen.
    ///
    /// Returns `None` once the sender is gone.
    pub async fn next(&mut self) -> Option<ScrollRequest> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Applies scroll requests to `host`, one at a time.
///
/// Each non-idle request is awaited to completion before the slot is read again, so at most one
/// scroll is in flight and stale requests are skipped. The loop sleeps while the slot is idle or
/// unchanged, and returns `Ok(())` when the sender is dropped.
///
/// Dropping the returned future cancels the in-flight scroll along with it.
pub async fn run_auto_scroll<H: ScrollHost>(
    requests: &mut ScrollReceiver,
    host: &mut H,
) -> Result<(), ScrollLoopError<H::Error>> {
    adebug!("auto-scroll loop started");
    loop {
        let request = *requests.rx.borrow_and_update();
        if !request.is_idle() {
            atrace!(delta = request.delta(), "scroll_by");
            if let Err(err) = host.scroll_by(request.delta()).await {
                awarn!(delta = request.delta(), "host scroll failed");
                return Err(ScrollLoopError::Host(err));
            }
        }
        if requests.rx.changed().await.is_err() {
            adebug!("auto-scroll loop stopped");
            return Ok(());
        }
    }
}

/// Applies a first-visible-item anchor reported by a drag update.
pub async fn apply_anchor<H: ScrollHost>(host: &mut H, anchor: ScrollAnchor) -> Result<(), H::Error> {
    atrace!(index = anchor.index, offset = anchor.offset, "scroll_to_item");
    host.scroll_to_item(anchor.index, anchor.offset).await
}

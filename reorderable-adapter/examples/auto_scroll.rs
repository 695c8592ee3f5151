use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reorderable::{
    DragCancelledAnimation, ItemPosition, LayoutSnapshot, Offset, Orientation, ReorderOptions,
    Viewport,
};
use reorderable_adapter::{Controller, ScrollHost, animate, run_auto_scroll};

const ROW: f32 = 40.0;
const ROWS: u32 = 100;
const VIEWPORT: f32 = 200.0;

/// A fake scroll container that takes one frame per scroll.
struct FakeList {
    scroll: Rc<Cell<f32>>,
    max_scroll: f32,
}

impl ScrollHost for FakeList {
    type Error = Infallible;

    async fn scroll_by(&mut self, delta: f32) -> Result<f32, Infallible> {
        tokio::time::sleep(Duration::from_millis(16)).await;
        let before = self.scroll.get();
        self.scroll.set((before + delta).clamp(0.0, self.max_scroll));
        Ok(self.scroll.get() - before)
    }

    async fn scroll_to_item(&mut self, index: usize, offset: f32) -> Result<(), Infallible> {
        self.scroll
            .set((index as f32 * ROW + offset).clamp(0.0, self.max_scroll));
        Ok(())
    }
}

/// The rows visible at `scroll`, with offsets relative to the viewport.
fn layout_at(order: &[u32], scroll: f32) -> LayoutSnapshot<u32> {
    let first = (scroll / ROW).floor() as usize;
    let visible = (VIEWPORT / ROW) as usize + 1;
    LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(VIEWPORT),
        first,
        first as f32 * ROW - scroll,
        order.iter().skip(first).take(visible).map(|key| (*key, ROW)),
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Example: hold a row past the bottom edge and let the scroll loop keep the list moving.
    //
    // An adapter would:
    // - forward pointer events to the controller
    // - run `run_auto_scroll` next to its UI loop
    // - re-lay out and call `on_visible_items_changed` whenever the list scrolls, which
    //   re-publishes the scroll request while the row is still past the edge
    let order = Arc::new(Mutex::new((0..ROWS).collect::<Vec<u32>>()));
    let options = ReorderOptions::new({
        let order = Arc::clone(&order);
        move |from: &ItemPosition<u32>, to: &ItemPosition<u32>| {
            let mut order = order.lock().unwrap();
            let key = order.remove(from.index);
            order.insert(to.index, key);
            println!("move {} -> {}", from.index, to.index);
        }
    })
    .with_drag_cancelled_animation(DragCancelledAnimation::default());
    let (mut controller, mut requests) = Controller::new(options);

    let scroll = Rc::new(Cell::new(0.0f32));
    let mut list = FakeList {
        scroll: Rc::clone(&scroll),
        max_scroll: ROWS as f32 * ROW - VIEWPORT,
    };

    // Pick up row 2 and drag it until it pokes 20px past the bottom edge.
    let layout = layout_at(&order.lock().unwrap(), scroll.get());
    assert!(controller.on_drag_start(&layout, 10.0, 100.0));
    let outcome = controller.on_drag(&layout, 0.0, 100.0).unwrap();
    println!("scroll request: {:?}", outcome.scroll);

    let driver = async {
        // The pointer stays put; each frame the list re-lays out and the drag is re-evaluated.
        for _ in 0..8 {
            tokio::time::sleep(Duration::from_millis(16)).await;
            let layout = layout_at(&order.lock().unwrap(), scroll.get());
            let outcome = controller.on_visible_items_changed(&layout).unwrap();
            println!("scrolled to {} request {:?}", scroll.get(), outcome.scroll);
        }

        let layout = layout_at(&order.lock().unwrap(), scroll.get());
        controller.on_drag_cancel(&layout, 0);
        let from = controller.offset_of(&2, &layout);
        drop(controller);
        from
    };
    let (result, from) = tokio::join!(run_auto_scroll(&mut requests, &mut list), driver);
    if let Err(err) = result {
        eprintln!("auto-scroll stopped: {err}");
    }
    println!("final scroll {}", scroll.get());

    let mut frames = 0;
    animate(
        DragCancelledAnimation::default(),
        from,
        |offset: Offset| {
            frames += 1;
            if frames % 4 == 0 {
                println!("return offset {:?}", offset);
            }
        },
        || println!("returned to rest"),
    )
    .await;
}

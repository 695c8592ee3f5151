// Example: drag the first row of a column two rows down.
use std::sync::{Arc, Mutex};

use reorderable::{
    DragCancelledAnimation, ItemPosition, LayoutSnapshot, Orientation, ReorderOptions,
    ReorderState, Viewport,
};

fn layout(order: &[&'static str]) -> LayoutSnapshot<&'static str> {
    LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(400.0),
        0,
        0.0,
        order.iter().map(|k| (*k, 50.0)),
    )
}

fn main() {
    let order = Arc::new(Mutex::new(vec!["A", "B", "C", "D"]));

    // The host owns the data; the engine only asks it to move rows.
    let options = ReorderOptions::new({
        let order = Arc::clone(&order);
        move |from: &ItemPosition<&'static str>, to: &ItemPosition<&'static str>| {
            let mut order = order.lock().unwrap();
            let item = order.remove(from.index);
            order.insert(to.index, item);
        }
    })
    .with_drag_cancelled_animation(DragCancelledAnimation::None);
    let mut state = ReorderState::new(options);

    let snapshot = layout(&order.lock().unwrap());
    assert!(state.on_drag_start(&snapshot, 10.0, 25.0));

    let outcome = state.on_drag(&snapshot, 0.0, 120.0).unwrap();
    println!("moved={:?} scroll={:?}", outcome.moved, outcome.scroll);

    // Next frame: the host re-lays out with the new order.
    let snapshot = layout(&order.lock().unwrap());
    println!(
        "order={:?} dragged offset={:?}",
        order.lock().unwrap(),
        state.offset_of(&"A", &snapshot)
    );

    println!("end={:?}", state.on_drag_end());
}

use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

type Key = &'static str;
type Moves = Arc<Mutex<Vec<(ItemPosition<Key>, ItemPosition<Key>)>>>;

fn column(keys: &[Key], size: f32, extent: f32) -> LayoutSnapshot<Key> {
    LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(extent),
        0,
        0.0,
        keys.iter().map(|k| (*k, size)),
    )
}

fn recording_options() -> (ReorderOptions<Key>, Moves) {
    let moves: Moves = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&moves);
    let options = ReorderOptions::new(move |from: &ItemPosition<Key>, to: &ItemPosition<Key>| {
        sink.lock().unwrap().push((from.clone(), to.clone()));
    })
    .with_drag_cancelled_animation(DragCancelledAnimation::None);
    (options, moves)
}

fn apply_move(order: &mut Vec<Key>, from: usize, to: usize) {
    let item = order.remove(from);
    order.insert(to, item);
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn geometry_normalizes_reverse_layout() {
    let item = VisibleItem::new(0, "a", 250.0, 50.0);
    let viewport = Viewport::with_extent(400.0);

    let regular = Geometry::new(Orientation::Vertical, false, false, viewport);
    assert_eq!(regular.bounds(&item).top, 250.0);
    assert_eq!(regular.bounds(&item).bottom, 300.0);

    let reversed = Geometry::new(Orientation::Vertical, true, false, viewport);
    let bounds = reversed.bounds(&item);
    assert_eq!(bounds.top, 100.0);
    assert_eq!(bounds.bottom, 150.0);
    assert_eq!(bounds.left, 0.0);
    assert_eq!(bounds.right, 0.0);
    assert_eq!(reversed.scroll_sign(), -1.0);
}

#[test]
fn geometry_rtl_only_flips_horizontal_lists() {
    let viewport = Viewport::with_extent(300.0);
    assert!(Geometry::new(Orientation::Horizontal, false, true, viewport).is_flipped());
    assert!(!Geometry::new(Orientation::Horizontal, true, true, viewport).is_flipped());
    assert!(!Geometry::new(Orientation::Vertical, false, true, viewport).is_flipped());

    let item = VisibleItem::new(3, "d", 20.0, 40.0);
    let bounds = Geometry::new(Orientation::Horizontal, false, true, viewport).bounds(&item);
    assert_eq!(bounds.left, 240.0);
    assert_eq!(bounds.right, 280.0);
    assert_eq!(bounds.top, 0.0);
    assert_eq!(bounds.bottom, 0.0);
    assert_eq!(bounds.width(), 40.0);
}

#[test]
fn geometry_flips_padded_viewport_bounds() {
    let viewport = Viewport::new(-10.0, 390.0, 400.0);
    let regular = Geometry::new(Orientation::Vertical, false, false, viewport);
    assert_eq!(regular.viewport_leading(), -10.0);
    assert_eq!(regular.viewport_trailing(), 390.0);

    let reversed = Geometry::new(Orientation::Vertical, true, false, viewport);
    assert_eq!(reversed.viewport_leading(), 10.0);
    assert_eq!(reversed.viewport_trailing(), 410.0);
}

#[test]
fn item_at_ignores_cross_axis() {
    let layout = column(&["a", "b", "c"], 50.0, 400.0);
    let hit = HitTester::new(&layout);
    assert_eq!(hit.item_at(9999.0, 75.0).map(|it| it.key), Some("b"));
    assert_eq!(hit.item_at(0.0, 50.0).map(|it| it.key), Some("b"));
    assert!(hit.item_at(0.0, 150.0).is_none());
    assert!(hit.item_at(0.0, -1.0).is_none());
}

#[test]
fn find_targets_excludes_the_dragged_item() {
    let layout = column(&["a", "b", "c"], 50.0, 400.0);
    let hit = HitTester::new(&layout);
    let dragged = ItemPosition::new(1, "b");
    assert!(hit.find_targets(0.0, 60.0, &dragged).is_empty());
    let targets = hit.find_targets(0.0, 110.0, &dragged);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].key, "c");
}

#[test]
fn choose_drop_item_prefers_closest_center_then_lower_index() {
    // Overlapping items (e.g. during a layout animation).
    let layout = LayoutSnapshot::new(Orientation::Vertical, Viewport::with_extent(400.0))
        .with_items(vec![
            VisibleItem::new(4, "e", 100.0, 50.0),
            VisibleItem::new(2, "c", 100.0, 50.0),
            VisibleItem::new(3, "d", 110.0, 50.0),
        ]);
    let hit = HitTester::new(&layout);
    let dragged = ItemPosition::new(0, "a");

    let candidates = hit.find_targets(0.0, 125.0, &dragged);
    assert_eq!(
        candidates.iter().map(|it| it.index).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
    let chosen = hit.choose_drop_item(&dragged, candidates, 0.0, 125.0, None);
    assert_eq!(chosen.map(|it| it.key), Some("c"));

    let no_c = |over: &ItemPosition<Key>, _: &ItemPosition<Key>| over.key != "c";
    let candidates = hit.find_targets(0.0, 125.0, &dragged);
    let chosen = hit.choose_drop_item(&dragged, candidates, 0.0, 125.0, Some(&no_c));
    assert_eq!(chosen.map(|it| it.key), Some("e"));

    let nothing = |_: &ItemPosition<Key>, _: &ItemPosition<Key>| false;
    let candidates = hit.find_targets(0.0, 125.0, &dragged);
    assert!(
        hit.choose_drop_item(&dragged, candidates, 0.0, 125.0, Some(&nothing))
            .is_none()
    );
}

#[test]
fn dragging_down_moves_onto_the_hovered_item() {
    let (options, moves) = recording_options();
    let mut state = ReorderState::new(options);
    let mut order = vec!["A", "B", "C", "D"];
    let layout = column(&order, 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 10.0, 25.0));
    assert_eq!(state.phase(), DragPhase::Dragging);

    let outcome = state.on_drag(&layout, 0.0, 120.0).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(0, "A"), ItemPosition::new(2, "C")))
    );
    assert!(outcome.scroll.is_idle());
    assert_eq!(moves.lock().unwrap().len(), 1);

    apply_move(&mut order, 0, 2);
    assert_eq!(order, vec!["B", "C", "A", "D"]);
    assert_eq!(state.dragged_index(), Some(2));
    assert_eq!(state.dragged_key(), Some(&"A"));

    // The reordered layout puts A at 100..150; it is drawn 20px lower to stay under the pointer.
    let layout = column(&order, 50.0, 400.0);
    let offset = state.offset_of(&"A", &layout);
    assert_eq!(offset, Offset::new(0.0, 20.0));

    let outcome = state.on_visible_items_changed(&layout).unwrap();
    assert!(outcome.moved.is_none());
    assert_eq!(moves.lock().unwrap().len(), 1);
}

#[test]
fn stale_snapshot_does_not_repeat_the_move() {
    let (options, moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    state.on_drag(&layout, 0.0, 120.0).unwrap();
    // The host has not re-laid out yet.
    let outcome = state.on_drag(&layout, 0.0, 1.0).unwrap();
    assert!(outcome.moved.is_none());
    assert_eq!(moves.lock().unwrap().len(), 1);
    let recorded = moves.lock().unwrap().clone();
    assert!(recorded.iter().all(|(from, to)| from.index != to.index));
}

#[test]
fn reversed_list_moves_in_visual_direction() {
    let (options, moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0).with_reverse_layout(true);

    // A is drawn at the bottom: 350..400.
    assert!(state.on_drag_start(&layout, 0.0, 375.0));
    assert_eq!(state.dragged_key(), Some(&"A"));

    let outcome = state.on_drag(&layout, 0.0, -120.0).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(0, "A"), ItemPosition::new(2, "C")))
    );
    assert_eq!(moves.lock().unwrap().len(), 1);
}

#[test]
fn drag_start_requires_an_item_and_rejects_nesting() {
    let started = Arc::new(AtomicUsize::new(0));
    let (options, _moves) = recording_options();
    let options = options.with_on_drag_start(Some({
        let started = Arc::clone(&started);
        move |index: usize, _x: f32, _y: f32| {
            assert_eq!(index, 1);
            started.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B"], 50.0, 400.0);

    assert!(!state.on_drag_start(&layout, 0.0, 300.0));
    assert_eq!(state.phase(), DragPhase::Idle);

    assert!(state.on_drag_start(&layout, 0.0, 60.0));
    let before = state.session().cloned();
    assert!(!state.on_drag_start(&layout, 0.0, 10.0));
    assert_eq!(state.session().cloned(), before);
    assert_eq!(started.load(Ordering::SeqCst), 1);
}

#[test]
fn drag_while_idle_is_a_no_op() {
    let (options, moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B"], 50.0, 400.0);
    assert_eq!(state.on_drag(&layout, 0.0, 80.0).unwrap(), DragOutcome::idle());
    assert_eq!(
        state.on_visible_items_changed(&layout).unwrap(),
        DragOutcome::idle()
    );
    assert!(state.on_drag_end().is_none());
    assert!(state.on_drag_cancel(&layout, 0).is_none());
    assert!(moves.lock().unwrap().is_empty());
}

#[test]
fn can_drag_over_blocks_targets() {
    let (options, moves) = recording_options();
    let options = options.with_can_drag_over(Some(
        |over: &ItemPosition<Key>, _dragging: &ItemPosition<Key>| over.key != "C",
    ));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    let outcome = state.on_drag(&layout, 0.0, 120.0).unwrap();
    assert!(outcome.moved.is_none());
    assert!(moves.lock().unwrap().is_empty());
    assert_eq!(state.dragged_index(), Some(0));
}

#[test]
fn failed_move_keeps_session_for_retry() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let options = ReorderOptions::new_fallible({
        let attempts = Arc::clone(&attempts);
        move |_from: &ItemPosition<Key>, _to: &ItemPosition<Key>| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("backing store busy".into())
            } else {
                Ok(())
            }
        }
    });
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    let err = state.on_drag(&layout, 0.0, 120.0).unwrap_err();
    assert!(matches!(err, ReorderError::MoveFailed { from: 0, to: 2, .. }));
    assert_eq!(state.phase(), DragPhase::Dragging);
    let session = state.session().unwrap();
    assert!(session.last_target.is_none());
    assert_eq!(session.dragged.index, 0);
    assert_eq!(session.current_offset, Offset::new(0.0, 120.0));

    let outcome = state.on_visible_items_changed(&layout).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(0, "A"), ItemPosition::new(2, "C")))
    );
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn auto_scroll_is_proportional_and_clamped() {
    let auto = AutoScroll::new(20.0);
    assert_eq!(auto.magnitude(0.0, 50.0), 0.0);
    assert!(approx(auto.magnitude(-5.0, 50.0), -2.0));
    assert!(approx(auto.magnitude(-50.0, 50.0), -20.0));
    assert!(approx(auto.magnitude(-500.0, 50.0), -20.0));
    assert!(approx(auto.magnitude(25.0, 50.0), 10.0));
    assert!(approx(auto.magnitude(1.0, 0.0), 20.0));
}

#[test]
fn dragging_past_the_top_requests_backward_scroll() {
    let (options, _moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(200.0),
        10,
        0.0,
        [("K", 50.0), ("L", 50.0), ("M", 50.0), ("N", 50.0)],
    );

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    let outcome = state.on_drag(&layout, 0.0, -5.0).unwrap();
    assert!(approx(outcome.scroll.delta(), -2.0));

    let outcome = state.on_drag(&layout, 0.0, -45.0).unwrap();
    assert!(approx(outcome.scroll.delta(), -20.0));

    let outcome = state.on_drag(&layout, 0.0, 50.0).unwrap();
    assert!(outcome.scroll.is_idle());
}

#[test]
fn auto_scroll_sign_follows_reverse_layout_and_density() {
    let (options, _moves) = recording_options();
    let mut state = ReorderState::new(options.with_density(2.0));
    let layout = column(&["A", "B", "C", "D"], 50.0, 200.0).with_reverse_layout(true);

    // D is drawn at the top (0..50); dragging it further up reveals higher indexes.
    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    assert_eq!(state.dragged_key(), Some(&"D"));
    let outcome = state.on_drag(&layout, 0.0, -100.0).unwrap();
    assert!(approx(outcome.scroll.delta(), 40.0));
}

#[test]
fn leading_edge_overflow_takes_precedence() {
    let (options, _moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(200.0),
        0,
        -20.0,
        [("A", 50.0), ("B", 50.0), ("C", 50.0)],
    );

    // A starts clipped at the top (-20..30); moving it down still scrolls back until it's inside.
    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    let outcome = state.on_drag(&layout, 0.0, 10.0).unwrap();
    assert!(approx(outcome.scroll.delta(), -4.0));
    let outcome = state.on_drag(&layout, 0.0, 15.0).unwrap();
    assert!(outcome.scroll.is_idle());
    assert!(state.on_drag_end().is_some());

    // Taller than the viewport: both edges out, the leading one decides.
    let tall = LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(100.0),
        0,
        -20.0,
        [("T", 150.0)],
    );
    assert!(state.on_drag_start(&tall, 0.0, 50.0));
    let outcome = state.on_drag(&tall, 0.0, 10.0).unwrap();
    assert!(approx(outcome.scroll.delta(), -20.0 * 10.0 / 150.0));
    let outcome = state.on_drag(&tall, 0.0, 15.0).unwrap();
    assert!(approx(outcome.scroll.delta(), 20.0 * 55.0 / 150.0));
}

#[test]
fn rtl_row_moves_and_scrolls_in_visual_direction() {
    let (options, moves) = recording_options();
    let mut state = ReorderState::new(options);
    let row = |keys: &[Key]| {
        LayoutSnapshot::stacked(
            Orientation::Horizontal,
            Viewport::with_extent(200.0),
            0,
            0.0,
            keys.iter().map(|k| (*k, 50.0)),
        )
        .with_rtl(true)
    };
    let mut order = vec!["A", "B", "C", "D"];

    // Right to left: A is drawn at 150..200, D at 0..50.
    let layout = row(order.as_slice());
    assert!(state.on_drag_start(&layout, 175.0, 10.0));
    assert_eq!(state.dragged_key(), Some(&"A"));

    // Cross-axis movement is ignored; A's center lands on B.
    let outcome = state.on_drag(&layout, -50.0, 30.0).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(0, "A"), ItemPosition::new(1, "B")))
    );
    assert!(outcome.scroll.is_idle());
    apply_move(&mut order, 0, 1);

    // Past the left edge: visually backward, but forward in raw scroll terms.
    let layout = row(order.as_slice());
    let outcome = state.on_drag(&layout, -120.0, 0.0).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(1, "A"), ItemPosition::new(3, "D")))
    );
    assert!(approx(outcome.scroll.delta(), 8.0));
    assert_eq!(moves.lock().unwrap().len(), 2);
    // Dragged to -20 while its laid-out slot is at 100..150.
    assert_eq!(state.offset_of(&"A", &layout), Offset::new(-120.0, 0.0));
}

#[test]
fn moving_the_first_visible_item_requests_an_anchor() {
    let (options, _moves) = recording_options();
    let mut state = ReorderState::new(options);
    let layout = LayoutSnapshot::stacked(
        Orientation::Vertical,
        Viewport::with_extent(400.0),
        5,
        -20.0,
        [("F", 50.0), ("G", 50.0), ("H", 50.0)],
    );

    assert!(state.on_drag_start(&layout, 0.0, 40.0));
    let outcome = state.on_drag(&layout, 0.0, 50.0).unwrap();
    assert_eq!(
        outcome.moved,
        Some((ItemPosition::new(6, "G"), ItemPosition::new(7, "H")))
    );
    assert!(outcome.anchor.is_none());
    assert!(state.on_drag_end().is_some());

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    let outcome = state.on_drag(&layout, 0.0, 50.0).unwrap();
    assert_eq!(outcome.moved.as_ref().map(|(from, _)| from.index), Some(5));
    assert_eq!(
        outcome.anchor,
        Some(ScrollAnchor {
            index: 5,
            offset: 20.0
        })
    );
}

#[test]
fn drag_end_commits_and_reports_indexes() {
    let ends = Arc::new(Mutex::new(Vec::new()));
    let (options, _moves) = recording_options();
    let options = options.with_on_drag_end(Some({
        let ends = Arc::clone(&ends);
        move |start: usize, end: usize| ends.lock().unwrap().push((start, end))
    }));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    state.on_drag(&layout, 0.0, 120.0).unwrap();
    assert_eq!(state.on_drag_end(), Some(DragEnd::Committed));
    assert_eq!(state.phase(), DragPhase::Idle);
    assert!(!state.is_returning());
    assert_eq!(state.offset_of(&"A", &layout), Offset::ZERO);
    assert_eq!(*ends.lock().unwrap(), vec![(0, 2)]);
}

#[test]
fn cancel_without_animation_snaps_on_next_frame() {
    let finished = Arc::new(AtomicUsize::new(0));
    let (options, _moves) = recording_options();
    let options = options.with_on_return_finished(Some({
        let finished = Arc::clone(&finished);
        move |key: &Key| {
            assert_eq!(*key, "A");
            finished.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    state.on_drag(&layout, 0.0, 30.0).unwrap();
    assert_eq!(state.on_drag_cancel(&layout, 100), Some(DragEnd::Cancelled));
    assert_eq!(state.phase(), DragPhase::Idle);

    assert_eq!(state.tick(116), AnimationTick::Finished);
    assert_eq!(state.offset_of(&"A", &layout), Offset::ZERO);
    assert_eq!(state.tick(132), AnimationTick::Idle);
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[test]
fn cancel_with_spring_settles_at_zero_once() {
    let finished = Arc::new(AtomicUsize::new(0));
    let (options, _moves) = recording_options();
    let options = options
        .with_drag_cancelled_animation(DragCancelledAnimation::default())
        .with_on_return_finished(Some({
            let finished = Arc::clone(&finished);
            move |_: &Key| {
                finished.fetch_add(1, Ordering::SeqCst);
            }
        }));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 60.0));
    state.on_drag(&layout, 0.0, 20.0).unwrap();
    state.on_drag_cancel(&layout, 0);
    assert_eq!(state.offset_of(&"B", &layout), Offset::new(0.0, 20.0));

    let mut now_ms = 0;
    let mut last = 20.0f32;
    let mut frames = 0;
    loop {
        now_ms += 16;
        match state.tick(now_ms) {
            AnimationTick::Running(offset) => {
                assert!(offset.y <= last + 1e-3);
                last = offset.y;
            }
            AnimationTick::Finished => break,
            AnimationTick::Idle => panic!("animation stopped without finishing"),
        }
        frames += 1;
        assert!(frames < 300, "spring never settled");
    }
    assert_eq!(state.offset_of(&"B", &layout), Offset::ZERO);
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[test]
fn springs_settle_for_any_damping_and_stiffness() {
    for damping_ratio in [0.2, 1.0, 5.0, 20.0] {
        for stiffness in [50.0, 1_500.0, 10_000.0, 200_000.0] {
            let spring = DragCancelledAnimation::Spring(SpringSpec::new(damping_ratio, stiffness));
            let mut animation = spring.start(Offset::new(0.0, 40.0), 0);
            let mut now_ms = 0;
            let mut frames = 0;
            while !animation.is_finished() {
                now_ms += 16;
                let value = animation.advance(now_ms);
                assert!(
                    value.x.is_finite() && value.y.is_finite(),
                    "damping {damping_ratio}, stiffness {stiffness}: {value:?}"
                );
                frames += 1;
                assert!(
                    frames < 2_000,
                    "damping {damping_ratio}, stiffness {stiffness} never settled"
                );
            }
            assert_eq!(animation.value(), Offset::ZERO);
        }
    }
}

#[test]
fn spring_survives_a_long_frame_gap() {
    let spring = DragCancelledAnimation::Spring(SpringSpec::new(0.2, 200_000.0));
    let mut animation = spring.start(Offset::new(30.0, -40.0), 0);
    assert_eq!(animation.advance(u64::MAX), Offset::ZERO);
    assert!(animation.is_finished());
}

#[test]
fn undamped_spring_still_settles() {
    let spring = DragCancelledAnimation::Spring(SpringSpec::new(0.0, 1_500.0));
    let mut animation = spring.start(Offset::new(0.0, 40.0), 0);
    let mut now_ms = 0;
    while !animation.is_finished() {
        now_ms += 16;
        animation.advance(now_ms);
        assert!(now_ms < 60_000, "undamped spring never settled");
    }
}

#[test]
fn new_drag_on_the_same_key_interrupts_the_return_animation() {
    let finished = Arc::new(AtomicUsize::new(0));
    let (options, _moves) = recording_options();
    let options = options
        .with_drag_cancelled_animation(DragCancelledAnimation::Tween(TweenSpec::new(
            200,
            Easing::Linear,
        )))
        .with_on_return_finished(Some({
            let finished = Arc::clone(&finished);
            move |_: &Key| {
                finished.fetch_add(1, Ordering::SeqCst);
            }
        }));
    let mut state = ReorderState::new(options);
    let layout = column(&["A", "B", "C", "D"], 50.0, 400.0);

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    state.on_drag(&layout, 0.0, 40.0).unwrap();
    state.on_drag_cancel(&layout, 0);
    assert_eq!(state.tick(100), AnimationTick::Running(Offset::new(0.0, 20.0)));

    assert!(state.on_drag_start(&layout, 0.0, 10.0));
    assert!(!state.is_returning());
    assert_eq!(finished.load(Ordering::SeqCst), 1);
    assert_eq!(state.tick(116), AnimationTick::Idle);
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[test]
fn tween_follows_easing() {
    let tween = DragCancelledAnimation::Tween(TweenSpec::new(100, Easing::Linear));
    let mut animation = tween.start(Offset::new(0.0, 40.0), 1_000);
    assert_eq!(animation.advance(1_025), Offset::new(0.0, 30.0));
    assert!(!animation.is_finished());
    assert_eq!(animation.advance(1_100), Offset::ZERO);
    assert!(animation.is_finished());
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::FastOutSlowIn,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
    ] {
        assert!(approx(easing.sample(0.0), 0.0), "{easing:?} at 0");
        assert!(approx(easing.sample(1.0), 1.0), "{easing:?} at 1");
    }
    // Fast out: ahead of linear in the first half.
    assert!(Easing::FastOutSlowIn.sample(0.3) > 0.3);
}

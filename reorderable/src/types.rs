use core::ops::{Add, AddAssign, Neg, Sub};

/// The axis a list scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// A 2D offset in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds an offset that only moves along `orientation`'s main axis.
    pub fn on_axis(orientation: Orientation, main: f32) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(0.0, main),
            Orientation::Horizontal => Self::new(main, 0.0),
        }
    }

    /// The component along `orientation`'s main axis.
    pub fn main(self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// Drops the cross-axis component.
    pub fn project(self, orientation: Orientation) -> Self {
        Self::on_axis(orientation, self.main(orientation))
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Identity of a list item as seen by the engine.
///
/// `index` is the current display position; `key` is stable across reordering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition<K> {
    pub index: usize,
    pub key: K,
}

impl<K> ItemPosition<K> {
    pub fn new(index: usize, key: K) -> Self {
        Self { index, key }
    }
}

/// Layout of one rendered item, as reported by the host list.
///
/// `offset` is measured from the layout start along the main axis: from the top/left edge for a
/// regular list, and from the bottom/right edge when the list is reversed (or is a right-to-left
/// row). Normalizing this is [`crate::Geometry`]'s job.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem<K> {
    pub index: usize,
    pub key: K,
    pub offset: f32,
    /// Size in the scroll axis.
    pub size: f32,
}

impl<K> VisibleItem<K> {
    pub fn new(index: usize, key: K, offset: f32, size: f32) -> Self {
        Self {
            index,
            key,
            offset,
            size,
        }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.size
    }
}

impl<K: Clone> VisibleItem<K> {
    pub fn position(&self) -> ItemPosition<K> {
        ItemPosition::new(self.index, self.key.clone())
    }
}

/// Raw viewport bounds along the main axis, in the same space as [`VisibleItem::offset`].
///
/// `start`/`end` may extend past `0..extent` when the host list has content padding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub start: f32,
    pub end: f32,
    /// Main-axis size of the viewport.
    pub extent: f32,
}

impl Viewport {
    pub fn new(start: f32, end: f32, extent: f32) -> Self {
        Self { start, end, extent }
    }

    /// A viewport without content padding.
    pub fn with_extent(extent: f32) -> Self {
        Self::new(0.0, extent, extent)
    }
}

/// A signed scroll delta for the host's `scroll_by` primitive, already in the host's raw scroll
/// direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest(pub f32);

impl ScrollRequest {
    pub const IDLE: Self = Self(0.0);

    pub fn delta(self) -> f32 {
        self.0
    }

    pub fn is_idle(self) -> bool {
        self.0 == 0.0
    }
}

/// A `scroll_to_item(index, offset)` request that keeps the first visible item in place when a
/// move involves it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub index: usize,
    pub offset: f32,
}

/// What a single drag update produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DragOutcome<K> {
    /// The `(from, to)` pair passed to `on_move`, if a move happened.
    pub moved: Option<(ItemPosition<K>, ItemPosition<K>)>,
    pub scroll: ScrollRequest,
    pub anchor: Option<ScrollAnchor>,
}

impl<K> DragOutcome<K> {
    pub fn idle() -> Self {
        Self {
            moved: None,
            scroll: ScrollRequest::IDLE,
            anchor: None,
        }
    }
}

impl<K> Default for DragOutcome<K> {
    fn default() -> Self {
        Self::idle()
    }
}

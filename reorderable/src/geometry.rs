use crate::{ListLayout, Offset, Orientation, Viewport, VisibleItem};

/// An item rectangle in normalized (visual) viewport space.
///
/// Only the main-axis edges carry information; the cross-axis edges are always zero. In this
/// space "leading" always means the visual top (vertical lists) or left (horizontal lists) edge,
/// whatever the host's reverse-layout or right-to-left settings are.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ItemBounds {
    /// Builds bounds spanning `leading..trailing` on `orientation`'s main axis.
    pub fn on_axis(orientation: Orientation, leading: f32, trailing: f32) -> Self {
        match orientation {
            Orientation::Vertical => Self {
                left: 0.0,
                top: leading,
                right: 0.0,
                bottom: trailing,
            },
            Orientation::Horizontal => Self {
                left: leading,
                top: 0.0,
                right: trailing,
                bottom: 0.0,
            },
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    pub fn trailing(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    pub fn extent(&self, orientation: Orientation) -> f32 {
        self.trailing(orientation) - self.leading(orientation)
    }

    pub fn center(&self, orientation: Orientation) -> f32 {
        (self.leading(orientation) + self.trailing(orientation)) / 2.0
    }

    /// Half-open containment test along the main axis.
    pub fn contains(&self, orientation: Orientation, main: f32) -> bool {
        self.leading(orientation) <= main && main < self.trailing(orientation)
    }

    pub fn translate(&self, by: Offset) -> Self {
        Self {
            left: self.left + by.x,
            top: self.top + by.y,
            right: self.right + by.x,
            bottom: self.bottom + by.y,
        }
    }
}

/// Maps raw host layout values into the orientation-agnostic space the rest of the engine uses.
///
/// This is a pure per-call transform; capture it from the current layout whenever you need it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    orientation: Orientation,
    flipped: bool,
    viewport: Viewport,
}

impl Geometry {
    /// `rtl` only matters for horizontal lists.
    pub fn new(orientation: Orientation, reverse_layout: bool, rtl: bool, viewport: Viewport) -> Self {
        let flipped = match orientation {
            Orientation::Vertical => reverse_layout,
            Orientation::Horizontal => reverse_layout ^ rtl,
        };
        Self {
            orientation,
            flipped,
            viewport,
        }
    }

    pub fn of<K>(layout: &(impl ListLayout<K> + ?Sized)) -> Self {
        Self::new(
            layout.orientation(),
            layout.reverse_layout(),
            layout.is_rtl(),
            layout.viewport(),
        )
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether raw offsets run against the visual reading direction.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn leading(&self, offset: f32, size: f32) -> f32 {
        if self.flipped {
            self.viewport.extent - offset - size
        } else {
            offset
        }
    }

    pub fn trailing(&self, offset: f32, size: f32) -> f32 {
        if self.flipped {
            self.viewport.extent - offset
        } else {
            offset + size
        }
    }

    pub fn bounds<K>(&self, item: &VisibleItem<K>) -> ItemBounds {
        ItemBounds::on_axis(
            self.orientation,
            self.leading(item.offset, item.size),
            self.trailing(item.offset, item.size),
        )
    }

    pub fn viewport_leading(&self) -> f32 {
        if self.flipped {
            self.viewport.extent - self.viewport.end
        } else {
            self.viewport.start
        }
    }

    pub fn viewport_trailing(&self) -> f32 {
        if self.flipped {
            self.viewport.extent - self.viewport.start
        } else {
            self.viewport.end
        }
    }

    /// Projects a pointer position onto the main axis; the cross-axis coordinate is dropped.
    pub fn project(&self, x: f32, y: f32) -> f32 {
        Offset::new(x, y).main(self.orientation)
    }

    /// Converts a visual scroll delta (positive reveals content past the trailing edge) into the
    /// host's raw `scroll_by` direction.
    pub fn scroll_sign(&self) -> f32 {
        if self.flipped { -1.0 } else { 1.0 }
    }
}

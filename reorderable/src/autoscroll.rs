use crate::{Geometry, ItemBounds, ScrollRequest};

/// Edge-triggered auto-scroll math.
///
/// While a dragged item pokes out of the viewport, the requested scroll grows with how deep it
/// has crossed the edge (relative to the item's own extent) and saturates at `max_per_frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScroll {
    max_per_frame: f32,
}

impl AutoScroll {
    /// `max_per_frame` is in viewport pixels; negative values are treated as their magnitude.
    pub fn new(max_per_frame: f32) -> Self {
        Self {
            max_per_frame: max_per_frame.abs(),
        }
    }

    pub fn max_per_frame(&self) -> f32 {
        self.max_per_frame
    }

    /// Signed penetration of `dragged` past the viewport bounds, in visual space.
    ///
    /// Negative when the leading edge is before the viewport's leading bound, positive when the
    /// trailing edge is past the trailing bound, zero otherwise.
    ///
    /// The leading edge is checked first, regardless of drag direction. An item clipped at the
    /// leading edge keeps requesting backward scroll until its leading edge is back inside, even
    /// while it is dragged towards the trailing edge. An item larger than the viewport only
    /// scrolls forward once its leading edge is inside.
    pub fn penetration(geometry: &Geometry, dragged: &ItemBounds) -> f32 {
        let orientation = geometry.orientation();
        let leading = dragged.leading(orientation);
        let trailing = dragged.trailing(orientation);
        let viewport_leading = geometry.viewport_leading();
        let viewport_trailing = geometry.viewport_trailing();
        if leading < viewport_leading {
            leading - viewport_leading
        } else if trailing > viewport_trailing {
            trailing - viewport_trailing
        } else {
            0.0
        }
    }

    /// Visual scroll magnitude for a signed `penetration`, clamped to `±max_per_frame`.
    ///
    /// `item_extent` scales the ramp: the cap is reached once the whole item is out.
    pub fn magnitude(&self, penetration: f32, item_extent: f32) -> f32 {
        if penetration == 0.0 || !penetration.is_finite() {
            return 0.0;
        }
        let ratio = if item_extent > 0.0 {
            (penetration.abs() / item_extent).min(1.0)
        } else {
            1.0
        };
        penetration.signum() * self.max_per_frame * ratio
    }

    /// The scroll request for `dragged`, in the host's raw scroll direction.
    ///
    /// `scroll_sign` is captured once per drag session from [`Geometry::scroll_sign`].
    pub fn request(&self, geometry: &Geometry, dragged: &ItemBounds, scroll_sign: f32) -> ScrollRequest {
        let penetration = Self::penetration(geometry, dragged);
        let magnitude = self.magnitude(penetration, dragged.extent(geometry.orientation()));
        if magnitude == 0.0 {
            return ScrollRequest::IDLE;
        }
        ScrollRequest(magnitude * scroll_sign)
    }
}

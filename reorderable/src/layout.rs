use crate::{Orientation, Viewport, VisibleItem};

/// The per-frame layout information a host list exposes to the engine.
///
/// Implement this for your list widget's layout info (or fill a [`LayoutSnapshot`]). The engine
/// only reads from it; it never mutates the host list.
///
/// `visible_items` must not contain duplicate keys.
pub trait ListLayout<K> {
    fn orientation(&self) -> Orientation;

    fn reverse_layout(&self) -> bool;

    /// Effective right-to-left layout direction. Only horizontal lists are affected.
    fn is_rtl(&self) -> bool {
        false
    }

    fn viewport(&self) -> Viewport;

    fn visible_items(&self) -> &[VisibleItem<K>];

    /// The visible item with the lowest index.
    fn first_visible(&self) -> Option<&VisibleItem<K>> {
        self.visible_items().iter().min_by_key(|it| it.index)
    }

    fn find_by_key(&self, key: &K) -> Option<&VisibleItem<K>>
    where
        K: PartialEq,
    {
        self.visible_items().iter().find(|it| it.key == *key)
    }
}

/// An owned layout snapshot, captured from the host list once per frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot<K> {
    pub orientation: Orientation,
    pub reverse_layout: bool,
    pub rtl: bool,
    pub viewport: Viewport,
    pub items: Vec<VisibleItem<K>>,
}

impl<K> LayoutSnapshot<K> {
    pub fn new(orientation: Orientation, viewport: Viewport) -> Self {
        Self {
            orientation,
            reverse_layout: false,
            rtl: false,
            viewport,
            items: Vec::new(),
        }
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_items(mut self, items: Vec<VisibleItem<K>>) -> Self {
        self.items = items;
        self
    }

    pub fn push(&mut self, item: VisibleItem<K>) {
        self.items.push(item);
    }

    /// Lays out `keys` back to back starting at `first_index`, with the first one at
    /// `first_offset`.
    ///
    /// Handy for hosts with uniform rows and for tests.
    pub fn stacked(
        orientation: Orientation,
        viewport: Viewport,
        first_index: usize,
        first_offset: f32,
        keys: impl IntoIterator<Item = (K, f32)>,
    ) -> Self {
        let mut snapshot = Self::new(orientation, viewport);
        let mut offset = first_offset;
        for (i, (key, size)) in keys.into_iter().enumerate() {
            snapshot.push(VisibleItem::new(first_index + i, key, offset, size));
            offset += size;
        }
        snapshot
    }
}

impl<K> ListLayout<K> for LayoutSnapshot<K> {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn reverse_layout(&self) -> bool {
        self.reverse_layout
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn visible_items(&self) -> &[VisibleItem<K>] {
        &self.items
    }
}

//! An arena of drawable items.
//!
//! Controls describe what they draw as a [`Scene`]: a list of [`Item`]s
//! addressed by [`ItemId`], with an optional logical name for each item,
//! such as `"hue"` for the hue marker of a color wheel. A toolkit
//! integration walks the items in order and draws them, back to front.

use std::collections::HashMap;

use image::RgbaImage;

use crate::Float;

/// A point in screen coordinates, with x growing to the right and y growing
/// downward.
pub type Point = (Float, Float);

/// The identifier of an item in a scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Get the item's index, which also is its drawing order.
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// An axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub left: Float,
    pub top: Float,
    pub right: Float,
    pub bottom: Float,
}

impl Bounds {
    /// Create the bounding box of a circle.
    pub fn around(center: Point, radius: Float) -> Self {
        let (x, y) = center;
        Self {
            left: x - radius,
            top: y - radius,
            right: x + radius,
            bottom: y + radius,
        }
    }

    /// Get the center.
    pub fn center(&self) -> Point {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Move by the given offset.
    #[must_use = "method returns new bounds and does not mutate original value"]
    pub fn translate(&self, dx: Float, dy: Float) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// A drawable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A pixel buffer with its top-left corner at the origin.
    Image { origin: Point, pixels: RgbaImage },
    /// An ellipse inscribed into the bounds, with optional fill and outline.
    Oval {
        bounds: Bounds,
        fill: Option<[Float; 3]>,
        outline: Option<[Float; 3]>,
    },
}

impl Shape {
    /// Move by the given offset.
    pub fn translate(&mut self, dx: Float, dy: Float) {
        match self {
            Self::Image { origin, .. } => {
                origin.0 += dx;
                origin.1 += dy;
            }
            Self::Oval { bounds, .. } => *bounds = bounds.translate(dx, dy),
        }
    }
}

/// An item in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub name: Option<String>,
    pub shape: Shape,
}

/// An arena of drawable items.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    items: Vec<Item>,
    names: HashMap<String, ItemId>,
}

impl Scene {
    /// Create a new, empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to the scene.
    ///
    /// If the name is already in use, it is reassigned to the new item.
    pub fn add(&mut self, name: Option<&str>, shape: Shape) -> ItemId {
        let id = ItemId(self.items.len());
        if let Some(name) = name {
            self.names.insert(name.to_string(), id);
        }
        self.items.push(Item {
            name: name.map(str::to_string),
            shape,
        });
        id
    }

    /// Look up the identifier for a name.
    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.names.get(name).copied()
    }

    /// Get the item with the given identifier.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Get the item with the given identifier for modification.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0)
    }

    /// Get the item with the given name.
    pub fn by_name(&self, name: &str) -> Option<&Item> {
        self.id(name).and_then(|id| self.get(id))
    }

    /// Move the item by the given offset.
    ///
    /// This method returns `false` if there is no such item.
    pub fn move_by(&mut self, id: ItemId, dx: Float, dy: Float) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.shape.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Replace the pixels of an image item.
    ///
    /// This method returns `false` if there is no such item or the item is
    /// not an image.
    pub fn replace_image(&mut self, id: ItemId, image: RgbaImage) -> bool {
        match self.get_mut(id) {
            Some(Item {
                shape: Shape::Image { pixels, .. },
                ..
            }) => {
                *pixels = image;
                true
            }
            _ => false,
        }
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Determine whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId(index), item))
    }
}

//! Pointer input and dragging planets around.

use crate::bodies::Planet;

use euclid::default::{Point2D, Vector2D};

/// What the pointer did this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub position: Point2D<f64>,
    /// The button went down since the last tick
    pub pressed: bool,
    /// The button came up since the last tick
    pub released: bool,
}

impl PointerInput {
    /// Just hovering.
    pub fn at(position: Point2D<f64>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// The planet being dragged, and where it sits relative to the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drag {
    pub planet: usize,
    pub offset: Vector2D<f64>,
}

/// Whether `pointer` is on the planet. The rim counts.
pub fn hit_test(planet: &Planet, pointer: Point2D<f64>) -> bool {
    (pointer - planet.position).length() <= planet.radius
}

/// The first draggable planet under the pointer, ready to be dragged.
pub fn pick(planets: &[Planet], pointer: Point2D<f64>) -> Option<Drag> {
    planets
        .iter()
        .position(|p| p.draggable && hit_test(p, pointer))
        .map(|idx| Drag {
            planet: idx,
            offset: planets[idx].position - pointer,
        })
}

impl Drag {
    /// Where the dragged planet should be for this pointer position.
    pub fn target(&self, pointer: Point2D<f64>) -> Point2D<f64> {
        pointer + self.offset
    }
}

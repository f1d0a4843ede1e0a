//! The draw-call boundary between the simulation and whatever paints pixels.

use crate::geometry::{self, lerp_color, Color, Quad, RingMesh};

use euclid::default::Point2D;

/// Something that accepts flat-colored geometry.
/// All coordinates are absolute.
pub trait Canvas {
    /// A triangle fan: `fan[0]` is the center, the rest walk the rim.
    fn emit_disk(&mut self, fan: &[Point2D<f64>], color: Color);
    /// Two triangles: (0, 1, 2) and (0, 2, 3).
    fn emit_quad(&mut self, quad: &Quad, color: Color);
    /// An indexed triangle list.
    fn emit_ring(&mut self, vertices: &[Point2D<f64>], indices: &[u32], color: Color);

    fn fill_disk(&mut self, center: Point2D<f64>, radius: f64, color: Color) {
        let fan = geometry::disk_fan(center, radius, geometry::DISK_SEGMENTS);
        self.emit_disk(&fan, color);
    }

    /// Nested disks from `outer` at the rim to `inner` at the center.
    fn gradient_disk(
        &mut self,
        center: Point2D<f64>,
        radius: f64,
        inner: Color,
        outer: Color,
        steps: usize,
    ) {
        let last = steps.saturating_sub(1).max(1) as f64;
        for i in 0..steps {
            let t = i as f64 / last;
            self.fill_disk(center, radius * (1.0 - t), lerp_color(outer, inner, t));
        }
    }

    fn thick_line(&mut self, p1: Point2D<f64>, p2: Point2D<f64>, thickness: f64, color: Color) {
        if let Some(quad) = geometry::thick_line(p1, p2, thickness) {
            self.emit_quad(&quad, color);
        }
    }

    /// Three passes, wide and faint to thin and bright.
    fn glowing_line(
        &mut self,
        p1: Point2D<f64>,
        p2: Point2D<f64>,
        glow: Color,
        mid: Color,
        core: Color,
    ) {
        self.thick_line(p1, p2, 4.0, glow);
        self.thick_line(p1, p2, 2.0, mid);
        self.thick_line(p1, p2, 1.0, core);
    }

    fn circle_outline(&mut self, center: Point2D<f64>, radius: f64, thickness: f64, color: Color) {
        for quad in geometry::circle_outline(center, radius, thickness) {
            self.emit_quad(&quad, color);
        }
    }

    fn ring(&mut self, center: Point2D<f64>, mesh: &RingMesh, color: Color) {
        let vertices = mesh.flatten(center);
        self.emit_ring(&vertices, &mesh.indices, color);
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Disk {
        fan: Vec<Point2D<f64>>,
        color: Color,
    },
    Quad {
        corners: Quad,
        color: Color,
    },
    Ring {
        vertices: Vec<Point2D<f64>>,
        indices: Vec<u32>,
        color: Color,
    },
}

impl DrawCall {
    pub fn color(&self) -> Color {
        match self {
            DrawCall::Disk { color, .. }
            | DrawCall::Quad { color, .. }
            | DrawCall::Ring { color, .. } => *color,
        }
    }

    /// Expand into a flat triangle list.
    pub fn triangles(&self) -> Vec<[Point2D<f64>; 3]> {
        match self {
            DrawCall::Disk { fan, .. } => {
                if fan.len() < 3 {
                    return Vec::new();
                }
                fan[1..]
                    .windows(2)
                    .map(|rim| [fan[0], rim[0], rim[1]])
                    .collect()
            }
            DrawCall::Quad { corners: c, .. } => vec![[c[0], c[1], c[2]], [c[0], c[2], c[3]]],
            DrawCall::Ring {
                vertices, indices, ..
            } => indices
                .chunks_exact(3)
                .map(|tri| {
                    [
                        vertices[tri[0] as usize],
                        vertices[tri[1] as usize],
                        vertices[tri[2] as usize],
                    ]
                })
                .collect(),
        }
    }
}

/// A Canvas that just remembers everything, in order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl Canvas for DrawList {
    fn emit_disk(&mut self, fan: &[Point2D<f64>], color: Color) {
        self.calls.push(DrawCall::Disk {
            fan: fan.to_vec(),
            color,
        });
    }

    fn emit_quad(&mut self, quad: &Quad, color: Color) {
        self.calls.push(DrawCall::Quad {
            corners: *quad,
            color,
        });
    }

    fn emit_ring(&mut self, vertices: &[Point2D<f64>], indices: &[u32], color: Color) {
        self.calls.push(DrawCall::Ring {
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
            color,
        });
    }
}

//! Pure geometry: colors, tessellation and ray casting.
//! Nothing in here knows about bodies or the simulation.

use euclid::default::{Point2D, Point3D, Vector2D};

use std::f64::consts::PI;

/// How many rim vertices a filled disk gets.
pub const DISK_SEGMENTS: usize = 30;
/// How many samples a circle outline gets.
pub const OUTLINE_SEGMENTS: usize = 60;

/// Four corners of a thick line, in winding order.
pub type Quad = [Point2D<f64>; 4];

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color is stored as 0xRRGGBBAA
    pub const fn from_rgba_u32(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::new(255, 255, 255, 255);
}

/// Per-channel linear blend from `c1` (t = 0) to `c2` (t = 1).
/// `t` is not clamped; channels are truncated toward zero.
pub fn lerp_color(c1: Color, c2: Color, t: f64) -> Color {
    let channel = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)) as u8;
    Color {
        r: channel(c1.r, c2.r),
        g: channel(c1.g, c2.g),
        b: channel(c1.b, c2.b),
        a: channel(c1.a, c2.a),
    }
}

/// A point `radius` away from `center` in direction `angle`.
pub fn polar(center: Point2D<f64>, radius: f64, angle: f64) -> Point2D<f64> {
    center + Vector2D::new(angle.cos(), angle.sin()) * radius
}

/// Triangle fan for a filled disk.
/// Element 0 is the center, followed by `segments + 1` rim vertices
/// (the last one closes the rim on the first).
pub fn disk_fan(center: Point2D<f64>, radius: f64, segments: usize) -> Vec<Point2D<f64>> {
    let mut fan = Vec::with_capacity(segments + 2);
    fan.push(center);
    fan.extend((0..=segments).map(|i| {
        let theta = 2.0 * PI * i as f64 / segments as f64;
        polar(center, radius, theta)
    }));
    fan
}

/// The quad covering a line of the given thickness from `p1` to `p2`.
/// Returns None for a zero-length segment, since it has no normal.
pub fn thick_line(p1: Point2D<f64>, p2: Point2D<f64>, thickness: f64) -> Option<Quad> {
    let d = p2 - p1;
    let length = d.length();
    if length == 0.0 {
        return None;
    }
    let normal = Vector2D::new(-d.y / length, d.x / length) * (thickness / 2.0);
    Some([p1 + normal, p2 + normal, p2 - normal, p1 - normal])
}

/// Thick line segments approximating a circle outline.
pub fn circle_outline(center: Point2D<f64>, radius: f64, thickness: f64) -> Vec<Quad> {
    let points: Vec<Point2D<f64>> = (0..OUTLINE_SEGMENTS)
        .map(|i| polar(center, radius, 2.0 * PI * i as f64 / OUTLINE_SEGMENTS as f64))
        .collect();
    (0..OUTLINE_SEGMENTS)
        .filter_map(|i| {
            let next = (i + 1) % OUTLINE_SEGMENTS;
            thick_line(points[i], points[next], thickness)
        })
        .collect()
}

/// Orientation of a ring band.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation about the X axis. Seen from above, the ring gets squashed by cos(inclination).
    pub inclination: f64,
    /// Rotation within the XZ plane, applied after the inclination.
    pub roll: f64,
}

/// A triangulated annulus.
/// Vertex `2i` is on the outer edge and `2i + 1` on the inner edge of angular step `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct RingMesh {
    pub vertices: Vec<Point3D<f64>>,
    pub indices: Vec<u32>,
}

impl RingMesh {
    /// Drop the mesh onto the screen plane around `center`, reading (x, z) as (x, y).
    pub fn flatten(&self, center: Point2D<f64>) -> Vec<Point2D<f64>> {
        self.vertices
            .iter()
            .map(|v| Point2D::new(center.x + v.x, center.y + v.z))
            .collect()
    }
}

/// Build an annulus on the XZ plane centered on the origin.
pub fn ring_band(inner_radius: f64, outer_radius: f64, segments: usize, tilt: Tilt) -> RingMesh {
    let (sin_i, cos_i) = tilt.inclination.sin_cos();
    let (sin_r, cos_r) = tilt.roll.sin_cos();
    let place = |radius: f64, theta: f64| {
        let x = radius * theta.cos();
        let z = radius * theta.sin();
        // Rotate about X, then roll in the plane
        let y = -z * sin_i;
        let z = z * cos_i;
        Point3D::new(x * cos_r - z * sin_r, y, x * sin_r + z * cos_r)
    };

    let mut vertices = Vec::with_capacity(segments * 2);
    for i in 0..segments {
        let theta = 2.0 * PI * i as f64 / segments as f64;
        vertices.push(place(outer_radius, theta));
        vertices.push(place(inner_radius, theta));
    }

    let mut indices = Vec::with_capacity(segments * 6);
    for i in 0..segments {
        let next = (i + 1) % segments;
        let outer = (i * 2) as u32;
        let inner = outer + 1;
        let next_outer = (next * 2) as u32;
        let next_inner = next_outer + 1;
        indices.extend_from_slice(&[outer, next_outer, inner, inner, next_outer, next_inner]);
    }

    RingMesh { vertices, indices }
}

/// Lift a planar point onto the XZ plane.
pub fn on_xz_plane(p: Point2D<f64>) -> Point3D<f64> {
    Point3D::new(p.x, 0.0, p.y)
}

/// Both roots of |origin + t·dir - center|² = radius², near one first.
/// `dir` must be a unit vector. None when the discriminant is negative.
pub fn ray_sphere_roots(
    origin: Point2D<f64>,
    dir: Vector2D<f64>,
    center: Point2D<f64>,
    radius: f64,
) -> Option<(f64, f64)> {
    let oc = origin - center;
    let b = 2.0 * dir.dot(oc);
    let c = oc.square_length() - radius * radius;
    let disc = b * b - 4.0 * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some(((-b - sqrt_disc) / 2.0, (-b + sqrt_disc) / 2.0))
}

/// Distance along the ray to the sphere, preferring the near side.
/// None if the sphere is missed or entirely behind the origin.
pub fn ray_sphere(
    origin: Point2D<f64>,
    dir: Vector2D<f64>,
    center: Point2D<f64>,
    radius: f64,
) -> Option<f64> {
    let (t1, t2) = ray_sphere_roots(origin, dir, center, radius)?;
    let t = if t1 > 0.0 { t1 } else { t2 };
    if t > 0.0 {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn horizontal_thick_line_has_vertical_normal() {
        let quad = thick_line(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), 2.0).unwrap();
        assert_eq!(
            quad,
            [
                Point2D::new(0.0, 1.0),
                Point2D::new(10.0, 1.0),
                Point2D::new(10.0, -1.0),
                Point2D::new(0.0, -1.0),
            ]
        );
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let p = Point2D::new(3.0, 4.0);
        assert!(thick_line(p, p, 5.0).is_none());
    }

    #[test]
    fn disk_fan_closes_rim() {
        let center = Point2D::new(5.0, -2.0);
        let fan = disk_fan(center, 3.0, DISK_SEGMENTS);
        assert_eq!(fan.len(), DISK_SEGMENTS + 2);
        assert_eq!(fan[0], center);
        let first = fan[1];
        let last = fan[DISK_SEGMENTS + 1];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-9);
        for p in &fan[1..] {
            assert_relative_eq!((*p - center).length(), 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn outline_wraps_around() {
        let quads = circle_outline(Point2D::zero(), 50.0, 1.0);
        assert_eq!(quads.len(), OUTLINE_SEGMENTS);
        // The last segment ends where the first one started
        let last = quads[OUTLINE_SEGMENTS - 1];
        let first = quads[0];
        let last_end = last[1].lerp(last[2], 0.5);
        let first_start = first[0].lerp(first[3], 0.5);
        assert_relative_eq!(last_end.x, first_start.x, epsilon = 1e-9);
        assert_relative_eq!(last_end.y, first_start.y, epsilon = 1e-9);
        assert_relative_eq!(first_start.x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Color::new(0, 100, 200, 255);
        let b = Color::new(200, 100, 0, 55);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color::new(100, 100, 100, 155));
    }

    #[test]
    fn color_from_hex() {
        assert_eq!(
            Color::from_rgba_u32(0xD2B48CB4),
            Color::new(210, 180, 140, 180)
        );
    }

    #[test]
    fn ring_band_counts_and_radii() {
        let mesh = ring_band(1.5, 2.0, 100, Tilt::default());
        assert_eq!(mesh.vertices.len(), 200);
        assert_eq!(mesh.indices.len(), 600);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        for (i, v) in mesh.vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 2.0 } else { 1.5 };
            assert_relative_eq!(v.y, 0.0);
            assert_relative_eq!((v.x * v.x + v.z * v.z).sqrt(), expected, epsilon = 1e-9);
        }
        // The last quad wraps back to the first pair
        assert_eq!(&mesh.indices[594..], &[198, 0, 199, 199, 0, 1]);
    }

    #[test]
    fn inclined_ring_is_squashed_on_screen() {
        let tilt = Tilt {
            inclination: PI / 3.0,
            roll: 0.0,
        };
        let mesh = ring_band(1.6, 2.0, 4, tilt);
        let flat = mesh.flatten(Point2D::new(10.0, 10.0));
        // Step 1 is at 90 degrees: straight "down" the Z axis, halved
        assert_relative_eq!(flat[2].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(flat[2].y, 11.0, epsilon = 1e-9);
        assert_relative_eq!(flat[3].y, 10.8, epsilon = 1e-9);
    }

    #[test]
    fn ray_through_center_has_symmetric_roots() {
        let origin = Point2D::new(0.0, 0.0);
        let dir = Vector2D::new(1.0, 0.0);
        let (t1, t2) = ray_sphere_roots(origin, dir, Point2D::new(100.0, 0.0), 10.0).unwrap();
        assert_relative_eq!(t1, 90.0);
        assert_relative_eq!(t2, 110.0);
        assert_relative_eq!((t1 + t2) / 2.0, 100.0);
        assert_eq!(
            ray_sphere(origin, dir, Point2D::new(100.0, 0.0), 10.0),
            Some(90.0)
        );
    }

    #[test]
    fn ray_missing_sphere_is_rejected() {
        let origin = Point2D::new(0.0, 0.0);
        let dir = Vector2D::new(1.0, 0.0);
        // Perpendicular distance 20 > radius 10
        let center = Point2D::new(50.0, 20.0);
        assert!(ray_sphere_roots(origin, dir, center, 10.0).is_none());
        assert!(ray_sphere(origin, dir, center, 10.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_skipped() {
        let dir = Vector2D::new(1.0, 0.0);
        assert!(ray_sphere(Point2D::zero(), dir, Point2D::new(-50.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_uses_far_root() {
        let dir = Vector2D::new(1.0, 0.0);
        let t = ray_sphere(Point2D::zero(), dir, Point2D::new(2.0, 0.0), 10.0).unwrap();
        assert_relative_eq!(t, 12.0);
    }
}

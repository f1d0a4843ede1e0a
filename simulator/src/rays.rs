//! Light rays from the sun, cut short by whatever planet they hit first.

use crate::bodies::Planet;
use crate::geometry::ray_sphere;

use euclid::default::{Point2D, Vector2D};

/// One ray per degree.
pub const RAY_COUNT: usize = 360;
/// How far an unobstructed ray reaches.
pub const RAY_REACH: f64 = 1000.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightRay {
    pub end: Point2D<f64>,
    /// Index of the planet that stopped the ray, if any.
    pub hit: Option<usize>,
}

/// Cast a single ray and find the nearest planet along it.
pub fn cast(origin: Point2D<f64>, dir: Vector2D<f64>, planets: &[Planet]) -> LightRay {
    let nearest = planets
        .iter()
        .enumerate()
        .filter_map(|(idx, p)| ray_sphere(origin, dir, p.position, p.radius).map(|t| (idx, t)))
        .fold(None, |best: Option<(usize, f64)>, (idx, t)| match best {
            Some((_, best_t)) if best_t <= t => best,
            _ => Some((idx, t)),
        });
    match nearest {
        Some((idx, t)) => LightRay {
            end: origin + dir * t,
            hit: Some(idx),
        },
        None => LightRay {
            end: origin + dir * RAY_REACH,
            hit: None,
        },
    }
}

/// All rays from `sun`, starting at angle 0 and going counterclockwise.
pub fn light_rays(sun: Point2D<f64>, planets: &[Planet]) -> Vec<LightRay> {
    (0..RAY_COUNT)
        .map(|deg| {
            let theta = (deg as f64).to_radians();
            cast(sun, Vector2D::new(theta.cos(), theta.sin()), planets)
        })
        .collect()
}

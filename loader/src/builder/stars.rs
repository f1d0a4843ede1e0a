//! Background star builder

use crate::builder::{sample, Entry, Relative};

use simulator::bodies::Star;
use simulator::geometry::on_xz_plane;
use simulator::SystemParts;

use euclid::default::{Point2D, Point3D, Vector3D};
use rand::{rngs::SmallRng, Rng};
use std::f64::consts::PI;

/// Where the stars go.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// Anywhere in the visible field, flat.
    Field,
    /// On a spherical shell around the sun.
    Shell { min: f64, max: f64 },
}

/// StarsBuilder makes the twinkly background.
#[derive(Clone, Debug, PartialEq)]
pub struct StarsBuilder {
    pub count: usize,
    pub placement: Placement,
    pub min_speed: f64,
    pub max_speed: f64,
}

impl StarsBuilder {
    fn place(&self, relative: &Relative, rng: &mut SmallRng) -> Point3D<f64> {
        match self.placement {
            Placement::Field => {
                let f = relative.field;
                on_xz_plane(Point2D::new(
                    sample(rng, f.min.x, f.max.x),
                    sample(rng, f.min.y, f.max.y),
                ))
            }
            Placement::Shell { min, max } => {
                let r = sample(rng, min, max);
                let theta = rng.gen_range(0.0, 2.0 * PI);
                let phi = rng.gen_range(0.0, PI);
                on_xz_plane(relative.sun)
                    + Vector3D::new(
                        r * phi.sin() * theta.cos(),
                        r * phi.cos(),
                        r * phi.sin() * theta.sin(),
                    )
            }
        }
    }
}

impl Entry for StarsBuilder {
    fn construct(
        self: Box<Self>,
        relative: &Relative,
        rng: &mut SmallRng,
        parts: &mut SystemParts,
    ) {
        parts.stars.extend((0..self.count).map(|_| Star {
            position: self.place(relative, rng),
            phase: rng.gen_range(0.0, 2.0 * PI),
            speed: sample(rng, self.min_speed, self.max_speed),
            base_brightness: rng.gen_range(100, 255),
        }));
    }
}

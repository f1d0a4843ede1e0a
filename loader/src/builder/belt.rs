//! Asteroid belt builder

use crate::builder::{sample, Entry, Relative};

use simulator::bodies::{Asteroid, Belt};
use simulator::SystemParts;

use log::debug;
use rand::{rngs::SmallRng, Rng};
use std::f64::consts::PI;

/// A BeltBuilder scatters a bunch of asteroids around the sun.
/// Every range is sampled uniformly per asteroid.
#[derive(Clone, Debug, PartialEq)]
pub struct BeltBuilder {
    pub name: String,
    pub count: usize,
    pub min_orbit: f64,
    pub max_orbit: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Entry for BeltBuilder {
    fn construct(
        self: Box<Self>,
        _relative: &Relative,
        rng: &mut SmallRng,
        parts: &mut SystemParts,
    ) {
        let asteroids: Vec<Asteroid> = (0..self.count)
            .map(|_| Asteroid {
                orbit_radius: sample(rng, self.min_orbit, self.max_orbit),
                angle: rng.gen_range(0.0, 2.0 * PI),
                orbit_speed: sample(rng, self.min_speed, self.max_speed),
                radius: sample(rng, self.min_radius, self.max_radius),
            })
            .collect();
        debug!(
            "{}: {} asteroids between {} and {}",
            self.name, self.count, self.min_orbit, self.max_orbit
        );
        parts.belts.push(Belt {
            name: self.name,
            asteroids,
        });
    }
}

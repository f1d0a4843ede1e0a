//! Planets, with whatever moons and rings they carry.

use crate::builder::{Entry, Relative};

use simulator::bodies::{Moon, Planet, RingBand};
use simulator::SystemParts;

use log::debug;
use rand::rngs::SmallRng;

/// A planet ready to be put into a system.
/// The setters can be chained.
#[derive(Clone, Debug)]
pub struct PlanetEntry {
    planet: Planet,
}

impl PlanetEntry {
    pub fn new(planet: Planet) -> Self {
        Self { planet }
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.planet.draggable = draggable;
        self
    }

    /// Starting angle, in radians.
    pub fn at_angle(mut self, angle: f64) -> Self {
        self.planet.angle = angle;
        self
    }

    /// Replace the moons.
    pub fn with_moons(mut self, moons: Vec<Moon>) -> Self {
        self.planet.moons = moons;
        self
    }

    pub fn add_moon(mut self, moon: Moon) -> Self {
        self.planet.moons.push(moon);
        self
    }

    pub fn with_rings(mut self, rings: RingBand) -> Self {
        self.planet.rings = Some(rings);
        self
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }
}

impl Entry for PlanetEntry {
    fn construct(
        self: Box<Self>,
        relative: &Relative,
        _rng: &mut SmallRng,
        parts: &mut SystemParts,
    ) {
        let mut planet = self.planet;
        planet.place(relative.sun);
        debug!(
            "{} at orbit {} with {} moons{}",
            planet.name,
            planet.orbit_radius,
            planet.moons.len(),
            if planet.rings.is_some() { " and rings" } else { "" }
        );
        parts.planets.push(planet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefabs::{moons, planets};
    use approx::assert_relative_eq;

    #[test]
    fn setters_override_the_prefab() {
        let entry = PlanetEntry::new(planets::mars())
            .draggable(true)
            .at_angle(1.0)
            .add_moon(moons::luna());
        let mars = entry.planet();
        assert!(mars.draggable);
        assert_relative_eq!(mars.angle, 1.0);
        assert_eq!(mars.moons.len(), 1);

        let earth = PlanetEntry::new(planets::earth()).with_moons(Vec::new());
        assert!(earth.planet().moons.is_empty());
        assert!(earth.planet().draggable);
    }
}

//! Lets you put a solar system together piece by piece.

pub mod belt;
pub mod planet;
pub mod stars;

pub use belt::BeltBuilder;
pub use planet::PlanetEntry;
pub use stars::{Placement, StarsBuilder};

use simulator::bodies::Sun;
use simulator::comet::Comet;
use simulator::{Simulation, SystemParts};

use euclid::default::{Box2D, Point2D};
use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Use this struct to construct a solar system easily
pub struct SystemBuilder {
    sun_radius: f64,
    /// The sun sits in the middle of this
    field: Box2D<f64>,
    comet: Comet,
    /// The stuff in the solar system
    entries: Vec<Box<dyn Entry>>,
}

impl SystemBuilder {
    /// Make a new Builder with nothing but a sun and a comet.
    pub fn new(sun_radius: f64, field: Box2D<f64>, comet: Comet) -> Self {
        SystemBuilder {
            sun_radius,
            field,
            comet,
            entries: Vec::new(),
        }
    }

    /// Add an entry to the Builder.
    pub fn add(&mut self, entry: Box<dyn Entry>) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Build every entry in the order they were added and start the simulation.
    /// The same seed always gives the same system.
    pub fn construct(self, seed: u64) -> Simulation {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sun = Sun {
            position: self.field.min.lerp(self.field.max, 0.5),
            radius: self.sun_radius,
        };
        let relative = Relative {
            sun: sun.position,
            field: self.field,
        };

        let mut parts = SystemParts {
            sun,
            planets: Vec::new(),
            stars: Vec::new(),
            belts: Vec::new(),
            comet: self.comet,
            field: self.field,
        };
        debug!("Constructing {} entries with seed {}", self.entries.len(), seed);
        for entry in self.entries {
            entry.construct(&relative, &mut rng, &mut parts);
        }

        // The comet gets its own stream so adding stars doesn't change where it shows up
        Simulation::new(parts, rng.gen())
    }
}

/// An entry in a SystemBuilder.
/// Must contain all the information needed to put its bodies into a system.
pub trait Entry {
    /// Add whatever this entry describes to `parts`.
    fn construct(
        self: Box<Self>,
        relative: &Relative,
        rng: &mut SmallRng,
        parts: &mut SystemParts,
    );
}

/// What an entry is built relative to.
pub struct Relative {
    pub sun: Point2D<f64>,
    pub field: Box2D<f64>,
}

/// Uniform in `[min, max)`. An empty range collapses to `min`.
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min, max)
    } else {
        min
    }
}

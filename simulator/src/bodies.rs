//! Handles bodies and such

use crate::geometry::{self, polar, Color, RingMesh, Tilt};

use euclid::default::{Point2D, Point3D};

/// How many angular steps a planet's ring band gets.
pub const RING_SEGMENTS: usize = 60;

/// The sun. It doesn't orbit anything; it just sits at its anchor.
#[derive(Copy, Clone, Debug)]
pub struct Sun {
    pub position: Point2D<f64>,
    pub radius: f64,
}

impl Sun {
    /// Radius including the slow pulse, at `time` seconds.
    pub fn pulsing_radius(&self, time: f64) -> f64 {
        self.radius * (1.0 + 0.1 * (time * 2.0).sin())
    }
}

/// A background star that twinkles.
#[derive(Copy, Clone, Debug)]
pub struct Star {
    /// Screen coordinates are (x, z). Planar star fields have y = 0.
    pub position: Point3D<f64>,
    pub phase: f64,
    /// Phase increment per tick
    pub speed: f64,
    /// Grey level of the star
    pub base_brightness: u8,
}

impl Star {
    pub fn update(&mut self) {
        self.phase += self.speed;
    }

    /// Current twinkle, used as alpha.
    pub fn brightness(&self) -> u8 {
        (128.0 + 127.0 * self.phase.sin()).max(0.0).min(255.0) as u8
    }

    pub fn color(&self) -> Color {
        let level = self.base_brightness;
        Color::new(level, level, level, self.brightness())
    }
}

/// A speck of rock going around the sun.
#[derive(Copy, Clone, Debug)]
pub struct Asteroid {
    pub orbit_radius: f64,
    pub angle: f64,
    pub orbit_speed: f64,
    pub radius: f64,
}

impl Asteroid {
    pub fn update(&mut self) {
        self.angle += self.orbit_speed;
    }

    pub fn position(&self, sun: Point2D<f64>) -> Point2D<f64> {
        polar(sun, self.orbit_radius, self.angle)
    }
}

/// A named group of asteroids, like the main belt or the Kuiper belt.
#[derive(Clone, Debug)]
pub struct Belt {
    pub name: String,
    pub asteroids: Vec<Asteroid>,
}

/// A moon orbits its planet, wherever that planet currently is.
#[derive(Copy, Clone, Debug)]
pub struct Moon {
    pub orbit_radius: f64,
    pub angle: f64,
    pub orbit_speed: f64,
    pub radius: f64,
    pub inner_color: Color,
    pub outer_color: Color,
}

impl Moon {
    pub fn update(&mut self) {
        self.angle += self.orbit_speed;
    }

    pub fn position(&self, planet: Point2D<f64>) -> Point2D<f64> {
        polar(planet, self.orbit_radius, self.angle)
    }
}

/// Rings around a planet. Radii are in multiples of the planet's radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingBand {
    pub inner: f64,
    pub outer: f64,
    pub tilt: Tilt,
    pub color: Color,
}

impl RingBand {
    pub fn mesh(&self, planet_radius: f64) -> RingMesh {
        geometry::ring_band(
            self.inner * planet_radius,
            self.outer * planet_radius,
            RING_SEGMENTS,
            self.tilt,
        )
    }
}

/// A planet, with its moons.
#[derive(Clone, Debug)]
pub struct Planet {
    pub name: String,
    pub orbit_radius: f64,
    pub radius: f64,
    pub angle: f64,
    pub orbit_speed: f64,
    /// Cached; recomputed every tick from the orbit, or taken from the pointer while dragged.
    pub position: Point2D<f64>,
    pub inner_color: Color,
    pub outer_color: Color,
    pub draggable: bool,
    pub dragged: bool,
    pub rings: Option<RingBand>,
    pub moons: Vec<Moon>,
}

impl Planet {
    /// Advance one tick around `sun`. A dragged planet (and its moons) stays put.
    pub fn update(&mut self, sun: Point2D<f64>) {
        if self.dragged {
            return;
        }
        self.angle += self.orbit_speed;
        self.place(sun);
        for moon in self.moons.iter_mut() {
            moon.update();
        }
    }

    /// Put the planet where its orbit says it is.
    pub fn place(&mut self, sun: Point2D<f64>) {
        self.position = polar(sun, self.orbit_radius, self.angle);
    }

    /// Adopt whatever orbit passes through `position`.
    pub fn reorbit(&mut self, sun: Point2D<f64>, position: Point2D<f64>) {
        let offset = position - sun;
        self.position = position;
        self.orbit_radius = offset.length();
        self.angle = offset.y.atan2(offset.x);
    }

    pub fn moon_positions(&self) -> impl Iterator<Item = Point2D<f64>> + '_ {
        let center = self.position;
        self.moons.iter().map(move |moon| moon.position(center))
    }
}

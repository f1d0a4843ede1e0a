//! The comet, its trail, and what happens when it hits something.

use crate::geometry::polar;

use euclid::default::{Box2D, Point2D, Vector2D};
use log::debug;
use rand::Rng;

use std::collections::VecDeque;
use std::f64::consts::PI;

/// Where the comet goes when it starts over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Respawn {
    /// Always the same spot and heading.
    Fixed { origin: Point2D<f64>, heading: f64 },
    /// Somewhere on an annulus around the sun, aimed back at the sun.
    Annulus { inner: f64, outer: f64 },
}

/// Shape of the flash left behind by a collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExplosionSettings {
    /// Seconds
    pub duration: f64,
    pub max_radius: f64,
}

impl Default for ExplosionSettings {
    fn default() -> Self {
        Self {
            duration: 1.0,
            max_radius: 30.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Comet {
    pub position: Point2D<f64>,
    /// Direction of travel
    pub heading: f64,
    /// Distance per tick
    pub speed: f64,
    /// Used both for drawing the nucleus and for collisions.
    pub radius: f64,
    /// How far past the visible field the comet may wander before respawning.
    pub margin: f64,
    pub respawn: Respawn,
    /// Whether hitting planets and asteroids blows the comet up.
    pub collisions: bool,
    pub explosion: ExplosionSettings,
    /// Most recent first.
    trail: VecDeque<Point2D<f64>>,
    max_trail: usize,
}

impl Comet {
    pub fn new(respawn: Respawn, speed: f64, radius: f64, max_trail: usize) -> Self {
        let (position, heading) = match respawn {
            Respawn::Fixed { origin, heading } => (origin, heading),
            Respawn::Annulus { .. } => (Point2D::zero(), 0.0),
        };
        Self {
            position,
            heading,
            speed,
            radius,
            margin: 0.0,
            respawn,
            collisions: false,
            explosion: ExplosionSettings::default(),
            trail: VecDeque::with_capacity(max_trail + 1),
            max_trail,
        }
    }

    /// Move one tick along the heading and record it in the trail.
    pub fn advance(&mut self) {
        self.position += Vector2D::new(self.heading.cos(), self.heading.sin()) * self.speed;
        self.trail.push_front(self.position);
        self.trail.truncate(self.max_trail);
    }

    /// Strictly outside `field` grown by the margin on every side.
    pub fn out_of_field(&self, field: &Box2D<f64>) -> bool {
        let p = self.position;
        p.x < field.min.x - self.margin
            || p.x > field.max.x + self.margin
            || p.y < field.min.y - self.margin
            || p.y > field.max.y + self.margin
    }

    /// Start over according to the respawn policy. The trail is wiped.
    pub fn respawn<R: Rng + ?Sized>(&mut self, sun: Point2D<f64>, rng: &mut R) {
        match self.respawn {
            Respawn::Fixed { origin, heading } => {
                self.position = origin;
                self.heading = heading;
            }
            Respawn::Annulus { inner, outer } => {
                let radius = if outer > inner {
                    rng.gen_range(inner, outer)
                } else {
                    inner
                };
                let angle = rng.gen_range(0.0, 2.0 * PI);
                self.position = polar(sun, radius, angle);
                let to_sun = sun - self.position;
                self.heading = to_sun.y.atan2(to_sun.x);
            }
        }
        self.trail.clear();
        debug!(
            "comet respawned at ({:.1}, {:.1}) heading {:.3}",
            self.position.x, self.position.y, self.heading
        );
    }

    pub fn trail(&self) -> &VecDeque<Point2D<f64>> {
        &self.trail
    }

    pub fn max_trail(&self) -> usize {
        self.max_trail
    }

    /// Consecutive trail point pairs with their index, newest first.
    /// Empty when there are fewer than two points.
    pub fn trail_segments(&self) -> impl Iterator<Item = (usize, Point2D<f64>, Point2D<f64>)> + '_ {
        self.trail
            .iter()
            .zip(self.trail.iter().skip(1))
            .enumerate()
            .map(|(i, (a, b))| (i, *a, *b))
    }
}

/// Two circles overlap. Touching exactly does not count.
pub fn collides(a: Point2D<f64>, a_radius: f64, b: Point2D<f64>, b_radius: f64) -> bool {
    (a - b).length() < a_radius + b_radius
}

/// A growing, fading flash.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Explosion {
    pub position: Point2D<f64>,
    pub elapsed: f64,
    pub duration: f64,
    pub max_radius: f64,
}

impl Explosion {
    pub fn new(position: Point2D<f64>, settings: ExplosionSettings) -> Self {
        Self {
            position,
            elapsed: 0.0,
            duration: settings.duration,
            max_radius: settings.max_radius,
        }
    }

    /// 0 at the start, 1 when done.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        }
    }

    pub fn radius(&self) -> f64 {
        self.progress() * self.max_radius
    }

    pub fn alpha(&self) -> u8 {
        (255.0 * (1.0 - self.progress())) as u8
    }

    /// Returns whether the explosion is still going.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        self.elapsed < self.duration
    }
}

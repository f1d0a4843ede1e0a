//! Handles the simulation of the solar system

pub mod bodies;
pub mod canvas;
pub mod comet;
pub mod geometry;
pub mod interaction;
pub mod paint;
pub mod rays;

use crate::bodies::{Asteroid, Belt, Planet, Star, Sun};
use crate::comet::{collides, Comet, Explosion};
use crate::interaction::{Drag, PointerInput};
use crate::rays::LightRay;

use euclid::default::{Box2D, Point2D};
use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

/// Nominal duration of one tick, in seconds.
pub const TICK: f64 = 1.0 / 60.0;

/// Everything a Simulation is made of, before it starts running.
pub struct SystemParts {
    pub sun: Sun,
    pub planets: Vec<Planet>,
    pub stars: Vec<Star>,
    pub belts: Vec<Belt>,
    pub comet: Comet,
    /// The visible region. The comet respawns once it wanders too far outside.
    pub field: Box2D<f64>,
}

pub struct Simulation {
    sun: Sun,
    planets: Vec<Planet>,
    /// At most one planet is dragged at a time.
    drag: Option<Drag>,
    stars: Vec<Star>,
    belts: Vec<Belt>,
    comet: Comet,
    explosion: Option<Explosion>,
    /// Seconds simulated so far
    time: f64,
    field: Box2D<f64>,
    /// Only used for comet respawns.
    rng: SmallRng,
}

impl Simulation {
    pub fn new(parts: SystemParts, seed: u64) -> Self {
        let SystemParts {
            sun,
            mut planets,
            stars,
            belts,
            mut comet,
            field,
        } = parts;
        let mut rng = SmallRng::seed_from_u64(seed);

        for planet in planets.iter_mut() {
            planet.dragged = false;
            planet.place(sun.position);
        }
        comet.respawn(sun.position, &mut rng);

        info!(
            "Simulation ready: {} planets, {} moons, {} asteroids in {} belts, {} stars",
            planets.len(),
            planets.iter().map(|p| p.moons.len()).sum::<usize>(),
            belts.iter().map(|b| b.asteroids.len()).sum::<usize>(),
            belts.len(),
            stars.len()
        );

        Simulation {
            sun,
            planets,
            drag: None,
            stars,
            belts,
            comet,
            explosion: None,
            time: 0.0,
            field,
            rng,
        }
    }

    /// Run one tick.
    pub fn update(&mut self, dt: f64, input: &PointerInput) {
        self.time += dt;

        for star in self.stars.iter_mut() {
            star.update();
        }
        for asteroid in self.belts.iter_mut().flat_map(|b| b.asteroids.iter_mut()) {
            asteroid.update();
        }

        self.comet.advance();
        if self.comet.out_of_field(&self.field) {
            self.comet.respawn(self.sun.position, &mut self.rng);
        }

        // Drag has to be settled before the orbits move,
        // so a planet released this tick carries on from where it was dropped.
        self.resolve_pointer(input);
        if let Some(drag) = self.drag {
            let target = drag.target(input.position);
            self.planets[drag.planet].reorbit(self.sun.position, target);
        }

        let sun = self.sun.position;
        for planet in self.planets.iter_mut() {
            planet.update(sun);
        }

        if self.comet.collisions {
            self.check_collisions();
        }
        let finished = match &mut self.explosion {
            Some(explosion) => !explosion.advance(dt),
            None => false,
        };
        if finished {
            self.explosion = None;
        }
    }

    /// Begin or end a drag.
    fn resolve_pointer(&mut self, input: &PointerInput) {
        if input.pressed && self.drag.is_none() {
            if let Some(drag) = interaction::pick(&self.planets, input.position) {
                let planet = &mut self.planets[drag.planet];
                planet.dragged = true;
                debug!("Started dragging {}", planet.name);
                self.drag = Some(drag);
            }
        }
        if input.released {
            if let Some(drag) = self.drag.take() {
                let planet = &mut self.planets[drag.planet];
                planet.dragged = false;
                debug!(
                    "Dropped {} onto an orbit of radius {:.1}",
                    planet.name, planet.orbit_radius
                );
            }
        }
    }

    /// Blow the comet up if it's touching a planet or an asteroid.
    fn check_collisions(&mut self) {
        let comet = &self.comet;
        let sun = self.sun.position;
        let hit_planet = self
            .planets
            .iter()
            .find(|p| collides(comet.position, comet.radius, p.position, p.radius))
            .map(|p| p.name.clone());
        let hit = hit_planet.or_else(|| {
            self.belts
                .iter()
                .find(|b| {
                    b.asteroids.iter().any(|a| {
                        collides(comet.position, comet.radius, a.position(sun), a.radius)
                    })
                })
                .map(|b| format!("an asteroid of the {}", b.name))
        });

        if let Some(what) = hit {
            info!(
                "Comet hit {} at ({:.1}, {:.1})",
                what, self.comet.position.x, self.comet.position.y
            );
            self.explosion = Some(Explosion::new(self.comet.position, self.comet.explosion));
            self.comet.respawn(sun, &mut self.rng);
        }
    }

    /// Fit the system to a window: the sun goes to the middle and the field covers it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.sun.position = Point2D::new(width / 2.0, height / 2.0);
        self.field = Box2D::new(Point2D::zero(), Point2D::new(width, height));
    }

    /// Rays of light from the sun, one per degree.
    pub fn light_rays(&self) -> Vec<LightRay> {
        rays::light_rays(self.sun.position, &self.planets)
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// The planet being dragged right now, if any.
    pub fn dragged(&self) -> Option<&Planet> {
        self.drag.map(|drag| &self.planets[drag.planet])
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn belts(&self) -> &[Belt] {
        &self.belts
    }

    pub fn asteroids(&self) -> impl Iterator<Item = &Asteroid> + '_ {
        self.belts.iter().flat_map(|b| b.asteroids.iter())
    }

    pub fn comet(&self) -> &Comet {
        &self.comet
    }

    pub fn explosion(&self) -> Option<&Explosion> {
        self.explosion.as_ref()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn field(&self) -> &Box2D<f64> {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Moon;
    use crate::comet::Respawn;
    use crate::geometry::Color;
    use approx::assert_relative_eq;
    use euclid::default::Vector2D;
    use std::f64::consts::PI;

    fn planet(name: &str, orbit_radius: f64, orbit_speed: f64, draggable: bool) -> Planet {
        Planet {
            name: name.to_string(),
            orbit_radius,
            radius: 10.0,
            angle: 0.0,
            orbit_speed,
            position: Point2D::zero(),
            inner_color: Color::WHITE,
            outer_color: Color::WHITE,
            draggable,
            dragged: false,
            rings: None,
            moons: vec![Moon {
                orbit_radius: 20.0,
                angle: 0.0,
                orbit_speed: 0.05,
                radius: 3.0,
                inner_color: Color::WHITE,
                outer_color: Color::WHITE,
            }],
        }
    }

    fn parts(comet: Comet) -> SystemParts {
        SystemParts {
            sun: Sun {
                position: Point2D::new(400.0, 300.0),
                radius: 40.0,
            },
            planets: vec![
                planet("Inner", 80.0, 0.04, false),
                planet("Draggable", 160.0, 0.02, true),
            ],
            stars: Vec::new(),
            belts: vec![Belt {
                name: "belt".to_string(),
                asteroids: vec![Asteroid {
                    orbit_radius: 220.0,
                    angle: 1.0,
                    orbit_speed: 0.01,
                    radius: 2.0,
                }],
            }],
            comet,
            field: Box2D::new(Point2D::zero(), Point2D::new(800.0, 600.0)),
        }
    }

    fn baseline_comet() -> Comet {
        let mut comet = Comet::new(
            Respawn::Fixed {
                origin: Point2D::new(-50.0, -50.0),
                heading: PI / 4.0,
            },
            4.0,
            4.0,
            20,
        );
        comet.margin = 50.0;
        comet
    }

    fn idle() -> PointerInput {
        PointerInput::at(Point2D::new(-1000.0, -1000.0))
    }

    #[test]
    fn free_planets_keep_a_steady_orbit() {
        let mut sim = Simulation::new(parts(baseline_comet()), 1);
        let sun = sim.sun().position;
        for _ in 0..250 {
            sim.update(TICK, &idle());
        }
        for p in sim.planets() {
            assert_relative_eq!(p.angle, 250.0 * p.orbit_speed, epsilon = 1e-9);
            assert_eq!(p.position.x, sun.x + p.orbit_radius * p.angle.cos());
            assert_eq!(p.position.y, sun.y + p.orbit_radius * p.angle.sin());
            assert_relative_eq!(p.moons[0].angle, 250.0 * 0.05, epsilon = 1e-9);
        }
        assert_relative_eq!(sim.time(), 250.0 * TICK, epsilon = 1e-9);
    }

    #[test]
    fn dropped_planet_keeps_its_new_orbit() {
        let mut sim = Simulation::new(parts(baseline_comet()), 1);
        let sun = sim.sun().position;
        let grab = sim.planets()[1].position;

        sim.update(
            TICK,
            &PointerInput {
                position: grab,
                pressed: true,
                released: false,
            },
        );
        assert_eq!(sim.dragged().map(|p| p.name.as_str()), Some("Draggable"));

        let drop_at = Point2D::new(400.0, 500.0);
        sim.update(TICK, &PointerInput::at(Point2D::new(300.0, 420.0)));
        sim.update(TICK, &PointerInput::at(drop_at));
        {
            let p = &sim.planets()[1];
            assert!(p.dragged);
            assert_eq!(p.position, drop_at);
            assert_relative_eq!(p.orbit_radius, 200.0);
            assert_relative_eq!(p.angle, PI / 2.0);
            // Moons wait while their planet is held
            assert_relative_eq!(p.moons[0].angle, 0.0);
        }

        sim.update(
            TICK,
            &PointerInput {
                position: drop_at,
                pressed: false,
                released: true,
            },
        );
        assert!(sim.dragged().is_none());
        let p = &sim.planets()[1];
        assert!(!p.dragged);
        assert_relative_eq!(p.orbit_radius, 200.0);
        assert_relative_eq!(p.angle, PI / 2.0 + 0.02);
        assert_relative_eq!(p.position.x, sun.x + 200.0 * p.angle.cos());
        assert_relative_eq!(p.position.y, sun.y + 200.0 * p.angle.sin());

        // The other planet never noticed
        assert_relative_eq!(sim.planets()[0].angle, 4.0 * 0.04, epsilon = 1e-12);
    }

    #[test]
    fn pressing_empty_space_drags_nothing() {
        let mut sim = Simulation::new(parts(baseline_comet()), 1);
        let inner = sim.planets()[0].position;
        sim.update(
            TICK,
            &PointerInput {
                position: inner,
                pressed: true,
                released: false,
            },
        );
        assert!(sim.dragged().is_none());
    }

    #[test]
    fn comet_trail_invariant_holds_across_respawns() {
        let mut sim = Simulation::new(parts(baseline_comet()), 3);
        let mut respawns = 0;
        for _ in 0..1000 {
            sim.update(TICK, &idle());
            let comet = sim.comet();
            assert!(comet.trail().len() <= comet.max_trail());
            match comet.trail().front() {
                Some(newest) => assert_eq!(*newest, comet.position),
                None => {
                    respawns += 1;
                    assert_eq!(comet.position, Point2D::new(-50.0, -50.0));
                }
            }
        }
        assert!(respawns > 0);
    }

    #[test]
    fn comet_past_the_bound_starts_over() {
        let mut sim = Simulation::new(parts(baseline_comet()), 3);
        sim.update(TICK, &idle());
        sim.comet.position = Point2D::new(849.0, 300.0);
        sim.comet.heading = 0.0;
        sim.update(TICK, &idle());
        assert_eq!(sim.comet().position, Point2D::new(-50.0, -50.0));
        assert!(sim.comet().trail().is_empty());
        assert_relative_eq!(sim.comet().heading, PI / 4.0);
    }

    #[test]
    fn annulus_comet_spawns_on_the_ring() {
        let mut comet = Comet::new(
            Respawn::Annulus {
                inner: 600.0,
                outer: 1000.0,
            },
            4.0,
            4.0,
            20,
        );
        comet.collisions = true;
        let mut p = parts(comet);
        p.sun.position = Point2D::zero();
        p.field = Box2D::new(Point2D::new(-1000.0, -1000.0), Point2D::new(1000.0, 1000.0));
        let mut sim = Simulation::new(p, 11);
        let r = sim.comet().position.to_vector().length();
        assert!(r >= 600.0 - 1e-9 && r < 1000.0);

        sim.comet.position = Point2D::new(1001.0, 0.0);
        sim.comet.heading = 0.0;
        sim.update(TICK, &idle());
        let r = sim.comet().position.to_vector().length();
        assert!(r >= 600.0 - 1e-9 && r < 1000.0, "r = {}", r);
        assert!(sim.comet().trail().is_empty());
        assert!(sim.explosion().is_none());
    }

    fn still_system(comet_offset: f64) -> Simulation {
        let mut comet = Comet::new(
            Respawn::Fixed {
                origin: Point2D::new(-500.0, -500.0),
                heading: 0.0,
            },
            0.0,
            4.0,
            20,
        );
        comet.collisions = true;
        comet.margin = 1000.0;
        let mut p = parts(comet);
        p.sun.position = Point2D::zero();
        p.planets = vec![planet("Target", 100.0, 0.0, false)];
        p.belts.clear();
        let mut sim = Simulation::new(p, 5);
        sim.comet.position = Point2D::new(100.0, 0.0) + Vector2D::new(comet_offset, 0.0);
        sim
    }

    #[test]
    fn overlapping_comet_explodes() {
        let mut sim = still_system(13.9);
        sim.update(TICK, &idle());
        let boom = sim.explosion().expect("should have exploded");
        assert_relative_eq!(boom.position.x, 113.9);
        assert_relative_eq!(boom.elapsed, TICK);
        assert_eq!(sim.comet().position, Point2D::new(-500.0, -500.0));
        assert!(sim.comet().trail().is_empty());
    }

    #[test]
    fn touching_comet_does_not_explode() {
        let mut sim = still_system(14.0);
        sim.update(TICK, &idle());
        assert!(sim.explosion().is_none());
        assert_eq!(sim.comet().position, Point2D::new(114.0, 0.0));
    }

    #[test]
    fn explosion_clears_after_its_duration() {
        let mut sim = still_system(5.0);
        sim.update(0.25, &idle());
        assert!(sim.explosion().is_some());
        sim.update(0.25, &idle());
        sim.update(0.25, &idle());
        assert!(sim.explosion().is_some());
        sim.update(0.25, &idle());
        assert!(sim.explosion().is_none());
    }

    #[test]
    fn comet_can_hit_asteroids() {
        let mut sim = still_system(500.0);
        sim.belts = vec![Belt {
            name: "Kuiper belt".to_string(),
            asteroids: vec![Asteroid {
                orbit_radius: 300.0,
                angle: 0.0,
                orbit_speed: 0.0,
                radius: 1.0,
            }],
        }];
        sim.comet.position = Point2D::new(302.0, 0.0);
        sim.update(TICK, &idle());
        assert!(sim.explosion().is_some());
    }

    #[test]
    fn resize_recenters_the_sun() {
        let mut sim = Simulation::new(parts(baseline_comet()), 1);
        sim.resize(1280.0, 720.0);
        sim.update(TICK, &idle());
        assert_eq!(sim.sun().position, Point2D::new(640.0, 360.0));
        let p = &sim.planets()[0];
        assert_relative_eq!((p.position - sim.sun().position).length(), 80.0, epsilon = 1e-9);
    }
}

//! Turns a Simulation into draw calls, back to front.

use crate::canvas::Canvas;
use crate::geometry::{lerp_color, Color};
use crate::Simulation;

use euclid::default::Point2D;

const SUN_STEPS: usize = 30;
const SUN_YELLOW: Color = Color::new(255, 255, 0, 255);
const SUN_ORANGE: Color = Color::new(255, 140, 0, 200);
const SUN_CORONA: Color = Color::new(255, 140, 0, 0);

const BODY_STEPS: usize = 20;
const HALO: Color = Color::new(0, 0, 0, 100);
const HALO_SCALE: f64 = 1.4;

const ASTEROID: Color = Color::new(169, 169, 169, 200);
const ORBIT: Color = Color::new(200, 200, 200, 50);

const RAY_GLOW: Color = Color::new(255, 255, 200, 60);
const RAY_MID: Color = Color::new(255, 255, 170, 120);
const RAY_CORE: Color = Color::new(255, 255, 150, 200);

const EXPLOSION: Color = Color::new(255, 200, 0, 255);

impl Simulation {
    /// Emit the whole scene.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for star in self.stars() {
            let p = star.position;
            canvas.fill_disk(Point2D::new(p.x, p.z), 1.0, star.color());
        }

        let sun = self.sun().position;
        for asteroid in self.asteroids() {
            canvas.fill_disk(asteroid.position(sun), asteroid.radius, ASTEROID);
        }

        self.paint_sun(canvas);

        for planet in self.planets() {
            canvas.circle_outline(sun, planet.orbit_radius, 1.0, ORBIT);
        }

        for planet in self.planets() {
            canvas.fill_disk(planet.position, planet.radius * HALO_SCALE, HALO);
            canvas.gradient_disk(
                planet.position,
                planet.radius,
                planet.inner_color,
                planet.outer_color,
                BODY_STEPS,
            );
            if let Some(rings) = &planet.rings {
                canvas.ring(planet.position, &rings.mesh(planet.radius), rings.color);
            }
            for (moon, position) in planet.moons.iter().zip(planet.moon_positions()) {
                canvas.gradient_disk(
                    position,
                    moon.radius,
                    moon.inner_color,
                    moon.outer_color,
                    BODY_STEPS,
                );
            }
        }

        for ray in self.light_rays() {
            canvas.glowing_line(sun, ray.end, RAY_GLOW, RAY_MID, RAY_CORE);
        }

        self.paint_comet(canvas);

        if let Some(explosion) = self.explosion() {
            canvas.fill_disk(
                explosion.position,
                explosion.radius(),
                EXPLOSION.with_alpha(explosion.alpha()),
            );
        }
    }

    /// A pulsing radial gradient, widest and faintest first.
    fn paint_sun<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let center = self.sun().position;
        let radius = self.sun().pulsing_radius(self.time());
        for i in 0..=SUN_STEPS {
            let f = i as f64 / SUN_STEPS as f64;
            let color = if f < 0.3 {
                lerp_color(SUN_CORONA, SUN_ORANGE, f / 0.3)
            } else {
                lerp_color(SUN_ORANGE, SUN_YELLOW, (f - 0.3) / 0.7)
            };
            canvas.fill_disk(center, radius * (1.0 + 3.0 * (1.0 - f)), color);
        }
    }

    /// Trail first, fading with age, then the nucleus on top.
    fn paint_comet<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let comet = self.comet();
        let len = comet.trail().len() as f64;
        for (i, newer, older) in comet.trail_segments() {
            let alpha = (200.0 * (1.0 - i as f64 / len)) as u8;
            let bright = Color::WHITE.with_alpha(alpha);
            let faint = Color::WHITE.with_alpha(alpha / 2);
            canvas.glowing_line(newer, older, bright, bright, faint);
        }
        canvas.fill_disk(comet.position, comet.radius, Color::WHITE);
    }
}

//! Prefabricated planets and moons.
//! Distances are in pixels, speeds in radians per tick.

pub mod planets {
    use super::moons;
    use simulator::bodies::{Planet, RingBand};
    use simulator::geometry::{Color, Tilt};

    use euclid::default::Point2D;

    /// Returns Mercury.
    pub fn mercury() -> Planet {
        planet("Mercury", 80.0, 6.0, 0.04, 0xA9A9A9FF, 0x696969FF)
    }

    /// Returns Venus.
    pub fn venus() -> Planet {
        planet("Venus", 120.0, 8.0, 0.03, 0xFFD700FF, 0xDAA520FF)
    }

    /// Returns the Earth, the only one you can pick up.
    pub fn earth() -> Planet {
        Planet {
            draggable: true,
            moons: vec![moons::luna()],
            ..planet("Earth", 160.0, 10.0, 0.02, 0x6495EDFF, 0x191970FF)
        }
    }

    /// Returns Mars.
    pub fn mars() -> Planet {
        planet("Mars", 200.0, 7.0, 0.015, 0xCD5C5CFF, 0x8B4513FF)
    }

    /// Returns Jupiter. Its moons are left to the system file.
    pub fn jupiter() -> Planet {
        planet("Jupiter", 250.0, 14.0, 0.01, 0xDEB887FF, 0xA0522DFF)
    }

    /// Returns Saturn, rings and all.
    pub fn saturn() -> Planet {
        Planet {
            rings: Some(RingBand {
                inner: 1.6,
                outer: 2.0,
                // Seen from 60 degrees the ring is half as tall as it is wide
                tilt: Tilt {
                    inclination: 60f64.to_radians(),
                    roll: 20f64.to_radians(),
                },
                color: Color::from_rgba_u32(0xD2B48CB4),
            }),
            ..planet("Saturn", 300.0, 12.0, 0.008, 0xDECBA4FF, 0xD2B48CFF)
        }
    }

    /// Returns Uranus.
    pub fn uranus() -> Planet {
        planet("Uranus", 350.0, 10.0, 0.006, 0xAFEEEEFF, 0x48D1CCFF)
    }

    /// Returns Neptune.
    pub fn neptune() -> Planet {
        planet("Neptune", 400.0, 10.0, 0.005, 0x4169E1FF, 0x191970FF)
    }

    /// Returns Pluto. Still on the list.
    pub fn pluto() -> Planet {
        planet("Pluto", 450.0, 4.0, 0.004, 0xCD853FFF, 0x8B4513FF)
    }

    // PLANET BUILDERS

    /// Returns a plain planet with no moons or rings, starting at angle 0.
    pub fn planet(
        name: &str,
        orbit_radius: f64,
        radius: f64,
        orbit_speed: f64,
        inner_color: u32,
        outer_color: u32,
    ) -> Planet {
        Planet {
            name: name.to_string(),
            orbit_radius,
            radius,
            angle: 0.0,
            orbit_speed,
            position: Point2D::zero(),
            inner_color: Color::from_rgba_u32(inner_color),
            outer_color: Color::from_rgba_u32(outer_color),
            draggable: false,
            dragged: false,
            rings: None,
            moons: Vec::new(),
        }
    }
}

pub mod moons {
    use simulator::bodies::Moon;
    use simulator::geometry::Color;

    /// Returns our Moon.
    pub fn luna() -> Moon {
        moon(20.0, 0.0, 0.05, 3.0, 0xF0F0F0FF, 0xA0A0A0FF)
    }

    /// Returns Io.
    pub fn io() -> Moon {
        moon(20.0, 0.0, 0.06, 3.0, 0xD3D3D3FF, 0x8C8C8CFF)
    }

    /// Returns Europa.
    pub fn europa() -> Moon {
        moon(30.0, 1.0, 0.04, 2.0, 0xC0C0C0FF, 0x808080FF)
    }

    /// Returns Ganymede.
    pub fn ganymede() -> Moon {
        moon(40.0, 2.0, 0.035, 2.0, 0xD3D3D3FF, 0x8C8C8CFF)
    }

    // MOON BUILDERS

    /// Returns a generic moon
    pub fn moon(
        orbit_radius: f64,
        angle: f64,
        orbit_speed: f64,
        radius: f64,
        inner_color: u32,
        outer_color: u32,
    ) -> Moon {
        Moon {
            orbit_radius,
            angle,
            orbit_speed,
            radius,
            inner_color: Color::from_rgba_u32(inner_color),
            outer_color: Color::from_rgba_u32(outer_color),
        }
    }
}

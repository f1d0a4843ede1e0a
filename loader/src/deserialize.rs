//! Lets you load a Simulation from a file.
//! Angles in system files are in degrees; everything else is in pixels and ticks.

use serde::Deserialize;

/// A Vector2D or Point2D.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

#[derive(Deserialize)]
struct RawSystem {
    /// Omit it for a different system every run
    seed: Option<u64>,
    sun: RawSun,
    #[serde(default)]
    field: RawField,
    #[serde(default)]
    planets: Vec<RawPlanet>,
    stars: Option<RawStars>,
    #[serde(default)]
    belts: Vec<RawBelt>,
    comet: RawComet,
}

#[derive(Deserialize)]
struct RawSun {
    radius: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawField {
    /// Follow the window around.
    Window,
    Fixed { min: Vec2D, max: Vec2D },
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Window
    }
}

/// Either the name of a prefab or the whole thing spelled out.
#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Prefab(String),
    Custom(T),
}

#[derive(Deserialize)]
struct RawPlanet {
    body: Body<CustomPlanet>,
    draggable: Option<bool>,
    angle: Option<f64>,
    /// Replaces the prefab's moons if present
    moons: Option<Vec<Body<CustomMoon>>>,
    rings: Option<RawRings>,
}

#[derive(Deserialize)]
struct CustomPlanet {
    name: String,
    orbit_radius: f64,
    radius: f64,
    orbit_speed: f64,
    inner_color: u32,
    outer_color: u32,
}

#[derive(Deserialize)]
struct CustomMoon {
    orbit_radius: f64,
    #[serde(default)]
    angle: f64,
    orbit_speed: f64,
    radius: f64,
    inner_color: u32,
    outer_color: u32,
}

#[derive(Deserialize)]
struct RawRings {
    /// Multiples of the planet's radius
    inner: f64,
    outer: f64,
    #[serde(default)]
    inclination: f64,
    #[serde(default)]
    roll: f64,
    color: u32,
}

#[derive(Deserialize)]
struct RawStars {
    count: usize,
    #[serde(default)]
    placement: RawPlacement,
    min_speed: f64,
    max_speed: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawPlacement {
    Field,
    Shell { min: f64, max: f64 },
}

impl Default for RawPlacement {
    fn default() -> Self {
        RawPlacement::Field
    }
}

#[derive(Deserialize)]
struct RawBelt {
    name: String,
    count: usize,
    min_orbit: f64,
    max_orbit: f64,
    min_speed: f64,
    max_speed: f64,
    min_radius: f64,
    max_radius: f64,
}

#[derive(Deserialize)]
struct RawComet {
    speed: f64,
    radius: f64,
    trail: usize,
    #[serde(default)]
    margin: f64,
    respawn: RawRespawn,
    #[serde(default)]
    collisions: bool,
    explosion: Option<RawExplosion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawRespawn {
    Fixed { origin: Vec2D, heading: f64 },
    Annulus { inner: f64, outer: f64 },
}

#[derive(Deserialize)]
struct RawExplosion {
    duration: f64,
    max_radius: f64,
}

use crate::builder::{BeltBuilder, Entry, Placement, PlanetEntry, StarsBuilder, SystemBuilder};
use crate::error::LoadError;
use crate::prefabs::{self, moons, planets};

use simulator::bodies::{Moon, Planet, RingBand};
use simulator::comet::{Comet, ExplosionSettings, Respawn};
use simulator::geometry::{Color, Tilt};
use simulator::Simulation;

use euclid::default::{Box2D, Point2D};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size of the field before a window tells us otherwise.
pub const DEFAULT_WINDOW: (f64, f64) = (800.0, 600.0);

/// How a system wants to be looked at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum View {
    /// The field is the window. Call `Simulation::resize` whenever it changes.
    Window,
    /// The field is fixed in place; scale it to fit the window.
    Fixed(Box2D<f64>),
}

/// A loaded system, ready to run.
pub struct System {
    pub simulation: Simulation,
    pub view: View,
    pub seed: u64,
}

/// Parses a system file and builds the Simulation it describes.
pub fn load(contents: &str) -> Result<System, LoadError> {
    load_seeded(contents, None)
}

/// Like `load`, but `seed` wins over whatever the file says.
pub fn load_seeded(contents: &str, seed: Option<u64>) -> Result<System, LoadError> {
    let raw: RawSystem = json5::from_str(contents)?;

    let (field, view) = match raw.field {
        RawField::Window => (
            Box2D::new(
                Point2D::zero(),
                Point2D::new(DEFAULT_WINDOW.0, DEFAULT_WINDOW.1),
            ),
            View::Window,
        ),
        RawField::Fixed { min, max } => {
            let field = Box2D::new(Point2D::new(min.0, min.1), Point2D::new(max.0, max.1));
            (field, View::Fixed(field))
        }
    };

    let mut builder = SystemBuilder::new(raw.sun.radius, field, make_comet(raw.comet));
    if let Some(stars) = raw.stars {
        builder.add(Box::new(StarsBuilder {
            count: stars.count,
            placement: match stars.placement {
                RawPlacement::Field => Placement::Field,
                RawPlacement::Shell { min, max } => Placement::Shell { min, max },
            },
            min_speed: stars.min_speed,
            max_speed: stars.max_speed,
        }));
    }
    for belt in raw.belts {
        builder.add(Box::new(BeltBuilder {
            name: belt.name,
            count: belt.count,
            min_orbit: belt.min_orbit,
            max_orbit: belt.max_orbit,
            min_speed: belt.min_speed,
            max_speed: belt.max_speed,
            min_radius: belt.min_radius,
            max_radius: belt.max_radius,
        }));
    }
    for planet in raw.planets {
        builder.add(make_planet(planet)?);
    }

    let seed = seed.or(raw.seed).unwrap_or_else(clock_seed);
    info!("Building system with seed {}", seed);
    Ok(System {
        simulation: builder.construct(seed),
        view,
        seed,
    })
}

/// Reads and loads a system file.
pub fn load_file<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<System, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_seeded(&contents, seed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Helper function to convert from serde to real
fn make_comet(raw: RawComet) -> Comet {
    let respawn = match raw.respawn {
        RawRespawn::Fixed { origin, heading } => Respawn::Fixed {
            origin: Point2D::new(origin.0, origin.1),
            heading: heading.to_radians(),
        },
        RawRespawn::Annulus { inner, outer } => Respawn::Annulus { inner, outer },
    };
    let mut comet = Comet::new(respawn, raw.speed, raw.radius, raw.trail);
    comet.margin = raw.margin;
    comet.collisions = raw.collisions;
    if let Some(explosion) = raw.explosion {
        comet.explosion = ExplosionSettings {
            duration: explosion.duration,
            max_radius: explosion.max_radius,
        };
    }
    comet
}

fn make_planet(raw: RawPlanet) -> Result<Box<dyn Entry>, LoadError> {
    let mut entry = PlanetEntry::new(match raw.body {
        Body::Prefab(id) => get_planet_from_id(&id)?,
        Body::Custom(c) => planets::planet(
            &c.name,
            c.orbit_radius,
            c.radius,
            c.orbit_speed,
            c.inner_color,
            c.outer_color,
        ),
    });
    if let Some(draggable) = raw.draggable {
        entry = entry.draggable(draggable);
    }
    if let Some(angle) = raw.angle {
        entry = entry.at_angle(angle.to_radians());
    }
    if let Some(raw_moons) = raw.moons {
        let moons = raw_moons
            .into_iter()
            .map(make_moon)
            .collect::<Result<Vec<_>, _>>()?;
        entry = entry.with_moons(moons);
    }
    if let Some(rings) = raw.rings {
        entry = entry.with_rings(RingBand {
            inner: rings.inner,
            outer: rings.outer,
            tilt: Tilt {
                inclination: rings.inclination.to_radians(),
                roll: rings.roll.to_radians(),
            },
            color: Color::from_rgba_u32(rings.color),
        });
    }
    Ok(Box::new(entry))
}

fn make_moon(raw: Body<CustomMoon>) -> Result<Moon, LoadError> {
    Ok(match raw {
        Body::Prefab(id) => get_moon_from_id(&id)?,
        Body::Custom(c) => moons::moon(
            c.orbit_radius,
            c.angle.to_radians(),
            c.orbit_speed,
            c.radius,
            c.inner_color,
            c.outer_color,
        ),
    })
}

macro_rules! maker {
    (
        $module:ident: $($name:ident),*
    ) => {
        {
            let mut h = HashMap::new();
            $( h.insert(stringify!($name), prefabs::$module::$name as fn() -> _); )*
            h
        }
    };
}

lazy_static! {
    static ref PLANETS: HashMap<&'static str, fn() -> Planet> = maker![
        planets: mercury, venus, earth, mars, jupiter, saturn, uranus, neptune, pluto
    ];
    static ref MOONS: HashMap<&'static str, fn() -> Moon> =
        maker![moons: luna, io, europa, ganymede];
}

/// Gets a premade Planet from a string
fn get_planet_from_id(id: &str) -> Result<Planet, LoadError> {
    PLANETS
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab {
            kind: "planet",
            name: id.to_string(),
        })
}

/// Gets a premade Moon from a string
fn get_moon_from_id(id: &str) -> Result<Moon, LoadError> {
    MOONS
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab {
            kind: "moon",
            name: id.to_string(),
        })
}

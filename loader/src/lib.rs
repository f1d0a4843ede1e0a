//! The root of this crate doesn't do much.
//! It just re-exports its contents.

pub mod builder;
pub use builder::SystemBuilder;
pub mod deserialize;
pub mod error;
pub mod prefabs; // prefabs::planets::whatever
pub use deserialize::*;
pub use error::LoadError;

#[macro_use]
extern crate lazy_static;

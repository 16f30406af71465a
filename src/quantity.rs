#[macro_use]
mod macros;

pub mod bounds;
pub mod currency;
pub mod distance;
pub mod time;
pub mod volume;

pub use self::bounds::{Bounds, Finite};

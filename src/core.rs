#[macro_use]
mod tag;

pub mod comparison;
pub mod generator;
pub mod limits;
pub mod parameters;
pub mod pattern;
pub mod projection;
pub mod range;
pub mod usage;
pub mod vehicle;

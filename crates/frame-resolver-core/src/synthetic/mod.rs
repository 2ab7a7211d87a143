mod frames;
mod noise;

pub use frames::*;
pub use noise::*;

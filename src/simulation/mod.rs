mod noise;

pub use noise::{NoiseGenerator, NoiseKind};

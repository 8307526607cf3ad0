mod generate;

pub use generate::{Overrides, generate};

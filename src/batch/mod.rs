pub mod counter;
pub mod runner;

pub use counter::*;
pub use runner::*;

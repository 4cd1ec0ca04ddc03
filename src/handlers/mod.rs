pub mod episode_row;
pub mod fallback;
pub mod handler;
pub mod registry;
pub mod season;

pub use handler::*;
pub use registry::*;
pub use season::{SeasonExtractor, season_number_from_title};

//! Field extractors. Each reads one semantic field from the parsed tree
//! and/or the raw article; a missing source yields `None` or an empty list.

pub mod awards;
pub mod crew;
pub mod details;
pub mod external_ids;
pub mod genre;
pub mod media_type;
pub mod meta;
pub mod plot;
pub mod poster;
pub mod region;
pub mod trailers;

pub use awards::extract_awards;
pub use crew::{
    CREW_ROLES, DIRECTOR_ROLES, PRODUCER_ROLES, STARRING_ROLES, WRITER_ROLES, extract_crew,
};
pub use details::{extract_budget, extract_related_media, extract_running_time};
pub use external_ids::extract_external_ids;
pub use genre::extract_genres;
pub use media_type::classify_media_type;
pub use meta::extract_meta;
pub use plot::{PlotSummary, extract_plot_summary};
pub use poster::extract_poster_image;
pub use region::extract_region;
pub use trailers::extract_trailers;

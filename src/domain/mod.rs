pub mod artist_data;
pub mod explore;

pub mod errors;
pub mod events;
pub mod logging;

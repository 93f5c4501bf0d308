//! Built-in assessment banks. Static data, fixed at deploy time.

pub mod life_season;
pub mod spiritual_gifts;

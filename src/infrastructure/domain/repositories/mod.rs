pub mod anime;
pub mod chapter;
pub mod favorite;
pub mod manga;
pub mod profile;
pub mod schedule;

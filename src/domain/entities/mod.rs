pub mod anime;
pub mod chapter;
pub mod favorite;
pub mod manga;
pub mod paging;
pub mod profile;
pub mod reader;
pub mod schedule;

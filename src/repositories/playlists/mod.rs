pub mod playlist_repo;

pub use playlist_repo::*;

pub mod tweet_repo;

pub use tweet_repo::*;

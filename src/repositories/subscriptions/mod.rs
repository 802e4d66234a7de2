pub mod subscription_repo;

pub use subscription_repo::*;

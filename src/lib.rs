pub mod advisor;
pub mod derived;
pub mod export;
pub mod model;
pub mod offline_cache;
pub mod photo;
pub mod seed;
pub mod share;
pub mod standings;
pub mod state;
pub mod tactics;

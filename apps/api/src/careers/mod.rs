// Career recommendations: static catalog, keyword matcher, AI advisor with fallback.

pub mod advisor;
pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod prompts;
pub mod store;

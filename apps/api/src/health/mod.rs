// Career health score: weighted aggregation of profile, learning and resume signals.

pub mod handlers;
pub mod score;
pub mod store;
pub mod suggestions;

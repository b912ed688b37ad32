// Career profile: the user's skills, interests, goals and education.

pub mod handlers;
pub mod store;
pub mod validation;

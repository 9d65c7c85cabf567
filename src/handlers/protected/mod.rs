// Everything in this tree sits behind the JWT middleware; handlers receive
// the authenticated identity as an `AuthUser` extension.

pub mod auth;
pub mod clients;
pub mod images;
pub mod profile;
pub mod projects;
pub mod socials;
pub mod technologies;
pub mod work_experiences;

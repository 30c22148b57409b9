//! Infrastructure layer - Concrete implementations behind the domain seams

pub mod auth;
pub mod logging;
pub mod user;

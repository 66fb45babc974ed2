pub mod error;

// HR domain modules
pub mod analytics;
pub mod auth;
pub mod config;
pub mod employee;
pub mod feedback;
pub mod requests;
pub mod role;
pub mod skill;
pub mod training;

pub use error::*;

pub use analytics::*;
pub use auth::*;
pub use config::*;
pub use employee::*;
pub use feedback::*;
pub use requests::*;
pub use role::*;
pub use skill::*;
pub use training::*;

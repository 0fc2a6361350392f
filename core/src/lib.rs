pub mod config;
pub mod error;
pub mod landing;
pub mod skills;

pub use config::*;
pub use error::{Result, SkillError};
pub use landing::{LandingPage, generate_structure};
pub use skills::*;

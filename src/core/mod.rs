pub mod astronomy;
pub mod config;
pub mod error;
pub mod types;

pub use astronomy::{AlignmentWindow, MoonPhase, Season};

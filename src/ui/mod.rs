pub mod starfield;
pub mod state;

pub use state::{Screen, Session};

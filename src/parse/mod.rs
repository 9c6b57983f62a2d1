pub mod classify;
pub mod types;

pub use classify::classify;
pub use types::{ClassifiedCommand, Tool};

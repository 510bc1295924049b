mod error;
mod mechanism;
mod catalysis;
mod binding;
mod mechanism_map;

pub use error::*;
pub use mechanism::*;
pub use catalysis::*;
pub use binding::*;
pub use mechanism_map::*;

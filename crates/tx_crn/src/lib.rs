mod error;
mod species;
mod complex;
mod reaction;

pub use error::*;
pub use species::*;
pub use complex::*;
pub use reaction::*;

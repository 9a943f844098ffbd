// File: crates/axis-core/src/lib.rs
// Summary: Core library entry point; exports the axis normalisation API.

pub mod error;
pub mod nice;
pub mod normalise;
pub mod scale;

pub use error::NormaliseError;
pub use nice::nice_number;
pub use normalise::{normalise, Normalisation, NormaliserOptions};
pub use scale::ValueScale;

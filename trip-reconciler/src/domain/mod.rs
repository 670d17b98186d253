//! Domain types for trip reconciliation.
//!
//! This module contains the entity types a polled departure feed delivers.
//! Identity-bearing fields are validated at construction time, so code
//! that receives these types can trust their validity. Serde attributes
//! mirror the feed's camelCase JSON field names.

mod fahrt;
mod line;
mod product;
mod stop;
mod trip;
mod trip_id;

pub use fahrt::{FahrtNr, InvalidFahrtNr};
pub use line::Line;
pub use product::{InvalidProduct, Product};
pub use stop::{Stop, StopId};
pub use trip::Trip;
pub use trip_id::date_fragment;

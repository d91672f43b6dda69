#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain model and pure utilities for the vessel encounter engine:
//! raw track data, passages, encounter records, great-circle geometry,
//! and the port traits the surrounding I/O layer implements.

mod domain;
pub mod error;
mod geo;
mod mean;
mod ports;

pub use domain::*;
pub use error::*;
pub use geo::*;
pub use mean::*;
pub use ports::*;

#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod distances;
pub mod helper;
pub mod processor;

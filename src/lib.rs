#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod cli;
pub mod conversion;
pub mod errors;

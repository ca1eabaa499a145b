#[macro_use] extern crate hex_literal;

mod stats;
mod util;
mod crypto;
pub mod challenges;

pub use stats::*;
pub use util::*;
pub use crypto::*;

#![no_std]

pub mod address;
pub mod amounts;

pub use address::*;
pub use amounts::*;

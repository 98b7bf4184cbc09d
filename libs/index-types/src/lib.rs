#![no_std]

mod effect;
mod error;
mod interfaces;
mod recovery;

pub use effect::*;
pub use error::*;
pub use interfaces::*;
pub use recovery::*;

/// Amount passed to the bridge for every recovery deposit (2^128 - 1).
/// The bridge treats it as "full balance"; the deposit gate accepts nothing else.
pub const SIDE_CHAIN_DEPOSIT_AMOUNT: u128 = u128::MAX;

/// Reference-asset units left behind in a liquidity pair when it is drained.
/// A pair refuses to release its whole reserve, so the drain takes balance - 1.
pub const PAIR_RESERVE_FLOOR: i128 = 1;

/// Drain routine names exposed by the recovery implementation
pub const DEFI5_ROUTINE: &str = "defi5";
pub const CC10_ROUTINE: &str = "cc10";
pub const FFF_ROUTINE: &str = "fff";
pub const CC10_SELLER_ROUTINE: &str = "cc10_seller";

// TTL constants shared by every contract in the workspace
pub const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub const PERSISTENT_TTL_EXTEND: u32 = 518400;

#![no_std]
//! Disabling fallback for retired pools.
//!
//! Every balance-moving call fails with a fixed reason. Reads never reach this
//! contract; the pool proxy answers them from its own storage.

use index_types::{Effect, PoolContext};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

/// Reason every mutating call fails with
pub const DISABLED_REASON: &str = "Pool disabled";

#[contract]
pub struct DisabledImplementation;

#[contractimpl]
impl DisabledImplementation {
    pub fn transfer(_env: Env, _ctx: PoolContext, _from: Address, _to: Address, _amount: u128) -> Vec<Effect> {
        panic!("{}", DISABLED_REASON);
    }

    pub fn transfer_from(
        _env: Env,
        _ctx: PoolContext,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: u128,
    ) -> Vec<Effect> {
        panic!("{}", DISABLED_REASON);
    }

    pub fn approve(_env: Env, _ctx: PoolContext, _from: Address, _spender: Address, _amount: u128) -> Vec<Effect> {
        panic!("{}", DISABLED_REASON);
    }

    pub fn reason(env: Env) -> String {
        String::from_str(&env, DISABLED_REASON)
    }
}

#![no_std]
//! Repaired pool implementation: standard index token behaviour.

use index_types::{Effect, PoolContext};
use soroban_sdk::{contract, contractimpl, vec, Address, Env, Vec};

#[contract]
pub struct PoolImplementation;

#[contractimpl]
impl PoolImplementation {
    pub fn transfer(env: Env, ctx: PoolContext, from: Address, to: Address, amount: u128) -> Vec<Effect> {
        ctx.pool.require_auth();
        vec![&env, Effect::Transfer(from, to, amount)]
    }

    /// Spends `spender`'s allowance before moving the tokens
    pub fn transfer_from(
        env: Env,
        ctx: PoolContext,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Vec<Effect> {
        ctx.pool.require_auth();
        vec![
            &env,
            Effect::SpendAllowance(from.clone(), spender, amount),
            Effect::Transfer(from, to, amount),
        ]
    }

    pub fn approve(env: Env, ctx: PoolContext, from: Address, spender: Address, amount: u128) -> Vec<Effect> {
        ctx.pool.require_auth();
        vec![&env, Effect::Approve(from, spender, amount)]
    }
}

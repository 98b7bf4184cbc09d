// ============================================================================
// CROSS-CONTRACT INTERFACES
// ============================================================================
//
// Contracts in this workspace never link each other in non-test builds (each
// one is its own WASM). They talk through these generated clients instead.
//
// ============================================================================

use crate::{Effect, IncidentConfig, PoolContext};
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol, Vec};

/// Index token surface exposed by every pool proxy
#[allow(unused)]
#[contractclient(name = "IndexTokenClient")]
pub trait IndexTokenInterface {
    fn balance(env: Env, id: Address) -> u128;
    fn allowance(env: Env, from: Address, spender: Address) -> u128;
    fn total_supply(env: Env) -> u128;
    fn decimals(env: Env) -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn transfer(env: Env, from: Address, to: Address, amount: u128) -> bool;
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: u128) -> bool;
    fn approve(env: Env, from: Address, spender: Address, amount: u128) -> bool;
}

/// Proxy-only surface of a pool
#[allow(unused)]
#[contractclient(name = "PoolProxyClient")]
pub trait PoolProxyInterface {
    fn registry(env: Env) -> Address;
    fn implementation(env: Env) -> Address;
    /// Run an implementation-defined routine as this pool and commit its effects
    fn execute(env: Env, routine: Symbol) -> Vec<Effect>;
}

/// Mutation policy a pool proxy delegates to.
///
/// Implementations return the effects to apply; they never touch pool storage.
/// Routines beyond these (drains) are invoked by name through the pool's `execute`.
#[allow(unused)]
#[contractclient(name = "PoolImplementationClient")]
pub trait PoolImplementationInterface {
    fn transfer(env: Env, ctx: PoolContext, from: Address, to: Address, amount: u128) -> Vec<Effect>;
    fn transfer_from(
        env: Env,
        ctx: PoolContext,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Vec<Effect>;
    fn approve(env: Env, ctx: PoolContext, from: Address, spender: Address, amount: u128) -> Vec<Effect>;
}

#[allow(unused)]
#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
    fn set_implementation_many_to_one(env: Env, class_id: BytesN<32>, implementation: Address);
    fn set_implementation_one_to_one(env: Env, proxy: Address, implementation: Address);
    fn implementation_of(env: Env, proxy: Address) -> Address;
}

#[allow(unused)]
#[contractclient(name = "PairClient")]
pub trait PairInterface {
    /// (index token reserve, reference asset reserve)
    fn get_reserves(env: Env) -> (u128, i128);
    fn sync(env: Env);
    fn swap(env: Env, index_out: u128, reference_out: i128, to: Address);
}

#[allow(unused)]
#[contractclient(name = "PredicateClient")]
pub trait PredicateInterface {
    fn lock_tokens(env: Env, depositor: Address, beneficiary: Address, asset: Address, amount: u128);
}

#[allow(unused)]
#[contractclient(name = "IncidentClient")]
pub trait IncidentInterface {
    fn incident(env: Env) -> IncidentConfig;
}

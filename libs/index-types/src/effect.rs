use soroban_sdk::{contracttype, Address};

/// Identity a pool proxy hands to its implementation.
///
/// Implementations run in their own contract frame, so the executing pool is
/// passed explicitly. Implementations that act on it call
/// `ctx.pool.require_auth()`, which only the pool itself satisfies implicitly
/// when it is the direct invoker.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolContext {
    pub pool: Address,
}

/// A state change staged by an implementation and committed by the pool proxy.
///
/// Ledger amounts are index token units (u128). `TokenTransfer` moves an
/// underlying SEP-41 token held by the pool and uses that token's i128 amounts.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    /// Move index tokens: (from, to, amount)
    Transfer(Address, Address, u128),
    /// Consume an allowance: (owner, spender, amount)
    SpendAllowance(Address, Address, u128),
    /// Overwrite an allowance: (owner, spender, amount)
    Approve(Address, Address, u128),
    /// Create index tokens: (to, amount)
    Mint(Address, u128),
    /// Send an underlying token out of the pool: (token, to, amount)
    TokenTransfer(Address, Address, i128),
}

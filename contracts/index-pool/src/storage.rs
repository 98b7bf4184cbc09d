use index_types::{
    INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the pool proxy
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Registry resolving this pool's implementation (Instance storage)
    Registry,
    /// Token metadata (Instance storage)
    Metadata,
    /// Total index token supply (Instance storage)
    TotalSupply,
    /// Holder -> balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> allowance (Persistent storage)
    Allowance(Address, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Registry ===

pub fn get_registry(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .expect("Pool not initialized")
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
    extend_instance_ttl(env);
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> TokenMetadata {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .expect("Pool not initialized")
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: u128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_balance(env: &Env, id: &Address) -> u128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, balance: u128) {
    let key = DataKey::Balance(id.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowances ===

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, allowance: u128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if allowance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &allowance);
        extend_persistent_ttl(env, &key);
    }
}

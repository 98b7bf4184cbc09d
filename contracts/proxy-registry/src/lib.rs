#![no_std]
//! Proxy implementation registry.
//!
//! Maps pool proxies to the implementation they delegate to. A proxy either
//! belongs to a class (many-to-one: every proxy of the class shares one
//! implementation) or carries its own one-to-one mapping, which takes
//! precedence. Every mutation requires the owner's authorization; ownership is
//! transferable.

use index_types::{
    INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, BytesN, Env, Symbol,
};

#[contract]
pub struct ProxyRegistry;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Proxy has neither a one-to-one mapping nor a class with an implementation
    ImplementationNotSet = 1,
    /// Proxy already belongs to a class
    ProxyAlreadyRegistered = 2,
}

/// Storage keys for the registry
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Current owner (Instance storage)
    Owner,
    /// Class id -> implementation (Persistent storage)
    ManyToOne(BytesN<32>),
    /// Proxy -> implementation override (Persistent storage)
    OneToOne(Address),
    /// Proxy -> class id (Persistent storage)
    ProxyClass(Address),
}

#[contractimpl]
impl ProxyRegistry {
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
        extend_instance_ttl(&env);
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    /// Hand every mutation right to `new_owner`
    pub fn transfer_ownership(env: Env, new_owner: Address) {
        let previous = require_owner(&env);
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        extend_instance_ttl(&env);

        env.events().publish(
            (Symbol::new(&env, "owner_transferred"),),
            (previous, new_owner),
        );
    }

    /// Point every proxy of `class_id` at `implementation`
    pub fn set_implementation_many_to_one(env: Env, class_id: BytesN<32>, implementation: Address) {
        require_owner(&env);

        let key = DataKey::ManyToOne(class_id.clone());
        env.storage().persistent().set(&key, &implementation);
        extend_persistent_ttl(&env, &key);

        env.events().publish(
            (Symbol::new(&env, "many_to_one_updated"),),
            (class_id, implementation),
        );
    }

    /// Point one proxy at `implementation`, overriding its class
    pub fn set_implementation_one_to_one(env: Env, proxy: Address, implementation: Address) {
        require_owner(&env);

        let key = DataKey::OneToOne(proxy.clone());
        env.storage().persistent().set(&key, &implementation);
        extend_persistent_ttl(&env, &key);

        env.events().publish(
            (Symbol::new(&env, "one_to_one_updated"),),
            (proxy, implementation),
        );
    }

    /// Enrol a proxy in a class. A proxy joins exactly one class, once.
    pub fn register_many_to_one_proxy(
        env: Env,
        class_id: BytesN<32>,
        proxy: Address,
    ) -> Result<(), RegistryError> {
        require_owner(&env);

        let key = DataKey::ProxyClass(proxy.clone());
        if env.storage().persistent().has(&key) {
            return Err(RegistryError::ProxyAlreadyRegistered);
        }
        env.storage().persistent().set(&key, &class_id);
        extend_persistent_ttl(&env, &key);

        env.events().publish(
            (Symbol::new(&env, "proxy_registered"),),
            (class_id, proxy),
        );
        Ok(())
    }

    // === View Functions ===

    /// Implementation `proxy` currently delegates to
    pub fn implementation_of(env: Env, proxy: Address) -> Result<Address, RegistryError> {
        if let Some(implementation) = Self::one_to_one_implementation(env.clone(), proxy.clone()) {
            return Ok(implementation);
        }
        Self::proxy_class(env.clone(), proxy)
            .and_then(|class_id| Self::many_to_one_implementation(env, class_id))
            .ok_or(RegistryError::ImplementationNotSet)
    }

    pub fn many_to_one_implementation(env: Env, class_id: BytesN<32>) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::ManyToOne(class_id))
    }

    pub fn one_to_one_implementation(env: Env, proxy: Address) -> Option<Address> {
        env.storage().persistent().get(&DataKey::OneToOne(proxy))
    }

    pub fn proxy_class(env: Env, proxy: Address) -> Option<BytesN<32>> {
        env.storage().persistent().get(&DataKey::ProxyClass(proxy))
    }
}

fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Not initialized")
}

fn require_owner(env: &Env) -> Address {
    let owner = get_owner(env);
    owner.require_auth();
    owner
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

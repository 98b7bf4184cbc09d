#![no_std]
//! Index pool proxy.
//!
//! Holds the pool's index token ledger and address. Reads are served from
//! storage; every mutation is delegated to the implementation the registry
//! currently maps this pool to, and the effects it returns are committed here.

mod ledger;
mod storage;

use index_types::{Effect, PoolContext, PoolImplementationClient, RegistryClient};
use soroban_sdk::{contract, contractimpl, Address, Env, IntoVal, String, Symbol, Vec};
use storage::{
    get_allowance, get_balance, get_metadata, get_registry, get_total_supply, set_metadata,
    set_registry, TokenMetadata,
};

#[contract]
pub struct IndexPool;

#[contractimpl]
impl IndexPool {
    /// Deploy a pool with its whole initial supply credited to `holder`
    pub fn __constructor(
        env: Env,
        registry: Address,
        name: String,
        symbol: String,
        decimals: u32,
        holder: Address,
        supply: u128,
    ) {
        set_registry(&env, &registry);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        if supply > 0 {
            ledger::mint(&env, &holder, supply);
        }
    }

    // === Mutations (delegated) ===

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> bool {
        from.require_auth();

        let effects = implementation_client(&env).transfer(&context(&env), &from, &to, &amount);
        ledger::apply(&env, &effects);
        true
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> bool {
        spender.require_auth();

        let effects = implementation_client(&env).transfer_from(
            &context(&env),
            &spender,
            &from,
            &to,
            &amount,
        );
        ledger::apply(&env, &effects);
        true
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: u128) -> bool {
        from.require_auth();

        let effects = implementation_client(&env).approve(&context(&env), &from, &spender, &amount);
        ledger::apply(&env, &effects);
        true
    }

    /// Run `routine` of the current implementation as this pool.
    ///
    /// Requires the registry owner's authorization. The routine receives the
    /// pool context as its only argument, returns the effects to commit, and
    /// decides itself whether it may run here. Implementations that expose no
    /// such function cannot be driven through `execute` at all.
    ///
    /// # Returns
    /// The committed effects
    pub fn execute(env: Env, routine: Symbol) -> Vec<Effect> {
        let registry = RegistryClient::new(&env, &get_registry(&env));
        registry.owner().require_auth();

        let implementation = registry.implementation_of(&env.current_contract_address());
        let effects: Vec<Effect> =
            env.invoke_contract(&implementation, &routine, (context(&env),).into_val(&env));
        ledger::apply(&env, &effects);
        effects
    }

    // === View Functions ===

    pub fn balance(env: Env, id: Address) -> u128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> u128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> u128 {
        get_total_supply(&env)
    }

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }

    pub fn registry(env: Env) -> Address {
        get_registry(&env)
    }

    /// Implementation the registry currently maps this pool to
    pub fn implementation(env: Env) -> Address {
        RegistryClient::new(&env, &get_registry(&env)).implementation_of(&env.current_contract_address())
    }
}

fn context(env: &Env) -> PoolContext {
    PoolContext {
        pool: env.current_contract_address(),
    }
}

fn implementation_client(env: &Env) -> PoolImplementationClient<'_> {
    let implementation = IndexPool::implementation(env.clone());
    PoolImplementationClient::new(env, &implementation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use disabled_implementation::DisabledImplementation;
    use pool_implementation::PoolImplementation;
    use proxy_registry::{ProxyRegistry, ProxyRegistryClient};
    use soroban_sdk::testutils::{Address as _, Events as _};
    use soroban_sdk::{symbol_short, vec, Address, BytesN, Env, String};

    const SUPPLY: u128 = 1_000_000;

    struct Setup<'a> {
        holder: Address,
        class_id: BytesN<32>,
        registry: ProxyRegistryClient<'a>,
        pool: IndexPoolClient<'a>,
    }

    fn setup(env: &Env) -> Setup<'_> {
        env.mock_all_auths();

        let owner = Address::generate(env);
        let holder = Address::generate(env);
        let registry_id = env.register(ProxyRegistry, (owner,));
        let registry = ProxyRegistryClient::new(env, &registry_id);
        let implementation = env.register(PoolImplementation, ());

        let pool_id = env.register(
            IndexPool,
            (
                registry_id,
                String::from_str(env, "DEFI Top 5 Tokens Index"),
                String::from_str(env, "DEFI5"),
                18u32,
                holder.clone(),
                SUPPLY,
            ),
        );

        let class_id = BytesN::from_array(env, &[1; 32]);
        registry.register_many_to_one_proxy(&class_id, &pool_id);
        registry.set_implementation_many_to_one(&class_id, &implementation);

        Setup {
            holder,
            class_id,
            registry,
            pool: IndexPoolClient::new(env, &pool_id),
        }
    }

    #[test]
    fn test_constructor_sets_metadata_and_supply() {
        let env = Env::default();
        let s = setup(&env);

        assert_eq!(s.pool.name(), String::from_str(&env, "DEFI Top 5 Tokens Index"));
        assert_eq!(s.pool.symbol(), String::from_str(&env, "DEFI5"));
        assert_eq!(s.pool.decimals(), 18);
        assert_eq!(s.pool.total_supply(), SUPPLY);
        assert_eq!(s.pool.balance(&s.holder), SUPPLY);
        assert_eq!(s.pool.registry(), s.registry.address);
    }

    #[test]
    fn test_transfer_through_implementation() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        assert!(s.pool.transfer(&s.holder, &recipient, &400));
        assert_eq!(s.pool.balance(&s.holder), SUPPLY - 400);
        assert_eq!(s.pool.balance(&recipient), 400);
        assert_eq!(s.pool.total_supply(), SUPPLY);
    }

    #[test]
    #[should_panic(expected = "Insufficient balance")]
    fn test_transfer_insufficient_balance() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        s.pool.transfer(&recipient, &s.holder, &1);
    }

    #[test]
    fn test_transfer_requires_auth() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        env.set_auths(&[]);
        assert!(s.pool.try_transfer(&s.holder, &recipient, &1).is_err());
        assert_eq!(s.pool.balance(&s.holder), SUPPLY);
    }

    #[test]
    fn test_approve_and_transfer_from() {
        let env = Env::default();
        let s = setup(&env);
        let spender = Address::generate(&env);
        let recipient = Address::generate(&env);

        s.pool.approve(&s.holder, &spender, &500);
        assert_eq!(s.pool.allowance(&s.holder, &spender), 500);

        s.pool.transfer_from(&spender, &s.holder, &recipient, &300);
        assert_eq!(s.pool.allowance(&s.holder, &spender), 200);
        assert_eq!(s.pool.balance(&recipient), 300);
        assert_eq!(s.pool.balance(&s.holder), SUPPLY - 300);
    }

    #[test]
    #[should_panic(expected = "Insufficient allowance")]
    fn test_transfer_from_exceeds_allowance() {
        let env = Env::default();
        let s = setup(&env);
        let spender = Address::generate(&env);
        let recipient = Address::generate(&env);

        s.pool.approve(&s.holder, &spender, &100);
        s.pool.transfer_from(&spender, &s.holder, &recipient, &101);
    }

    #[test]
    fn test_disabled_implementation_keeps_reads() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        let disabled = env.register(DisabledImplementation, ());
        s.registry.set_implementation_many_to_one(&s.class_id, &disabled);
        assert_eq!(s.pool.implementation(), disabled);

        assert!(s.pool.try_transfer(&s.holder, &recipient, &1).is_err());
        assert!(s.pool.try_approve(&s.holder, &recipient, &1).is_err());

        assert_eq!(s.pool.balance(&s.holder), SUPPLY);
        assert_eq!(s.pool.total_supply(), SUPPLY);
        assert_eq!(s.pool.symbol(), String::from_str(&env, "DEFI5"));
    }

    #[test]
    fn test_per_pool_override_wins() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        let disabled = env.register(DisabledImplementation, ());
        s.registry.set_implementation_many_to_one(&s.class_id, &disabled);
        let repaired = env.register(PoolImplementation, ());
        s.registry.set_implementation_one_to_one(&s.pool.address, &repaired);

        assert_eq!(s.pool.implementation(), repaired);
        s.pool.transfer(&s.holder, &recipient, &10);
        assert_eq!(s.pool.balance(&recipient), 10);
    }

    #[test]
    fn test_unregistered_pool_rejects_mutations() {
        let env = Env::default();
        let s = setup(&env);

        let orphan_id = env.register(
            IndexPool,
            (
                s.registry.address.clone(),
                String::from_str(&env, "Orphan"),
                String::from_str(&env, "ORPH"),
                7u32,
                s.holder.clone(),
                10u128,
            ),
        );
        let orphan = IndexPoolClient::new(&env, &orphan_id);

        assert!(orphan.try_implementation().is_err());
        assert!(orphan.try_transfer(&s.holder, &s.holder, &1).is_err());
        assert_eq!(orphan.balance(&s.holder), 10);
    }

    #[test]
    fn test_transfer_emits_event() {
        let env = Env::default();
        let s = setup(&env);
        let recipient = Address::generate(&env);

        s.pool.transfer(&s.holder, &recipient, &400);
        assert_eq!(
            env.events().all().filter_by_contract(&s.pool.address),
            vec![
                &env,
                (
                    s.pool.address.clone(),
                    (symbol_short!("transfer"), s.holder.clone(), recipient).into_val(&env),
                    400u128.into_val(&env),
                ),
            ]
        );
    }

    #[test]
    fn test_execute_unknown_routine_fails() {
        let env = Env::default();
        let s = setup(&env);

        assert!(s
            .pool
            .try_execute(&Symbol::new(&env, "defi5"))
            .is_err());
        assert_eq!(s.pool.balance(&s.holder), SUPPLY);
    }
}

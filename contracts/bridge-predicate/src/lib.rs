#![no_std]
//! Cross-chain bridge lock predicate.
//!
//! Locks a token on this chain by pulling it from the depositor with the
//! token's own `transfer_from`, then records the deposit for the side chain.

use index_types::{
    IndexTokenClient, LockedDeposit, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, Symbol, Vec};

#[contract]
pub struct BridgePredicate;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BridgeError {
    ZeroAmount = 1,
    /// The asset reported a failed pull instead of trapping
    TransferRejected = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Number of accepted deposits (Instance storage)
    DepositCount,
    /// Deposit by acceptance index (Persistent storage)
    Deposit(u32),
}

#[contractimpl]
impl BridgePredicate {
    /// Lock `amount` of `asset` from `depositor` for `beneficiary` on the side chain
    pub fn lock_tokens(
        env: Env,
        depositor: Address,
        beneficiary: Address,
        asset: Address,
        amount: u128,
    ) -> Result<(), BridgeError> {
        depositor.require_auth();
        if amount == 0 {
            return Err(BridgeError::ZeroAmount);
        }

        let contract_address = env.current_contract_address();
        let pulled = IndexTokenClient::new(&env, &asset).transfer_from(
            &contract_address,
            &depositor,
            &contract_address,
            &amount,
        );
        if !pulled {
            return Err(BridgeError::TransferRejected);
        }

        let deposit = LockedDeposit {
            depositor,
            beneficiary,
            asset,
            amount,
        };
        let index = Self::deposit_count(env.clone());
        let key = DataKey::Deposit(index);
        env.storage().persistent().set(&key, &deposit);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
        env.storage()
            .instance()
            .set(&DataKey::DepositCount, &(index + 1));

        env.events()
            .publish((Symbol::new(&env, "locked_erc20"),), deposit);
        Ok(())
    }

    pub fn deposit_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::DepositCount)
            .unwrap_or(0)
    }

    pub fn deposit(env: Env, index: u32) -> Option<LockedDeposit> {
        env.storage().persistent().get(&DataKey::Deposit(index))
    }

    /// Every accepted deposit, oldest first
    pub fn deposits(env: Env) -> Vec<LockedDeposit> {
        let mut deposits = Vec::new(&env);
        for index in 0..Self::deposit_count(env.clone()) {
            if let Some(deposit) = Self::deposit(env.clone(), index) {
                deposits.push_back(deposit);
            }
        }
        deposits
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

#[cfg(test)]
mod tests {
    use super::*;
    use index_pool::{IndexPool, IndexPoolClient};
    use pool_implementation::PoolImplementation;
    use proxy_registry::{ProxyRegistry, ProxyRegistryClient};
    use soroban_sdk::testutils::{Address as _, Events as _};
    use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, String};

    /// Asset that answers every pull with `false`
    #[contract]
    pub struct RefusingAsset;

    #[contractimpl]
    impl RefusingAsset {
        pub fn transfer_from(
            _env: Env,
            _spender: Address,
            _from: Address,
            _to: Address,
            _amount: u128,
        ) -> bool {
            false
        }
    }

    fn setup(env: &Env) -> (Address, IndexPoolClient<'_>, BridgePredicateClient<'_>) {
        env.mock_all_auths();

        let holder = Address::generate(env);
        let registry_id = env.register(ProxyRegistry, (Address::generate(env),));
        let registry = ProxyRegistryClient::new(env, &registry_id);
        let implementation = env.register(PoolImplementation, ());
        let pool_id = env.register(
            IndexPool,
            (
                registry_id,
                String::from_str(env, "Future of Finance Index"),
                String::from_str(env, "FFF"),
                18u32,
                holder.clone(),
                10_000u128,
            ),
        );
        let class_id = BytesN::from_array(env, &[2; 32]);
        registry.register_many_to_one_proxy(&class_id, &pool_id);
        registry.set_implementation_many_to_one(&class_id, &implementation);

        let predicate_id = env.register(BridgePredicate, ());
        (
            holder,
            IndexPoolClient::new(env, &pool_id),
            BridgePredicateClient::new(env, &predicate_id),
        )
    }

    #[test]
    fn test_lock_tokens_pulls_and_records() {
        let env = Env::default();
        let (holder, pool, predicate) = setup(&env);
        let beneficiary = Address::generate(&env);

        pool.approve(&holder, &predicate.address, &600);
        predicate.lock_tokens(&holder, &beneficiary, &pool.address, &600);

        let deposit = LockedDeposit {
            depositor: holder.clone(),
            beneficiary,
            asset: pool.address.clone(),
            amount: 600,
        };
        assert_eq!(
            env.events().all().filter_by_contract(&predicate.address),
            vec![
                &env,
                (
                    predicate.address.clone(),
                    (Symbol::new(&env, "locked_erc20"),).into_val(&env),
                    deposit.clone().into_val(&env),
                ),
            ]
        );

        assert_eq!(pool.balance(&predicate.address), 600);
        assert_eq!(pool.balance(&holder), 9_400);
        assert_eq!(predicate.deposit_count(), 1);
        assert_eq!(predicate.deposit(&0), Some(deposit.clone()));
        assert_eq!(predicate.deposits(), vec![&env, deposit]);
    }

    #[test]
    fn test_deposits_keep_acceptance_order() {
        let env = Env::default();
        let (holder, pool, predicate) = setup(&env);
        let first = Address::generate(&env);
        let second = Address::generate(&env);

        pool.approve(&holder, &predicate.address, &1_000);
        predicate.lock_tokens(&holder, &first, &pool.address, &400);
        predicate.lock_tokens(&holder, &second, &pool.address, &250);

        assert_eq!(predicate.deposit_count(), 2);
        let deposits = predicate.deposits();
        assert_eq!(deposits.get(0).unwrap().beneficiary, first);
        assert_eq!(deposits.get(1).unwrap().amount, 250);
        assert_eq!(deposits.get(1).unwrap().beneficiary, second);
        assert_eq!(predicate.deposit(&2), None);
        assert_eq!(pool.allowance(&holder, &predicate.address), 350);
    }

    #[test]
    fn test_lock_tokens_asset_reports_failure() {
        let env = Env::default();
        let (holder, _, predicate) = setup(&env);
        let beneficiary = Address::generate(&env);
        let asset = env.register(RefusingAsset, ());

        assert_eq!(
            predicate.try_lock_tokens(&holder, &beneficiary, &asset, &600),
            Err(Ok(BridgeError::TransferRejected))
        );
        assert_eq!(predicate.deposit_count(), 0);
    }

    #[test]
    fn test_lock_tokens_without_allowance_fails() {
        let env = Env::default();
        let (holder, pool, predicate) = setup(&env);
        let beneficiary = Address::generate(&env);

        assert!(predicate
            .try_lock_tokens(&holder, &beneficiary, &pool.address, &1)
            .is_err());
        assert_eq!(predicate.deposit_count(), 0);
    }

    #[test]
    fn test_lock_tokens_zero_amount() {
        let env = Env::default();
        let (holder, pool, predicate) = setup(&env);
        let beneficiary = Address::generate(&env);

        assert_eq!(
            predicate.try_lock_tokens(&holder, &beneficiary, &pool.address, &0),
            Err(Ok(BridgeError::ZeroAmount))
        );
    }

    #[test]
    fn test_lock_tokens_requires_depositor_auth() {
        let env = Env::default();
        let (holder, pool, predicate) = setup(&env);
        let beneficiary = Address::generate(&env);
        pool.approve(&holder, &predicate.address, &600);

        env.set_auths(&[]);
        assert!(predicate
            .try_lock_tokens(&holder, &beneficiary, &pool.address, &600)
            .is_err());
        assert_eq!(pool.balance(&holder), 10_000);
    }
}

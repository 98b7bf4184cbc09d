#![no_std]
//! Recovery orchestrator.
//!
//! Runs the one-shot recovery in a single transaction: take the affected pool
//! families over with the recovery implementation, drain every affected pool
//! to the treasury, settle the reference pairs, make one gated bridge deposit
//! per bridged pool, then install the final implementations.
//!
//! The orchestrator must own the registry before `drain_and_repair` is called.
//! Any failing step aborts the whole transaction.

mod plan;

use index_types::{
    PairClient, PoolProxyClient, PredicateClient, RecoveryConfig, RecoveryError, RecoveryStep,
    RegistryClient, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, SIDE_CHAIN_DEPOSIT_AMOUNT,
};
use soroban_sdk::{contract, contractimpl, contracttype, Env, Symbol, Vec};

#[contract]
pub struct RecoveryOrchestrator;

/// Storage keys for the orchestrator
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Recovery configuration (Instance storage)
    Config,
    /// Set once the recovery completed (Instance storage)
    Executed,
}

#[contractimpl]
impl RecoveryOrchestrator {
    pub fn __constructor(env: Env, config: RecoveryConfig) {
        env.storage().instance().set(&DataKey::Config, &config);
        extend_instance_ttl(&env);
    }

    pub fn config(env: Env) -> RecoveryConfig {
        get_config(&env)
    }

    pub fn is_executed(env: Env) -> bool {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Executed)
            .unwrap_or(false)
    }

    /// Steps `drain_and_repair` would run now, after validating its preconditions
    pub fn plan(env: Env) -> Result<Vec<RecoveryStep>, RecoveryError> {
        let config = get_config(&env);
        let (_, steps) = plan::build(&env, &config)?;
        Ok(steps)
    }

    /// Run the recovery. Callable by anyone, once.
    ///
    /// # Returns
    /// The executed steps, in order
    pub fn drain_and_repair(env: Env) -> Result<Vec<RecoveryStep>, RecoveryError> {
        if Self::is_executed(env.clone()) {
            return Err(RecoveryError::AlreadyExecuted);
        }

        let config = get_config(&env);
        let (incident, steps) = plan::build(&env, &config)?;

        let orchestrator = env.current_contract_address();
        let registry = RegistryClient::new(&env, &config.registry);
        let predicate = PredicateClient::new(&env, &config.bridge_predicate);

        for step in steps.iter() {
            match step {
                RecoveryStep::RedirectClass(class_id, implementation)
                | RecoveryStep::FinalizeClass(class_id, implementation) => {
                    registry.set_implementation_many_to_one(&class_id, &implementation);
                }
                RecoveryStep::SyncPair(pair) => {
                    PairClient::new(&env, &pair).sync();
                }
                RecoveryStep::Drain(pool, routine) => {
                    PoolProxyClient::new(&env, &pool).execute(&routine);
                }
                RecoveryStep::SettlePair(pair, reference_out) => {
                    PairClient::new(&env, &pair).swap(&0, &reference_out, &incident.treasury);
                }
                RecoveryStep::BridgeDeposit(asset) => {
                    predicate.lock_tokens(
                        &orchestrator,
                        &config.bridge_beneficiary,
                        &asset,
                        &SIDE_CHAIN_DEPOSIT_AMOUNT,
                    );
                }
                RecoveryStep::UpgradeController(controller, implementation) => {
                    registry.set_implementation_one_to_one(&controller, &implementation);
                }
                RecoveryStep::HandOff(owner) => {
                    registry.transfer_ownership(&owner);
                }
            }
        }

        env.storage().instance().set(&DataKey::Executed, &true);
        extend_instance_ttl(&env);

        env.events()
            .publish((Symbol::new(&env, "recovery_done"),), steps.len());
        Ok(steps)
    }
}

fn get_config(env: &Env) -> RecoveryConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

#![no_std]
//! Recovery implementation.
//!
//! Installed for the affected pool families while the recovery runs. Each
//! affected pool gets one drain routine that only runs as that pool, and the
//! bridged pools expose a deposit gate in place of `transfer_from`.

mod drain;
mod gate;

use index_types::{Effect, IncidentConfig, PoolContext, RecoveryError};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

#[contract]
pub struct RecoveryImplementation;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Incident facts (Instance storage)
    Incident,
}

#[contractimpl]
impl RecoveryImplementation {
    pub fn __constructor(env: Env, incident: IncidentConfig) {
        env.storage().instance().set(&DataKey::Incident, &incident);
        extend_instance_ttl(&env);
    }

    pub fn incident(env: Env) -> IncidentConfig {
        get_incident(&env)
    }

    // === Drain Routines ===

    pub fn defi5(env: Env, ctx: PoolContext) -> Result<Vec<Effect>, RecoveryError> {
        let incident = get_incident(&env);
        drain::stage_drain(&env, &ctx, &incident, &incident.defi5)
    }

    pub fn cc10(env: Env, ctx: PoolContext) -> Result<Vec<Effect>, RecoveryError> {
        let incident = get_incident(&env);
        drain::stage_drain(&env, &ctx, &incident, &incident.cc10)
    }

    pub fn fff(env: Env, ctx: PoolContext) -> Result<Vec<Effect>, RecoveryError> {
        let incident = get_incident(&env);
        drain::stage_drain(&env, &ctx, &incident, &incident.fff)
    }

    pub fn cc10_seller(env: Env, ctx: PoolContext) -> Result<Vec<Effect>, RecoveryError> {
        let incident = get_incident(&env);
        drain::stage_drain(&env, &ctx, &incident, &incident.cc10_seller)
    }

    // === Token Surface ===

    /// Deposit gate. Succeeds without effects for the authorized bridge pull only.
    pub fn transfer_from(
        env: Env,
        ctx: PoolContext,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<Vec<Effect>, RecoveryError> {
        let incident = get_incident(&env);
        gate::check_deposit(&incident, &ctx, &spender, &from, &to, amount)?;
        Ok(Vec::new(&env))
    }

    pub fn transfer(
        _env: Env,
        _ctx: PoolContext,
        _from: Address,
        _to: Address,
        _amount: u128,
    ) -> Result<Vec<Effect>, RecoveryError> {
        Err(RecoveryError::Unsupported)
    }

    pub fn approve(
        _env: Env,
        _ctx: PoolContext,
        _from: Address,
        _spender: Address,
        _amount: u128,
    ) -> Result<Vec<Effect>, RecoveryError> {
        Err(RecoveryError::Unsupported)
    }
}

fn get_incident(env: &Env) -> IncidentConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Incident)
        .expect("Not initialized")
}

fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(
        index_types::INSTANCE_TTL_THRESHOLD,
        index_types::INSTANCE_TTL_EXTEND,
    );
}

use index_types::{
    AffectedPool, IncidentClient, IncidentConfig, OwnershipHandoff, RecoveryConfig, RecoveryError,
    RecoveryStep, RegistryClient, PAIR_RESERVE_FLOOR,
};
use pair_math::pair_for;
use soroban_sdk::{token, Address, Env, Symbol, Vec};

/// Validate every precondition and stage the full step list.
///
/// Nothing is mutated here. Steps run in this order:
///
///   1. redirect the core pool, sigma pool and core seller classes to the recovery implementation
///   2. per affected pool: sync its pair, drain it, settle the pair, bridge it
///   3. upgrade the core and sigma controllers
///   4. install the final implementation of each class
///   5. hand the registry over, if configured
pub fn build(
    env: &Env,
    config: &RecoveryConfig,
) -> Result<(IncidentConfig, Vec<RecoveryStep>), RecoveryError> {
    let orchestrator = env.current_contract_address();

    if RegistryClient::new(env, &config.registry).owner() != orchestrator {
        return Err(RecoveryError::RegistryNotOwned);
    }

    let incident = IncidentClient::new(env, &config.recovery_implementation).incident();
    if incident.orchestrator != orchestrator || incident.bridge_predicate != config.bridge_predicate {
        return Err(RecoveryError::IncidentMismatch);
    }

    let recovery = &config.recovery_implementation;
    let leaves_recovery_installed = config
        .class_upgrades()
        .iter()
        .any(|class| class.implementation == *recovery)
        || config
            .controller_upgrades()
            .iter()
            .any(|controller| controller.implementation == *recovery);
    if leaves_recovery_installed {
        return Err(RecoveryError::InvalidFinalImplementation);
    }

    let mut steps = Vec::new(env);

    for class in config.class_upgrades() {
        steps.push_back(RecoveryStep::RedirectClass(
            class.class_id.clone(),
            recovery.clone(),
        ));
    }

    for (pool, routine) in incident.routines() {
        let settlement = if pool.has_reference_pair {
            pair_settlement(env, &incident, pool)
        } else {
            None
        };

        if let Some((pair, _)) = &settlement {
            steps.push_back(RecoveryStep::SyncPair(pair.clone()));
        }
        steps.push_back(RecoveryStep::Drain(
            pool.address.clone(),
            Symbol::new(env, routine),
        ));
        if let Some((pair, reference_out)) = settlement {
            steps.push_back(RecoveryStep::SettlePair(pair, reference_out));
        }
        if pool.bridge_deposit {
            steps.push_back(RecoveryStep::BridgeDeposit(pool.address.clone()));
        }
    }

    for controller in config.controller_upgrades() {
        steps.push_back(RecoveryStep::UpgradeController(
            controller.controller.clone(),
            controller.implementation.clone(),
        ));
    }

    for class in config.class_upgrades() {
        steps.push_back(RecoveryStep::FinalizeClass(
            class.class_id.clone(),
            class.implementation.clone(),
        ));
    }

    if let OwnershipHandoff::Transfer(owner) = &config.handoff {
        steps.push_back(RecoveryStep::HandOff(owner.clone()));
    }

    Ok((incident, steps))
}

/// Pair of `pool` and the reference amount its settlement releases, if any
fn pair_settlement(
    env: &Env,
    incident: &IncidentConfig,
    pool: &AffectedPool,
) -> Option<(Address, i128)> {
    let pair = pair_for(env, &incident.pair_factory, &pool.address, &incident.reference_asset);
    let reference_out =
        token::Client::new(env, &incident.reference_asset).balance(&pair) - PAIR_RESERVE_FLOOR;
    if reference_out > 0 {
        Some((pair, reference_out))
    } else {
        None
    }
}

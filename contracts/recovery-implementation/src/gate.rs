use index_types::{IncidentConfig, PoolContext, RecoveryError, SIDE_CHAIN_DEPOSIT_AMOUNT};
use soroban_sdk::Address;

/// Accept a bridge deposit pull only for the one authorized tuple:
/// spender and destination are the predicate, the source is the orchestrator
/// and the amount is the sentinel. Nothing is moved on success.
pub fn check_deposit(
    incident: &IncidentConfig,
    ctx: &PoolContext,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), RecoveryError> {
    if !incident.is_bridged_pool(&ctx.pool) {
        return Err(RecoveryError::WrongPoolIdentity);
    }
    ctx.pool.require_auth();

    let authorized = *spender == incident.bridge_predicate
        && *from == incident.orchestrator
        && *to == incident.bridge_predicate
        && amount == SIDE_CHAIN_DEPOSIT_AMOUNT;
    if !authorized {
        return Err(RecoveryError::DepositNotAuthorized);
    }
    Ok(())
}

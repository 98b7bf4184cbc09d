use index_types::{
    AffectedPool, Effect, IncidentConfig, PairClient, PoolContext, RecoveryError,
    PAIR_RESERVE_FLOOR,
};
use pair_math::{get_amount_in, pair_for};
use soroban_sdk::{symbol_short, token, Env, Vec};

/// Stage the drain of `pool`, executing as `ctx.pool`.
///
/// Every strictly positive balance of a listed token goes to the treasury. A
/// pool with a reference pair also credits the pair with exactly the index
/// tokens that let the settlement swap release all but `PAIR_RESERVE_FLOOR`
/// of the pair's reference asset.
pub fn stage_drain(
    env: &Env,
    ctx: &PoolContext,
    incident: &IncidentConfig,
    pool: &AffectedPool,
) -> Result<Vec<Effect>, RecoveryError> {
    if ctx.pool != pool.address {
        return Err(RecoveryError::WrongPoolIdentity);
    }
    ctx.pool.require_auth();

    let mut effects = Vec::new(env);
    for token in pool.tokens.iter() {
        let balance = token::Client::new(env, &token).balance(&pool.address);
        if balance > 0 {
            effects.push_back(Effect::TokenTransfer(token, incident.treasury.clone(), balance));
        }
    }

    if pool.has_reference_pair {
        if let Some(credit) = stage_pair_credit(env, incident, pool)? {
            effects.push_back(credit);
        }
    }

    env.events()
        .publish((symbol_short!("drained"), pool.address.clone()), effects.len());
    Ok(effects)
}

fn stage_pair_credit(
    env: &Env,
    incident: &IncidentConfig,
    pool: &AffectedPool,
) -> Result<Option<Effect>, RecoveryError> {
    let pair = pair_for(env, &incident.pair_factory, &pool.address, &incident.reference_asset);
    let reference_balance = token::Client::new(env, &incident.reference_asset).balance(&pair);
    let reference_out = reference_balance - PAIR_RESERVE_FLOOR;
    if reference_out <= 0 {
        return Ok(None);
    }

    let (index_reserve, reference_reserve) = PairClient::new(env, &pair).get_reserves();
    let reference_reserve =
        u128::try_from(reference_reserve).map_err(|_| RecoveryError::PairSettlementFailed)?;
    let index_in = get_amount_in(env, reference_out as u128, index_reserve, reference_reserve)
        .ok_or(RecoveryError::PairSettlementFailed)?;

    Ok(Some(Effect::Mint(pair, index_in)))
}

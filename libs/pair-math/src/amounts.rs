use soroban_sdk::{Env, U256};

/// Swap fee of a pair, in thousandths (0.3%)
pub const FEE_PER_THOUSAND: u128 = 3;
const THOUSAND: u128 = 1000;

/// Multiply and divide with 256-bit intermediate precision (rounds down).
/// Returns None on a zero denominator or a result above u128.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product.div(&U256::from_u128(env, denominator)).to_u128()
}

/// Input needed to take `amount_out` from a pair, fee included (rounds up).
///
/// Returns None when the output is zero, reaches the whole reserve, or the
/// required input does not fit in u128.
pub fn get_amount_in(env: &Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> Option<u128> {
    if amount_out == 0 || reserve_in == 0 || amount_out >= reserve_out {
        return None;
    }
    let numerator = U256::from_u128(env, reserve_in.checked_mul(THOUSAND)?)
        .mul(&U256::from_u128(env, amount_out));
    let denominator = U256::from_u128(env, reserve_out - amount_out)
        .mul(&U256::from_u128(env, THOUSAND - FEE_PER_THOUSAND));
    numerator.div(&denominator).to_u128()?.checked_add(1)
}

/// Fee-adjusted constant product check applied after a swap:
///
///   (b0 * 1000 - in0 * 3) * (b1 * 1000 - in1 * 3) >= r0 * r1 * 1000^2
///
/// `balances`, `amounts_in` and `reserves` are (token0, token1) pairs.
/// Returns None if an adjusted term does not fit in u128.
pub fn constant_product_holds(
    env: &Env,
    balances: (u128, u128),
    amounts_in: (u128, u128),
    reserves: (u128, u128),
) -> Option<bool> {
    let adjusted0 = fee_adjusted(balances.0, amounts_in.0)?;
    let adjusted1 = fee_adjusted(balances.1, amounts_in.1)?;
    let scaled_reserve0 = reserves.0.checked_mul(THOUSAND)?;
    let scaled_reserve1 = reserves.1.checked_mul(THOUSAND)?;

    let after = U256::from_u128(env, adjusted0).mul(&U256::from_u128(env, adjusted1));
    let before = U256::from_u128(env, scaled_reserve0).mul(&U256::from_u128(env, scaled_reserve1));
    Some(after >= before)
}

fn fee_adjusted(balance: u128, amount_in: u128) -> Option<u128> {
    balance
        .checked_mul(THOUSAND)?
        .checked_sub(amount_in.checked_mul(FEE_PER_THOUSAND)?)
}

#![no_std]
//! Constant-product pair between an index token and the reference asset.
//!
//! Inputs are sent to the pair before `swap` is called and inferred from the
//! balance change; outputs are paid by the pair. A swap can never take a whole
//! reserve.

use index_types::{IndexTokenClient, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD};
use pair_math::constant_product_holds;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, Address, Env,
};

#[contract]
pub struct LiquidityPair;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    InsufficientOutputAmount = 1,
    InsufficientLiquidity = 2,
    InvalidTo = 3,
    InsufficientInputAmount = 4,
    /// Fee-adjusted product of the balances fell below the reserves' product
    ConstantProduct = 5,
    Overflow = 6,
}

/// Storage keys for the pair
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Index token (Instance storage)
    IndexToken,
    /// Reference asset (Instance storage)
    ReferenceAsset,
    /// (index reserve, reference reserve) (Instance storage)
    Reserves,
}

#[contractimpl]
impl LiquidityPair {
    pub fn __constructor(env: Env, index_token: Address, reference_asset: Address) {
        if index_token == reference_asset {
            panic!("Identical tokens");
        }
        env.storage().instance().set(&DataKey::IndexToken, &index_token);
        env.storage()
            .instance()
            .set(&DataKey::ReferenceAsset, &reference_asset);
        env.storage().instance().set(&DataKey::Reserves, &(0u128, 0i128));
        extend_instance_ttl(&env);
    }

    /// (index token, reference asset)
    pub fn tokens(env: Env) -> (Address, Address) {
        (index_token(&env), reference_asset(&env))
    }

    /// (index reserve, reference reserve)
    pub fn get_reserves(env: Env) -> (u128, i128) {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Reserves)
            .unwrap_or((0, 0))
    }

    /// Set the reserves to the current balances
    pub fn sync(env: Env) {
        let (index_balance, reference_balance) = balances(&env);
        set_reserves(&env, index_balance, reference_balance);
    }

    /// Pay out `index_out` and `reference_out` to `to`.
    ///
    /// The matching input must already be held by the pair; the swap fails
    /// unless the fee-adjusted constant product is preserved.
    pub fn swap(
        env: Env,
        index_out: u128,
        reference_out: i128,
        to: Address,
    ) -> Result<(), PairError> {
        if reference_out < 0 || (index_out == 0 && reference_out == 0) {
            return Err(PairError::InsufficientOutputAmount);
        }
        let (index_reserve, reference_reserve) = Self::get_reserves(env.clone());
        if index_out >= index_reserve || reference_out >= reference_reserve {
            return Err(PairError::InsufficientLiquidity);
        }

        let index_token = index_token(&env);
        let reference_asset = reference_asset(&env);
        if to == index_token || to == reference_asset {
            return Err(PairError::InvalidTo);
        }

        let contract_address = env.current_contract_address();
        if index_out > 0 {
            IndexTokenClient::new(&env, &index_token).transfer(&contract_address, &to, &index_out);
        }
        if reference_out > 0 {
            token::Client::new(&env, &reference_asset).transfer(&contract_address, &to, &reference_out);
        }

        let (index_balance, reference_balance) = balances(&env);
        let index_reserve_left = index_reserve - index_out;
        let reference_reserve_left = to_u128(reference_reserve - reference_out)?;
        let reference_balance_u = to_u128(reference_balance)?;

        let index_in = index_balance.saturating_sub(index_reserve_left);
        let reference_in = reference_balance_u.saturating_sub(reference_reserve_left);
        if index_in == 0 && reference_in == 0 {
            return Err(PairError::InsufficientInputAmount);
        }

        let holds = constant_product_holds(
            &env,
            (index_balance, reference_balance_u),
            (index_in, reference_in),
            (index_reserve, to_u128(reference_reserve)?),
        )
        .ok_or(PairError::Overflow)?;
        if !holds {
            return Err(PairError::ConstantProduct);
        }

        set_reserves(&env, index_balance, reference_balance);
        env.events().publish(
            (symbol_short!("swap"), to),
            (index_in, reference_in, index_out, reference_out),
        );
        Ok(())
    }
}

fn index_token(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::IndexToken)
        .expect("Pair not initialized")
}

fn reference_asset(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::ReferenceAsset)
        .expect("Pair not initialized")
}

fn balances(env: &Env) -> (u128, i128) {
    let contract_address = env.current_contract_address();
    let index_balance = IndexTokenClient::new(env, &index_token(env)).balance(&contract_address);
    let reference_balance =
        token::Client::new(env, &reference_asset(env)).balance(&contract_address);
    (index_balance, reference_balance)
}

fn set_reserves(env: &Env, index_reserve: u128, reference_reserve: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Reserves, &(index_reserve, reference_reserve));
    extend_instance_ttl(env);

    env.events()
        .publish((symbol_short!("sync"),), (index_reserve, reference_reserve));
}

fn to_u128(amount: i128) -> Result<u128, PairError> {
    u128::try_from(amount).map_err(|_| PairError::Overflow)
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance, set_total_supply,
};
use index_types::Effect;
use soroban_sdk::{symbol_short, token, Address, Env, Vec};

/// Commit the effects an implementation staged, in order.
///
/// Any failing effect panics and the whole invocation is rolled back, so a
/// partially applied list is never observable.
pub fn apply(env: &Env, effects: &Vec<Effect>) {
    for effect in effects.iter() {
        match effect {
            Effect::Transfer(from, to, amount) => transfer(env, &from, &to, amount),
            Effect::SpendAllowance(owner, spender, amount) => {
                spend_allowance(env, &owner, &spender, amount)
            }
            Effect::Approve(owner, spender, amount) => approve(env, &owner, &spender, amount),
            Effect::Mint(to, amount) => mint(env, &to, amount),
            Effect::TokenTransfer(token, to, amount) => {
                // The pool is the direct invoker, so the transfer is authorized as the pool
                let contract_address = env.current_contract_address();
                token::Client::new(env, &token).transfer(&contract_address, &to, &amount);
            }
        }
    }
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        panic!("Insufficient balance");
    }
    set_balance(env, from, from_balance - amount);
    set_balance(env, to, get_balance(env, to) + amount);

    env.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

pub fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let allowance = get_allowance(env, owner, spender);
    if allowance < amount {
        panic!("Insufficient allowance");
    }
    set_allowance(env, owner, spender, allowance - amount);
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    set_allowance(env, owner, spender, amount);

    env.events()
        .publish((symbol_short!("approve"), owner.clone(), spender.clone()), amount);
}

pub fn mint(env: &Env, to: &Address, amount: u128) {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .expect("Supply overflow");
    set_total_supply(env, supply);
    set_balance(env, to, get_balance(env, to) + amount);

    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);
}

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Order two tokens the way pairs store them (lower address first)
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a == token_b {
        panic!("Identical tokens");
    }
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// Deployment salt of the pair for two sorted tokens: sha256(xdr(token0) || xdr(token1))
pub fn pair_salt(env: &Env, token0: &Address, token1: &Address) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&token0.clone().to_xdr(env));
    preimage.append(&token1.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Address of the pair `factory` deploys for two tokens.
///
/// Derived from the factory address and the salt only; no contract is called,
/// so the pair does not need to exist yet.
pub fn pair_for(env: &Env, factory: &Address, token_a: &Address, token_b: &Address) -> Address {
    let (token0, token1) = sort_tokens(token_a.clone(), token_b.clone());
    let salt = pair_salt(env, &token0, &token1);
    env.deployer()
        .with_address(factory.clone(), salt)
        .deployed_address()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_sort_tokens_orders_by_address() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let (t0, t1) = sort_tokens(a.clone(), b.clone());
        assert!(t0 < t1);
        assert_eq!(sort_tokens(b, a), (t0, t1));
    }

    #[test]
    #[should_panic(expected = "Identical tokens")]
    fn test_sort_identical_tokens_fails() {
        let env = Env::default();
        let a = Address::generate(&env);
        sort_tokens(a.clone(), a);
    }

    #[test]
    fn test_pair_for_is_order_independent() {
        let env = Env::default();
        let factory = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        assert_eq!(pair_for(&env, &factory, &a, &b), pair_for(&env, &factory, &b, &a));
    }

    #[test]
    fn test_pair_for_depends_on_factory_and_tokens() {
        let env = Env::default();
        let factory = Address::generate(&env);
        let other_factory = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);

        let pair_ab = pair_for(&env, &factory, &a, &b);
        assert_ne!(pair_ab, pair_for(&env, &other_factory, &a, &b));
        assert_ne!(pair_ab, pair_for(&env, &factory, &a, &c));
        assert_ne!(pair_ab, a);
        assert_ne!(pair_ab, b);
    }

    #[test]
    fn test_pair_salt_is_stable() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let (t0, t1) = sort_tokens(a, b);

        assert_eq!(pair_salt(&env, &t0, &t1), pair_salt(&env, &t0, &t1));
        assert_ne!(pair_salt(&env, &t0, &t1), pair_salt(&env, &t1, &t0));
    }
}

use crate::{CC10_ROUTINE, CC10_SELLER_ROUTINE, DEFI5_ROUTINE, FFF_ROUTINE};
use soroban_sdk::{contracttype, Address, BytesN, Symbol, Vec};

/// A pool whose balances are drained by the recovery
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffectedPool {
    /// Pool proxy address
    pub address: Address,
    /// Underlying tokens held by the pool, drained in this order
    pub tokens: Vec<Address>,
    /// Pool token trades against the reference asset in a liquidity pair
    pub has_reference_pair: bool,
    /// Pool token is bridged once the pool is drained
    pub bridge_deposit: bool,
}

/// Incident facts the recovery implementation acts on. Immutable once deployed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncidentConfig {
    /// Orchestrator contract; the only accepted deposit source
    pub orchestrator: Address,
    /// Receives every drained balance
    pub treasury: Address,
    /// Bridge predicate; the only accepted deposit spender and destination
    pub bridge_predicate: Address,
    /// Asset paired with the pool tokens (wrapped native asset)
    pub reference_asset: Address,
    /// Deployer of the liquidity pairs
    pub pair_factory: Address,
    pub defi5: AffectedPool,
    pub cc10: AffectedPool,
    pub fff: AffectedPool,
    pub cc10_seller: AffectedPool,
}

impl IncidentConfig {
    /// Affected pools with the recovery routine that drains each, in drain order
    pub fn routines(&self) -> [(&AffectedPool, &'static str); 4] {
        [
            (&self.defi5, DEFI5_ROUTINE),
            (&self.cc10, CC10_ROUTINE),
            (&self.fff, FFF_ROUTINE),
            (&self.cc10_seller, CC10_SELLER_ROUTINE),
        ]
    }

    /// True if `pool` is an affected pool that is bridged after draining
    pub fn is_bridged_pool(&self, pool: &Address) -> bool {
        self.routines()
            .iter()
            .any(|(affected, _)| affected.bridge_deposit && affected.address == *pool)
    }
}

/// Final implementation for one pool family
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassUpgrade {
    pub class_id: BytesN<32>,
    pub implementation: Address,
}

/// Final implementation for one controller proxy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControllerUpgrade {
    pub controller: Address,
    pub implementation: Address,
}

/// Who owns the registry once the recovery has run
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnershipHandoff {
    /// Orchestrator keeps ownership
    Retain,
    /// Ownership moves to the given address
    Transfer(Address),
}

/// Orchestrator configuration. Immutable once deployed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryConfig {
    pub registry: Address,
    /// Contract installed for the affected pool families during the recovery
    pub recovery_implementation: Address,
    pub bridge_predicate: Address,
    /// Side-chain recipient of every bridge deposit
    pub bridge_beneficiary: Address,
    pub core_controller: ControllerUpgrade,
    pub sigma_controller: ControllerUpgrade,
    /// Core index pools (defi5, cc10)
    pub core_pools: ClassUpgrade,
    /// Sigma index pools (fff)
    pub sigma_pools: ClassUpgrade,
    /// Core token sellers (cc10 seller)
    pub core_sellers: ClassUpgrade,
    pub handoff: OwnershipHandoff,
}

impl RecoveryConfig {
    /// Pool families in redirect and finalization order
    pub fn class_upgrades(&self) -> [&ClassUpgrade; 3] {
        [&self.core_pools, &self.sigma_pools, &self.core_sellers]
    }

    /// Controllers in upgrade order
    pub fn controller_upgrades(&self) -> [&ControllerUpgrade; 2] {
        [&self.core_controller, &self.sigma_controller]
    }
}

/// One step of the recovery, in execution order
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecoveryStep {
    /// Point a pool family at the recovery implementation: (class id, implementation)
    RedirectClass(BytesN<32>, Address),
    /// Fold a pair's balances into its reserves before its pool is drained: (pair)
    SyncPair(Address),
    /// Run a drain routine through a pool proxy: (pool, routine)
    Drain(Address, Symbol),
    /// Release the reference asset held by a pair to the treasury: (pair, amount)
    SettlePair(Address, i128),
    /// Bridge the pool token: (pool)
    BridgeDeposit(Address),
    /// Install a controller's final implementation: (controller, implementation)
    UpgradeController(Address, Address),
    /// Install a pool family's final implementation: (class id, implementation)
    FinalizeClass(BytesN<32>, Address),
    /// Transfer registry ownership: (new owner)
    HandOff(Address),
}

/// A deposit accepted by the bridge predicate
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockedDeposit {
    pub depositor: Address,
    pub beneficiary: Address,
    pub asset: Address,
    pub amount: u128,
}

use soroban_sdk::contracterror;

/// Failures of the recovery orchestrator and the recovery implementation
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecoveryError {
    /// The recovery already ran to completion
    AlreadyExecuted = 1,
    /// The orchestrator does not own the registry
    RegistryNotOwned = 2,
    /// The installed recovery implementation was configured for another orchestrator or predicate
    IncidentMismatch = 3,
    /// A final implementation would leave the recovery code installed
    InvalidFinalImplementation = 4,
    /// Code is not executing as the pool the routine belongs to
    WrongPoolIdentity = 5,
    /// Deposit gate called with anything but the authorized tuple
    DepositNotAuthorized = 6,
    /// Operation is not offered while the recovery is installed
    Unsupported = 7,
    /// The pair settlement amount cannot be computed
    PairSettlementFailed = 8,
}

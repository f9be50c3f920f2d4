multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

/// Held while a deferred call is in flight. Every mutating endpoint checks it,
/// so the callee cannot re-enter and observe half-finalized state.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn require_not_reentrant(&self) {
        require!(!self.execution_in_progress().get(), ERR_REENTRANT_CALL);
    }

    fn enter_execution(&self) {
        self.require_not_reentrant();
        self.execution_in_progress().set(true);
    }

    fn exit_execution(&self) {
        self.execution_in_progress().clear();
    }

    #[storage_mapper("executionInProgress")]
    fn execution_in_progress(&self) -> SingleValueMapper<bool>;
}

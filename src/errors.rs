pub const ERR_TRANSFER_FAILED: &str =
    "transfer failed: payment must be a positive amount of the governance token";
pub const ERR_LOCKED_FUNDS: &str = "locked funds: votes outstanding on unfinished proposals";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "nothing to withdraw";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_VOTING_CLOSED: &str = "voting closed";
pub const ERR_VOTING_STILL_OPEN: &str = "voting still open";
pub const ERR_DUPLICATE_VOTE: &str = "duplicate vote";
pub const ERR_NO_VOTING_POWER: &str = "no voting power";
pub const ERR_ALREADY_FINALIZED: &str = "proposal already finalized";
// ExecutionFailed has no message of its own: a failing deferred call aborts
// the transaction with the executor's error and every write is reverted.
pub const ERR_LOCK_UNDERFLOW: &str = "invariant violation: lock count underflow";
pub const ERR_REENTRANT_CALL: &str = "reentrant call rejected";

pub const ERR_INVALID_QUORUM: &str = "invalid quorum threshold";
pub const ERR_INVALID_DEBATE_PERIOD: &str = "invalid debate period";
pub const ERR_INVALID_TOKEN: &str = "invalid governance token";

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Debate window open or awaiting finalization.
    InProgress,
    /// Quorum reached and support > against. Deferred call executed. Terminal.
    Accepted,
    /// Quorum missed or support <= against. Terminal.
    Rejected,
}

// ============================================================
// Deferred Call — the action a proposal carries
// ============================================================

/// Opaque call descriptor. Stored at creation and dispatched verbatim on
/// acceptance; the contract never looks inside `endpoint` or `arguments`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DeferredCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub call: DeferredCall<M>,
    pub created_at: u64,
    /// Weighted votes in favour
    pub support: BigUint<M>,
    /// Weighted votes against
    pub against: BigUint<M>,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn turnout(&self) -> BigUint<M> {
        &self.support + &self.against
    }

    /// Acceptance rule: turnout meets quorum AND strict majority in favour.
    pub fn passes(&self, quorum_threshold: &BigUint<M>) -> bool {
        &self.turnout() >= quorum_threshold && self.support > self.against
    }

    /// Clamped to `u64::MAX`, so an oversized period never wraps into the past.
    pub fn voting_ends_at(&self, debate_period: u64) -> u64 {
        self.created_at.saturating_add(debate_period)
    }

    pub fn is_voting_open(&self, now: u64, debate_period: u64) -> bool {
        now < self.voting_ends_at(debate_period)
    }
}

multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_FINALIZED, ERR_DUPLICATE_VOTE, ERR_NO_VOTING_POWER, ERR_PROPOSAL_NOT_FOUND,
    ERR_VOTING_CLOSED, ERR_VOTING_STILL_OPEN,
};
use crate::types::{DeferredCall, Proposal, ProposalStatus};
use crate::{config, events, ledger, reentrancy};

/// Proposal lifecycle: InProgress -> Accepted | Rejected, both terminal.
#[multiversx_sc::module]
pub trait GovernanceModule:
    config::ConfigModule
    + events::EventsModule
    + reentrancy::ReentrancyGuardModule
    + ledger::LedgerModule
{
    // ========================================================
    // ENDPOINT: addProposal
    // Anyone can propose. No balance or lock interaction.
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(
        &self,
        description: ManagedBuffer,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        self.require_not_reentrant();
        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            call: DeferredCall {
                target,
                endpoint,
                arguments: arguments.to_vec(),
            },
            created_at: now,
            support: BigUint::zero(),
            against: BigUint::zero(),
            status: ProposalStatus::InProgress,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, &proposal.call.target, now);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted by the caller's deposit at the moment of voting.
    // Locks the caller's deposit until the proposal finalizes.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, in_favor: bool) {
        self.require_not_reentrant();
        let caller = self.blockchain().get_caller();

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::InProgress,
            ERR_ALREADY_FINALIZED
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.is_voting_open(now, self.debate_period().get()),
            ERR_VOTING_CLOSED
        );
        require!(
            !self.voters(proposal_id).contains(&caller),
            ERR_DUPLICATE_VOTE
        );

        let weight = self.weight_of(&caller);
        require!(weight > 0u64, ERR_NO_VOTING_POWER);

        if in_favor {
            proposal.support += &weight;
        } else {
            proposal.against += &weight;
        }

        self.voters(proposal_id).insert(caller.clone());
        self.lock(&caller);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, in_favor, &weight);
    }

    // ========================================================
    // ENDPOINT: finishProposal
    // Called once the debate period has elapsed. Decides the
    // outcome, releases voter locks and, on acceptance, runs
    // the deferred call. A failing call reverts everything,
    // leaving the proposal InProgress for a later retry.
    // Unlocking walks the whole voter set, so gas grows
    // linearly with the number of voters on the proposal.
    // ========================================================

    #[endpoint(finishProposal)]
    fn finish_proposal(&self, proposal_id: u64) -> ProposalStatus {
        self.require_not_reentrant();

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::InProgress,
            ERR_ALREADY_FINALIZED
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            !proposal.is_voting_open(now, self.debate_period().get()),
            ERR_VOTING_STILL_OPEN
        );

        let accepted = proposal.passes(&self.quorum_threshold().get());
        proposal.status = if accepted {
            ProposalStatus::Accepted
        } else {
            ProposalStatus::Rejected
        };

        // State is fully committed before control leaves the contract.
        self.proposals(proposal_id).set(&proposal);
        for voter in self.voters(proposal_id).iter() {
            self.unlock(&voter);
        }

        if accepted {
            self.proposal_accepted_event(proposal_id, &proposal.support, &proposal.against);
            self.execute_deferred_call(proposal_id, &proposal.call);
        } else {
            self.proposal_rejected_event(proposal_id, &proposal.support, &proposal.against);
        }

        proposal.status
    }

    fn execute_deferred_call(&self, proposal_id: u64, call: &DeferredCall<Self::Api>) {
        self.enter_execution();

        self.tx()
            .to(&call.target)
            .raw_call(call.endpoint.clone())
            .arguments_raw(call.arguments.clone().into())
            .sync_call();

        self.exit_execution();
        self.proposal_executed_event(proposal_id, &call.target, &call.endpoint);
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Proposals not yet finalized, whether or not their window is still open.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if proposal.status == ProposalStatus::InProgress {
                result.push(proposal);
            }
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, account: ManagedAddress) -> bool {
        self.voters(proposal_id).contains(&account)
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        created_at: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] in_favor: bool,
        weight: &BigUint,
    );

    #[event("proposalAccepted")]
    fn proposal_accepted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] support: &BigUint,
        against: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] support: &BigUint,
        against: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] target: &ManagedAddress,
        endpoint: &ManagedBuffer,
    );
}

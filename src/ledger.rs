multiversx_sc::imports!();

use crate::errors::{
    ERR_LOCKED_FUNDS, ERR_LOCK_UNDERFLOW, ERR_NOTHING_TO_WITHDRAW, ERR_TRANSFER_FAILED,
};
use crate::{config, events, reentrancy};

/// Deposited balances and the per-account lock counter that gates withdrawal.
#[multiversx_sc::module]
pub trait LedgerModule:
    config::ConfigModule + events::EventsModule + reentrancy::ReentrancyGuardModule
{
    // ========================================================
    // ENDPOINT: deposit
    // Locks governance tokens as voting power. Accumulates.
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.require_not_reentrant();
        let caller = self.blockchain().get_caller();

        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 1, ERR_TRANSFER_FAILED);
        let payment = payments.get(0);
        require!(
            payment.token_identifier == self.governance_token().get(),
            ERR_TRANSFER_FAILED
        );
        require!(payment.amount > 0u64, ERR_TRANSFER_FAILED);

        self.deposit_balance(&caller)
            .update(|balance| *balance += &payment.amount);

        let balance = self.deposit_balance(&caller).get();
        self.deposit_event(&caller, &payment.amount, &balance);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Returns the full balance. Refused while any vote of the
    // caller sits on an unfinished proposal.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_not_reentrant();
        let caller = self.blockchain().get_caller();
        require!(
            self.active_vote_count(&caller).get() == 0,
            ERR_LOCKED_FUNDS
        );

        let amount = self.deposit_balance(&caller).take();
        require!(amount > 0u64, ERR_NOTHING_TO_WITHDRAW);

        let token = self.governance_token().get();
        self.send().direct_esdt(&caller, &token, 0, &amount);
        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // INTERNAL: weight and lock accounting
    // ========================================================

    /// Voting weight is the balance at the moment of voting; no history is kept.
    fn weight_of(&self, account: &ManagedAddress) -> BigUint {
        self.deposit_balance(account).get()
    }

    fn lock(&self, account: &ManagedAddress) {
        self.active_vote_count(account).update(|count| *count += 1);
    }

    fn unlock(&self, account: &ManagedAddress) {
        let count = self.active_vote_count(account).get();
        require!(count > 0, ERR_LOCK_UNDERFLOW);
        self.active_vote_count(account).set(count - 1);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (balance, activeVoteCount)
    #[view(getAccount)]
    fn get_account(&self, account: ManagedAddress) -> MultiValue2<BigUint, u64> {
        (
            self.deposit_balance(&account).get(),
            self.active_vote_count(&account).get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balance")]
    fn deposit_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Number of InProgress proposals this account has voted on
    #[storage_mapper("activeVoteCount")]
    fn active_vote_count(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}

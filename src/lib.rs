#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod governance;
pub mod governance_ledger_proxy;
pub mod ledger;
pub mod reentrancy;
pub mod types;

use errors::{ERR_INVALID_DEBATE_PERIOD, ERR_INVALID_QUORUM, ERR_INVALID_TOKEN};

// ============================================================
// Contract
// Depositors lock the governance token as voting power, vote
// on proposals carrying a deferred call, and the call runs
// once the debate period closes with quorum and a majority.
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceLedger:
    config::ConfigModule
    + events::EventsModule
    + reentrancy::ReentrancyGuardModule
    + ledger::LedgerModule
    + governance::GovernanceModule
{
    #[init]
    fn init(&self, governance_token: TokenIdentifier, quorum_threshold: BigUint, debate_period: u64) {
        require!(governance_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(quorum_threshold > 0u64, ERR_INVALID_QUORUM);
        require!(debate_period > 0, ERR_INVALID_DEBATE_PERIOD);

        self.governance_token().set(&governance_token);
        self.quorum_threshold().set(&quorum_threshold);
        self.debate_period().set(debate_period);
        self.proposal_count().set(0u64);
    }

    /// Configuration is immutable; upgrades keep the stored values.
    #[upgrade]
    fn upgrade(&self) {}
}

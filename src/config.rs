multiversx_sc::imports!();

/// Construction-time settings. Written once by `init`, read-only afterwards.
#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getConfig)]
    fn get_config(&self) -> MultiValue3<TokenIdentifier, BigUint, u64> {
        (
            self.governance_token().get(),
            self.quorum_threshold().get(),
            self.debate_period().get(),
        )
            .into()
    }

    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Minimum turnout (support + against) for a proposal to be accepted
    #[storage_mapper("quorumThreshold")]
    fn quorum_threshold(&self) -> SingleValueMapper<BigUint>;

    /// Seconds after creation during which votes are accepted
    #[storage_mapper("debatePeriod")]
    fn debate_period(&self) -> SingleValueMapper<u64>;
}

#![no_std]

multiversx_sc::imports!();

pub mod mock_executor_proxy;

/// Stand-in target for deferred calls in governance tests.
#[multiversx_sc::contract]
pub trait MockExecutor {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(forTestCall)]
    fn for_test_call(&self, value: u64) {
        require!(!self.failing().get(), "executor unavailable");
        self.test_prop().set(value);
        self.call_count().update(|count| *count += 1);
    }

    /// Calls straight back into `withdraw` on the caller.
    #[endpoint(reenter)]
    fn reenter(&self) {
        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).raw_call("withdraw").sync_call();
    }

    #[endpoint(setFailing)]
    fn set_failing(&self, failing: bool) {
        self.failing().set(failing);
    }

    #[view(testProp)]
    #[storage_mapper("testProp")]
    fn test_prop(&self) -> SingleValueMapper<u64>;

    #[view(getCallCount)]
    #[storage_mapper("callCount")]
    fn call_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("failing")]
    fn failing(&self) -> SingleValueMapper<bool>;
}

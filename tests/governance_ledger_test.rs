// Smoke test for the Governance Ledger contract.
//
// Endpoint behaviour is covered by the blackbox scenarios in
// governance_ledger_blackbox_test.rs, which run the contract and a mock
// executor inside a ScenarioWorld.

use multiversx_sc_scenario::api::DebugApi;

type GovernanceContract = governance_ledger::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> GovernanceContract = governance_ledger::contract_obj;
}

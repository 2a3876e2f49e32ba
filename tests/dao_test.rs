// Contract-object smoke test: the contract can be instantiated against the
// debug API without a scenario world. Behavioural coverage lives in
// dao_blackbox_test.rs.

use multiversx_sc_scenario::api::DebugApi;

type DaoContract = dao::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> DaoContract = dao::contract_obj;
}

#[test]
fn error_messages_are_distinct() {
    use dao::errors::DaoError::*;

    let all = [
        AlreadyMember,
        NotMember,
        IndexOutOfRange,
        ProposalExecuted,
        AlreadyVoted,
        QuorumNotMet,
        InsufficientShares,
        NotOwner,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.message(), b.message());
        }
    }
    assert_eq!(AlreadyMember.message(), "already added");
}

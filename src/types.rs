multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — the core governance record
// ============================================================

/// A proposal is `Voting` while `executed` is false and becomes terminal
/// once an execution succeeds. There is no expiry or rejection state.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Position in the proposal list, starting at 0.
    pub index: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub votes_for: u64,
    pub votes_against: u64,
    pub executed: bool,
    /// Block timestamp at creation
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against
    }
}

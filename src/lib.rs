#![no_std]

multiversx_sc::imports!();

pub mod dao_proxy;
pub mod errors;
pub mod quorum;
pub mod types;

use errors::DaoError;
use types::Proposal;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Dao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the immutable owner and receives the
    /// initial share supply. The owner is not enrolled as a member.
    /// Deploying with an `initial_supply` of 0 leaves every balance at zero.
    #[init]
    fn init(&self, initial_supply: BigUint) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.proposal_count().set(0u64);
        self.total_shares().set(BigUint::zero());

        if initial_supply > 0u64 {
            self.mint(&caller, &initial_supply);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addMember
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().insert(address.clone()),
            (DaoError::AlreadyMember.message())
        );

        self.member_added_event(&address, &caller);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().contains(&caller),
            (DaoError::NotMember.message())
        );

        let index = self.proposal_count().get();
        let proposal = Proposal {
            index,
            proposer: caller.clone(),
            description,
            votes_for: 0,
            votes_against: 0,
            executed: false,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.proposals(index).set(&proposal);
        self.proposal_count().set(index + 1);

        self.proposal_created_event(index, &caller, &proposal.description);

        index
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal, unweighted.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, index: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().contains(&caller),
            (DaoError::NotMember.message())
        );

        let mut proposal = self.require_proposal(index);
        require!(!proposal.executed, (DaoError::ProposalExecuted.message()));
        require!(
            self.voters(index).insert(caller.clone()),
            (DaoError::AlreadyVoted.message())
        );

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        self.proposals(index).set(&proposal);

        self.vote_event(index, &caller, support);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Threshold is checked against the membership at call time.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, index: u64) {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().contains(&caller),
            (DaoError::NotMember.message())
        );

        let mut proposal = self.require_proposal(index);
        require!(!proposal.executed, (DaoError::ProposalExecuted.message()));
        require!(
            self.meets_threshold(&proposal),
            (DaoError::QuorumNotMet.message())
        );

        proposal.executed = true;
        self.proposals(index).set(&proposal);

        self.proposal_executed_event(
            index,
            &caller,
            proposal.votes_for,
            proposal.votes_against,
        );
    }

    // ========================================================
    // ENDPOINT: transferShares
    // Balances are independent of membership.
    // ========================================================

    #[endpoint(transferShares)]
    fn transfer_shares(&self, amount: BigUint, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let balance = self.shares(&caller).get();
        require!(balance >= amount, (DaoError::InsufficientShares.message()));

        self.shares(&caller).set(&balance - &amount);
        self.shares(&to).update(|s| *s += &amount);

        self.shares_transferred_event(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: mintShares
    // Only the stored owner may issue new shares.
    // ========================================================

    #[endpoint(mintShares)]
    fn mint_shares(&self, amount: BigUint, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), (DaoError::NotOwner.message()));

        self.mint(&to, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, index: u64) -> Proposal<Self::Api> {
        require!(
            index < self.proposal_count().get(),
            (DaoError::IndexOutOfRange.message())
        );
        self.proposals(index).get()
    }

    fn meets_threshold(&self, proposal: &Proposal<Self::Api>) -> bool {
        let member_count = self.members().len() as u64;
        quorum::quorum_reached(proposal.votes_for, proposal.votes_against, member_count)
    }

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        self.shares(to).update(|s| *s += amount);
        self.total_shares().update(|ts| *ts += amount);

        self.shares_minted_event(to, amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(members)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(proposals)]
    fn get_proposal(&self, index: u64) -> Proposal<Self::Api> {
        self.require_proposal(index)
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        for index in 0..total {
            let proposal = self.proposals(index).get();
            if !proposal.executed {
                result.push(proposal);
            }
        }
        result
    }

    #[view(canExecute)]
    fn can_execute(&self, index: u64) -> bool {
        if index >= self.proposal_count().get() {
            return false;
        }
        let proposal = self.proposals(index).get();
        !proposal.executed && self.meets_threshold(&proposal)
    }

    #[view(getVoters)]
    fn get_voters(&self, index: u64) -> MultiValueEncoded<ManagedAddress> {
        require!(
            index < self.proposal_count().get(),
            (DaoError::IndexOutOfRange.message())
        );
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(index).iter() {
            result.push(voter);
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, index: u64, address: &ManagedAddress) -> bool {
        self.voters(index).contains(address)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len();
        let start = usize::try_from(from).unwrap_or(usize::MAX);
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        let end = core::cmp::min(start.saturating_add(count), total);

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }

    #[view(getDaoStats)]
    fn get_dao_stats(&self) -> MultiValue3<u64, u64, BigUint> {
        let member_count = self.members().len() as u64;
        let proposal_count = self.proposal_count().get();
        let total_shares = self.total_shares().get();
        (member_count, proposal_count, total_shares).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] added_by: &ManagedAddress,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] index: u64,
        #[indexed] proposer: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] index: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] index: u64,
        #[indexed] executor: &ManagedAddress,
        #[indexed] votes_for: u64,
        votes_against: u64,
    );

    #[event("sharesTransferred")]
    fn shares_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("sharesMinted")]
    fn shares_minted_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Shares ──

    #[view(shares)]
    #[storage_mapper("shares")]
    fn shares(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, index: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, index: u64) -> UnorderedSetMapper<ManagedAddress>;
}

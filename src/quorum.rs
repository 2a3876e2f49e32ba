//! Execution threshold for proposals.
//!
//! A proposal passes when more members voted for it than against it and the
//! votes in favour form a strict majority of the current membership.

/// Share of the membership that must vote yes, as a fraction.
pub const QUORUM_NUMERATOR: u64 = 1;
pub const QUORUM_DENOMINATOR: u64 = 2;

pub fn quorum_reached(votes_for: u64, votes_against: u64, member_count: u64) -> bool {
    let majority = (votes_for as u128) * (QUORUM_DENOMINATOR as u128)
        > (member_count as u128) * (QUORUM_NUMERATOR as u128);
    votes_for > votes_against && majority
}

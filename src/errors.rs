/// Every way an endpoint can refuse a call. The VM reports a failed
/// `require!` as a user error carrying `message()`, and the transaction
/// leaves storage untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaoError {
    AlreadyMember,
    NotMember,
    IndexOutOfRange,
    ProposalExecuted,
    AlreadyVoted,
    QuorumNotMet,
    InsufficientShares,
    NotOwner,
}

impl DaoError {
    pub const fn message(self) -> &'static str {
        match self {
            DaoError::AlreadyMember => "already added",
            DaoError::NotMember => "not a member",
            DaoError::IndexOutOfRange => "proposal index out of range",
            DaoError::ProposalExecuted => "proposal already executed",
            DaoError::AlreadyVoted => "already voted",
            DaoError::QuorumNotMet => "quorum not met",
            DaoError::InsufficientShares => "insufficient shares",
            DaoError::NotOwner => "only owner can mint shares",
        }
    }
}

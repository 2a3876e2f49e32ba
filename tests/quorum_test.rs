use dao::quorum::quorum_reached;

#[test]
fn unanimous_pair_passes() {
    assert!(quorum_reached(2, 0, 2));
}

#[test]
fn half_the_membership_is_not_a_majority() {
    assert!(!quorum_reached(1, 0, 2));
    assert!(!quorum_reached(2, 0, 4));
    assert!(quorum_reached(3, 0, 4));
}

#[test]
fn tie_or_more_against_fails() {
    assert!(!quorum_reached(3, 3, 5));
    assert!(!quorum_reached(3, 4, 7));
    assert!(quorum_reached(4, 3, 7));
}

#[test]
fn no_votes_never_pass() {
    assert!(!quorum_reached(0, 0, 0));
    assert!(!quorum_reached(0, 0, 3));
}

#[test]
fn grown_membership_can_lose_quorum() {
    assert!(quorum_reached(2, 0, 3));
    assert!(!quorum_reached(2, 0, 4));
}

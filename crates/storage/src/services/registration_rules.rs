//! Invariant checks gating group, participant, and winner mutations.
//!
//! Each function takes already-gathered state and decides; repositories stay
//! free of policy and these checks stay testable without a database. The
//! matching database constraints (partial unique leader index, compound
//! (event, rank) index, conditional registration insert) are the authority
//! when two requests race; these checks order the failures and supply the
//! user-facing messages.

use crate::error::{Result, StorageError};

/// A group can only take members while below its event's per-group cap.
pub fn check_group_capacity(current_members: i64, group_max: i32) -> Result<()> {
    if current_members >= i64::from(group_max) {
        return Err(StorageError::RuleViolation(format!(
            "Group capacity exceeded. Max allowed is {group_max}"
        )));
    }
    Ok(())
}

/// A user registers at most once per event, across all of its groups.
pub fn check_not_already_registered(already_registered: bool) -> Result<()> {
    if already_registered {
        return Err(StorageError::RuleViolation(
            "You are already registered for this event".to_string(),
        ));
    }
    Ok(())
}

/// At most one participant per group carries the leader flag.
pub fn check_leader_slot(wants_leader: bool, leader_exists: bool) -> Result<()> {
    if wants_leader && leader_exists {
        return Err(StorageError::RuleViolation(
            "Group already has a leader".to_string(),
        ));
    }
    Ok(())
}

/// Each rank is assigned once per event.
pub fn check_rank_free_for_create(rank: i32, rank_taken: bool) -> Result<()> {
    if rank_taken {
        return Err(StorageError::RuleViolation(format!(
            "Rank {rank} already assigned for this event"
        )));
    }
    Ok(())
}

/// Same invariant as [`check_rank_free_for_create`], worded for updates.
pub fn check_rank_free_for_update(rank: i32, rank_taken: bool) -> Result<()> {
    if rank_taken {
        return Err(StorageError::RuleViolation(format!(
            "Rank {rank} is already taken for this event"
        )));
    }
    Ok(())
}

/// Capacity limits an event must satisfy on create, and after merging a
/// patch on update.
pub fn validate_capacity_limits(
    group_min_participants: i32,
    group_max_participants: i32,
    max_groups_allowed: i32,
) -> Result<()> {
    if group_min_participants > group_max_participants {
        return Err(StorageError::RuleViolation(
            "Minimum group participants cannot be greater than maximum".to_string(),
        ));
    }
    if max_groups_allowed <= 0 {
        return Err(StorageError::RuleViolation(
            "Max groups allowed must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<()>) -> String {
        match result {
            Err(StorageError::RuleViolation(msg)) => msg,
            other => panic!("expected rule violation, got {other:?}"),
        }
    }

    #[test]
    fn test_capacity_below_limit_passes() {
        assert!(check_group_capacity(1, 2).is_ok());
    }

    #[test]
    fn test_capacity_at_limit_rejected() {
        let msg = message(check_group_capacity(2, 2));
        assert!(msg.contains("Max allowed is 2"));
    }

    #[test]
    fn test_capacity_over_limit_rejected() {
        assert!(check_group_capacity(5, 2).is_err());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let msg = message(check_not_already_registered(true));
        assert_eq!(msg, "You are already registered for this event");
    }

    #[test]
    fn test_fresh_registration_passes() {
        assert!(check_not_already_registered(false).is_ok());
    }

    #[test]
    fn test_second_leader_rejected() {
        let msg = message(check_leader_slot(true, true));
        assert_eq!(msg, "Group already has a leader");
    }

    #[test]
    fn test_member_join_ignores_existing_leader() {
        assert!(check_leader_slot(false, true).is_ok());
    }

    #[test]
    fn test_first_leader_passes() {
        assert!(check_leader_slot(true, false).is_ok());
    }

    #[test]
    fn test_duplicate_rank_on_create_rejected() {
        let msg = message(check_rank_free_for_create(1, true));
        assert_eq!(msg, "Rank 1 already assigned for this event");
    }

    #[test]
    fn test_duplicate_rank_on_update_rejected() {
        let msg = message(check_rank_free_for_update(3, true));
        assert_eq!(msg, "Rank 3 is already taken for this event");
    }

    #[test]
    fn test_free_rank_passes() {
        assert!(check_rank_free_for_create(2, false).is_ok());
        assert!(check_rank_free_for_update(2, false).is_ok());
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let msg = message(validate_capacity_limits(5, 2, 10));
        assert_eq!(
            msg,
            "Minimum group participants cannot be greater than maximum"
        );
    }

    #[test]
    fn test_zero_max_groups_rejected() {
        let msg = message(validate_capacity_limits(1, 2, 0));
        assert_eq!(msg, "Max groups allowed must be greater than 0");
    }

    #[test]
    fn test_sane_limits_pass() {
        assert!(validate_capacity_limits(1, 4, 10).is_ok());
        assert!(validate_capacity_limits(2, 2, 1).is_ok());
    }
}

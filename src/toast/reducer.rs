// SPDX-License-Identifier: MPL-2.0
//! Pure state transitions for the toast collection.
//!
//! The collection is ordered newest first. Dismissal and removal are
//! separate steps: [`Action::Dismiss`] flips `open` so a renderer can play
//! an exit transition, and a later [`Action::Remove`] drops the entry.

use super::id::ToastId;
use super::model::{Toast, ToastOptions};
use crate::domain::toast::ToastLimit;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert at the front, evicting the oldest entries beyond the limit.
    Add(Toast),
    /// Merge the set fields into the matching toast.
    Update(ToastId, ToastOptions),
    /// Mark one toast as closed.
    Dismiss(ToastId),
    /// Mark every toast as closed.
    DismissAll,
    /// Drop one toast.
    Remove(ToastId),
    /// Drop every toast.
    RemoveAll,
}

impl Action {
    /// Returns the ids an [`Action::Add`] would push out of `state`.
    ///
    /// Empty for every other action.
    #[must_use]
    pub fn evicted(&self, state: &[Toast], limit: ToastLimit) -> Vec<ToastId> {
        match self {
            Action::Add(toast) => state
                .iter()
                .filter(|existing| existing.id() != toast.id())
                .skip(limit.value().saturating_sub(1))
                .map(Toast::id)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Applies `action` to `state` and returns the next state.
///
/// Unknown ids leave the state unchanged.
#[must_use]
pub fn reduce(state: &[Toast], action: &Action, limit: ToastLimit) -> Vec<Toast> {
    match action {
        Action::Add(toast) => std::iter::once(toast.clone())
            .chain(
                state
                    .iter()
                    .filter(|existing| existing.id() != toast.id())
                    .cloned(),
            )
            .take(limit.value())
            .collect(),
        Action::Update(id, patch) => state
            .iter()
            .map(|toast| {
                let mut toast = toast.clone();
                if toast.id() == *id {
                    toast.merge(patch);
                }
                toast
            })
            .collect(),
        Action::Dismiss(id) => state
            .iter()
            .map(|toast| {
                let mut toast = toast.clone();
                if toast.id() == *id {
                    toast.close();
                }
                toast
            })
            .collect(),
        Action::DismissAll => state
            .iter()
            .map(|toast| {
                let mut toast = toast.clone();
                toast.close();
                toast
            })
            .collect(),
        Action::Remove(id) => state
            .iter()
            .filter(|toast| toast.id() != *id)
            .cloned()
            .collect(),
        Action::RemoveAll => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::model::Variant;

    fn toast(id: u64, title: &str) -> Toast {
        Toast::open_with(ToastId::from_raw(id), ToastOptions::new().title(title))
    }

    fn ids(state: &[Toast]) -> Vec<u64> {
        state.iter().map(|t| t.id().value()).collect()
    }

    fn add_all(limit: usize, count: u64) -> Vec<Toast> {
        let limit = ToastLimit::new(limit);
        (0..count).fold(Vec::new(), |state, i| {
            reduce(&state, &Action::Add(toast(i, &format!("t{i}"))), limit)
        })
    }

    #[test]
    fn add_inserts_newest_first() {
        let state = add_all(5, 3);
        assert_eq!(ids(&state), vec![2, 1, 0]);
    }

    #[test]
    fn add_never_exceeds_limit_and_keeps_newest() {
        for limit in 1..=6 {
            for count in 0..10u64 {
                let state = add_all(limit, count);
                assert!(state.len() <= limit);

                let expected: Vec<u64> = (0..count).rev().take(limit).collect();
                assert_eq!(ids(&state), expected, "limit {limit}, count {count}");
            }
        }
    }

    #[test]
    fn add_with_existing_id_replaces_instead_of_duplicating() {
        let limit = ToastLimit::new(3);
        let state = add_all(3, 2);
        let state = reduce(&state, &Action::Add(toast(0, "again")), limit);

        assert_eq!(ids(&state), vec![0, 1]);
        assert_eq!(state[0].title(), Some("again"));
    }

    #[test]
    fn evicted_reports_tail_beyond_limit() {
        let limit = ToastLimit::new(3);
        let state = add_all(3, 3);

        assert_eq!(
            Action::Add(toast(9, "new")).evicted(&state, limit),
            vec![ToastId::from_raw(0)]
        );
        assert!(Action::Add(toast(9, "new"))
            .evicted(&state[..2], limit)
            .is_empty());
        assert!(Action::RemoveAll.evicted(&state, limit).is_empty());
    }

    #[test]
    fn update_merges_into_target_only() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 3);
        let patch = ToastOptions::new()
            .description("done")
            .variant(Variant::Success);

        let next = reduce(&state, &Action::Update(ToastId::from_raw(1), patch), limit);

        assert_eq!(next[1].description(), Some("done"));
        assert_eq!(next[1].variant(), Variant::Success);
        assert_eq!(next[1].title(), Some("t1"));
        assert_eq!(next[0], state[0]);
        assert_eq!(next[2], state[2]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 2);

        let next = reduce(
            &state,
            &Action::Update(ToastId::from_raw(99), ToastOptions::new().title("x")),
            limit,
        );
        assert_eq!(next, state);
    }

    #[test]
    fn dismiss_closes_target_only() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 3);

        let next = reduce(&state, &Action::Dismiss(ToastId::from_raw(0)), limit);

        assert_eq!(ids(&next), ids(&state));
        assert!(next[0].is_open());
        assert!(next[1].is_open());
        assert!(!next[2].is_open());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 3);
        let action = Action::Dismiss(ToastId::from_raw(2));

        let once = reduce(&state, &action, limit);
        let twice = reduce(&once, &action, limit);
        assert_eq!(once, twice);
    }

    #[test]
    fn dismiss_all_closes_every_toast_without_removing() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 4);

        let next = reduce(&state, &Action::DismissAll, limit);

        assert_eq!(next.len(), 4);
        assert!(next.iter().all(|t| !t.is_open()));
    }

    #[test]
    fn remove_deletes_exactly_the_target() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 3);

        let next = reduce(&state, &Action::Remove(ToastId::from_raw(1)), limit);
        assert_eq!(ids(&next), vec![2, 0]);

        let unchanged = reduce(&next, &Action::Remove(ToastId::from_raw(1)), limit);
        assert_eq!(unchanged, next);
    }

    #[test]
    fn remove_all_empties_the_collection() {
        let limit = ToastLimit::new(5);
        let state = add_all(5, 3);

        assert!(reduce(&state, &Action::RemoveAll, limit).is_empty());
    }
}

use crate::model::Round;
use std::cmp::Ordering;

/// Oldest first, ties broken by id.
pub fn sort_chronologically(rounds: &mut [Round]) {
    rounds.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
}

/// Newest first, ties broken by id so the order depends only on the round set.
#[must_use]
pub fn most_recent_first(a: &Round, b: &Round) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}

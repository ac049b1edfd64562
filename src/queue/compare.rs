use crate::track::Track;

/// True when both queues list the same tracks in the same order.
///
/// Only `id`, `title` and `artist` take part; album and timing fields are
/// ignored. Callers use this to skip redraws that would otherwise reset
/// list selection and scroll position.
pub fn queues_equal(old: &[Track], new: &[Track]) -> bool {
    old.len() == new.len()
        && old
            .iter()
            .zip(new)
            .all(|(a, b)| a.id == b.id && a.title == b.title && a.artist == b.artist)
}

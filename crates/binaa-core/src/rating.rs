//! # Rating Math
//!
//! One rating per user per store, and the derived one-decimal mean.
//!
//! ```text
//!   ratings: [{u1, 4}, {u2, 5}]
//!        │
//!        │ upsert(u1, 2)        replaces in place, length unchanged
//!        ▼
//!   ratings: [{u1, 2}, {u2, 5}]  ──► mean 3.5
//! ```

use crate::types::{Rating, Store};

/// Inserts or replaces `user_id`'s rating.
///
/// Returns `true` when an existing rating was replaced.
pub fn upsert_rating(ratings: &mut Vec<Rating>, user_id: &str, value: u8) -> bool {
    match ratings.iter_mut().find(|r| r.user_id == user_id) {
        Some(existing) => {
            existing.value = value;
            true
        }
        None => {
            ratings.push(Rating {
                user_id: user_id.to_string(),
                value,
            });
            false
        }
    }
}

/// Mean of all rating values rounded to one decimal; `0.0` when empty.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.value)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Returns a copy of `store` carrying `user_id`'s rating and the recomputed
/// mean.
pub fn rate(store: &Store, user_id: &str, value: u8) -> Store {
    let mut rated = store.clone();
    upsert_rating(&mut rated.ratings, user_id, value);
    rated.rating = average_rating(&rated.ratings);
    rated
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn r(user: &str, value: u8) -> Rating {
        Rating {
            user_id: user.to_string(),
            value,
        }
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(average_rating(&[r("a", 4), r("b", 5)]), 4.5);
        assert_eq!(average_rating(&[r("a", 5), r("b", 4), r("c", 4)]), 4.3);
        assert_eq!(average_rating(&[r("a", 1), r("b", 2), r("c", 2)]), 1.7);
    }

    #[test]
    fn test_second_rating_replaces_in_place() {
        let mut ratings = vec![r("a", 4), r("b", 5)];

        assert!(upsert_rating(&mut ratings, "a", 2));
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0], r("a", 2));

        assert!(!upsert_rating(&mut ratings, "c", 3));
        assert_eq!(ratings.len(), 3);
    }
}

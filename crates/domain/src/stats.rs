//! Aggregate statistics over a friend set.
//!
//! All computations are pure and deterministic. Most-common selections
//! take the maximum of `(count, value)` pairs, so when two values tie on
//! count the lexically greater value wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{chunk_available_ids, Profile};

/// A decoded friend list together with its aggregate views.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FriendRoster {
    friends: Vec<Profile>,
}

impl FriendRoster {
    /// Wraps a decoded friend list.
    #[must_use]
    pub const fn new(friends: Vec<Profile>) -> Self {
        Self { friends }
    }

    /// The wrapped friend profiles.
    #[must_use]
    pub fn friends(&self) -> &[Profile] {
        &self.friends
    }

    /// Number of friends in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// True when the roster has no friends.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Consumes the roster, yielding the friend list.
    #[must_use]
    pub fn into_friends(self) -> Vec<Profile> {
        self.friends
    }

    /// Most frequent home city as a `(count, title)` pair.
    #[must_use]
    pub fn most_common_city(&self) -> Option<(usize, String)> {
        most_common(self.friends.iter().filter_map(|friend| {
            friend
                .city
                .as_ref()
                .map(|city| city.title.clone())
                .filter(|title| !title.is_empty())
        }))
    }

    /// Most frequent university affiliation as a `(count, name)` pair,
    /// applying the occupation-over-listed-university precedence.
    #[must_use]
    pub fn most_common_university(&self) -> Option<(usize, String)> {
        most_common(
            self.friends
                .iter()
                .filter_map(|friend| friend.university_affiliation().map(str::to_string)),
        )
    }

    /// Mean derived age rounded to one decimal, `0.0` when no friend has
    /// a usable birth date.
    #[must_use]
    pub fn average_age(&self, current_year: i32) -> f64 {
        let ages: Vec<i32> = self
            .friends
            .iter()
            .filter_map(|friend| friend.age(current_year))
            .filter(|age| *age != 0)
            .collect();
        if ages.is_empty() {
            return 0.0;
        }
        let total: i32 = ages.iter().sum();
        let mean = f64::from(total) / ages.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Friend-id chunks for mutual-friend queries; see
    /// [`chunk_available_ids`].
    #[must_use]
    pub fn chunked_ids(&self, chunk_size: usize) -> Vec<Vec<i64>> {
        chunk_available_ids(&self.friends, chunk_size)
    }
}

/// Counts occurrences per distinct value and selects the maximum
/// `(count, value)` pair.
fn most_common<I>(values: I) -> Option<(usize, String)>
where
    I: Iterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts.into_iter().map(|(value, count)| (count, value)).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{City, Occupation, University};

    fn friend(id: i64) -> Profile {
        Profile {
            id,
            first_name: "F".to_string(),
            last_name: "L".to_string(),
            bdate: None,
            city: None,
            mobile_phone: None,
            sex: None,
            universities: None,
            occupation: None,
            platform: None,
            about: None,
            deactivated: None,
            is_closed: false,
        }
    }

    fn friend_in(id: i64, city: &str) -> Profile {
        let mut profile = friend(id);
        profile.city = Some(City {
            id,
            title: city.to_string(),
        });
        profile
    }

    #[test]
    fn test_most_common_city_counts_occurrences() {
        let roster = FriendRoster::new(vec![
            friend_in(1, "Paris"),
            friend_in(2, "Paris"),
            friend_in(3, "Berlin"),
            friend(4),
        ]);
        assert_eq!(roster.most_common_city(), Some((2, "Paris".to_string())));
    }

    #[test]
    fn test_city_tie_breaks_to_greater_value() {
        let roster = FriendRoster::new(vec![
            friend_in(1, "Paris"),
            friend_in(2, "Paris"),
            friend_in(3, "Berlin"),
            friend_in(4, "Berlin"),
        ]);
        // Max of (count, value) pairs: (2, "Paris") > (2, "Berlin").
        assert_eq!(roster.most_common_city(), Some((2, "Paris".to_string())));
    }

    #[test]
    fn test_no_city_when_nobody_lists_one() {
        let roster = FriendRoster::new(vec![friend(1), friend(2)]);
        assert_eq!(roster.most_common_city(), None);
    }

    #[test]
    fn test_most_common_university_uses_precedence() {
        let mut occupied = friend(1);
        occupied.occupation = Some(Occupation {
            name: "MIT".to_string(),
            kind: "university".to_string(),
        });
        let mut listed = friend(2);
        listed.universities = Some(vec![University {
            name: Some("MIT".to_string()),
            ..University::default()
        }]);
        let mut other = friend(3);
        other.universities = Some(vec![University {
            name: Some("Cambridge".to_string()),
            ..University::default()
        }]);
        let roster = FriendRoster::new(vec![occupied, listed, other]);
        assert_eq!(
            roster.most_common_university(),
            Some((2, "MIT".to_string()))
        );
    }

    #[test]
    fn test_average_age_rounds_to_one_decimal() {
        let mut a = friend(1);
        a.bdate = Some("15.03.1990".to_string());
        let mut b = friend(2);
        b.bdate = Some("1.1.1991".to_string());
        let mut skipped = friend(3);
        skipped.bdate = Some("1990".to_string());
        let roster = FriendRoster::new(vec![a, b, skipped, friend(4)]);
        assert!((roster.average_age(2024) - 33.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_age_zero_without_usable_dates() {
        let roster = FriendRoster::new(vec![friend(1)]);
        assert!(roster.average_age(2024).abs() < f64::EPSILON);
    }
}

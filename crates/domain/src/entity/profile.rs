//! Profile entity and its nested records.

use serde::{Deserialize, Serialize};

/// Occupation category the university precedence rule keys on.
const OCCUPATION_UNIVERSITY: &str = "university";

/// City attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
}

/// One education entry on a profile. Everything is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct University {
    /// Department name.
    #[serde(default)]
    pub chair_name: Option<String>,
    /// City id of the campus.
    #[serde(default)]
    pub city: Option<i64>,
    /// Form of education, e.g. full-time.
    #[serde(default)]
    pub education_form: Option<String>,
    /// Education status, e.g. alumnus.
    #[serde(default)]
    pub education_status: Option<String>,
    /// Faculty id.
    #[serde(default)]
    pub faculty: Option<i64>,
    /// Faculty display name.
    #[serde(default)]
    pub faculty_name: Option<String>,
    /// Graduation year.
    #[serde(default)]
    pub graduation: Option<i64>,
    /// University display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Current occupation of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    /// Occupation display name.
    pub name: String,
    /// Occupation category, e.g. `"university"` or `"work"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A person record as returned by the profile and friend endpoints.
///
/// Required fields mirror what the remote API always sends; everything
/// else defaults to an explicit absence marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Numeric account id.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Birth date as `"DD.MM.YYYY"`, or a shorter form the API allows.
    #[serde(default)]
    pub bdate: Option<String>,
    /// Home city.
    #[serde(default)]
    pub city: Option<City>,
    /// Listed mobile phone.
    #[serde(default)]
    pub mobile_phone: Option<String>,
    /// Sex marker as reported by the API.
    #[serde(default)]
    pub sex: Option<i64>,
    /// Education entries.
    #[serde(default)]
    pub universities: Option<Vec<University>>,
    /// Current occupation.
    #[serde(default)]
    pub occupation: Option<Occupation>,
    /// Last-seen platform.
    #[serde(default)]
    pub platform: Option<String>,
    /// Free-form about text.
    #[serde(default)]
    pub about: Option<String>,
    /// Set to `"deleted"` or `"banned"` when the account is gone.
    #[serde(default)]
    pub deactivated: Option<String>,
    /// True when the profile is private.
    #[serde(default)]
    pub is_closed: bool,
}

impl Profile {
    /// True when the profile can be queried further: not deactivated and
    /// not closed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.deactivated.is_none() && !self.is_closed
    }

    /// Age derived from the birth date; see [`age_from_birth_date`].
    #[must_use]
    pub fn age(&self, current_year: i32) -> Option<i32> {
        age_from_birth_date(self.bdate.as_deref()?, current_year)
    }

    /// University affiliation with occupation precedence: an occupation of
    /// type `"university"` wins, otherwise the first listed university's
    /// name is used. Empty names count as absent.
    #[must_use]
    pub fn university_affiliation(&self) -> Option<&str> {
        if let Some(occupation) = &self.occupation {
            if occupation.kind == OCCUPATION_UNIVERSITY && !occupation.name.is_empty() {
                return Some(&occupation.name);
            }
        }
        let first = self.universities.as_ref()?.first()?;
        first.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Derives an age from a `"DD.MM.YYYY"` birth date string.
///
/// Requires exactly three dot-separated parts with a 4-digit numeric
/// year; anything else yields `None`. The age is the plain year
/// difference, with no month or day adjustment.
#[must_use]
pub fn age_from_birth_date(birth_date: &str, current_year: i32) -> Option<i32> {
    let parts: Vec<&str> = birth_date.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let year = parts[2];
    if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let birth_year: i32 = year.parse().ok()?;
    Some(current_year - birth_year)
}

use crate::models::{Scheme, UserProfile};

/// Hard eligibility check applied before scoring.
///
/// Failing schemes are excluded entirely and never scored: the profile age
/// must fall inside the scheme's inclusive age range, and a gender-specific
/// scheme must match the profile gender ("all" accepts anyone).
#[inline]
pub fn is_eligible(scheme: &Scheme, profile: &UserProfile) -> bool {
    if profile.age < scheme.min_age || profile.age > scheme.max_age {
        return false;
    }

    if scheme.gender != "all" && scheme.gender != profile.gender {
        return false;
    }

    true
}

//! Identifier generation.
//!
//! IDs are date-stamped and human-legible (`job_20260826_0042`), so listings
//! sorted by ID roughly follow creation order. The four-digit suffix is
//! random; uniqueness within a day is probabilistic, good enough for a
//! single-user demo store.

use chrono::Utc;
use rand::Rng;

fn stamped_id(prefix: &str) -> String {
    let stamp = Utc::now().format("%Y%m%d");
    let suffix: u16 = rand::rng().random_range(0..10_000);
    format!("{}_{}_{:04}", prefix, stamp, suffix)
}

pub fn new_job_id() -> String {
    stamped_id("job")
}

pub fn new_candidate_id() -> String {
    stamped_id("cand")
}

/// Lowercase, collapse every non-alphanumeric run to a single `-`, trim
/// leading and trailing dashes.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Frontend Developer"), "frontend-developer");
        assert_eq!(slugify("  QA / Test Engineer!  "), "qa-test-engineer");
        assert_eq!(slugify("C++ Dev"), "c-dev");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_id_shape() {
        let id = new_job_id();
        assert!(id.starts_with("job_"));
        // job_YYYYMMDD_NNNN
        assert_eq!(id.len(), "job_".len() + 8 + 1 + 4);

        let id = new_candidate_id();
        assert!(id.starts_with("cand_"));
    }
}

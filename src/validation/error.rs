//! `ValidationError`, the conventional error element of a `Validation`.

use std::cmp::Ordering;
use std::fmt;

/// A validation failure with a priority; a larger priority is more important.
///
/// Errors sort by priority. [`compare_to`](ValidationError::compare_to) compares
/// priorities alone and treats a missing other side as smaller than `self`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use railyard::ValidationError;
///
/// let low = ValidationError::of(1, "name is blank");
/// let high = ValidationError::of(2, "account is locked");
///
/// assert_eq!(low.compare_to(Some(&high)), Ordering::Less);
/// assert_eq!(low.compare_to(None), Ordering::Greater);
///
/// let mut errors = vec![high.clone(), low.clone()];
/// errors.sort();
/// assert_eq!(errors, vec![low, high]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    priority: i32,
    error_message: String,
}

impl ValidationError {
    /// Create a new error
    pub fn of(priority: i32, error_message: impl Into<String>) -> Self {
        ValidationError {
            priority,
            error_message: error_message.into(),
        }
    }

    /// The priority of this error
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The human readable message
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Compare priorities only; `None` on the other side yields `Ordering::Greater`.
    pub fn compare_to(&self, other: Option<&ValidationError>) -> Ordering {
        match other {
            Some(other) => self.priority.cmp(&other.priority),
            None => Ordering::Greater,
        }
    }
}

// Priority first; the message only breaks ties so that `Ord` agrees with `Eq`.
impl Ord for ValidationError {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(Some(other))
            .then_with(|| self.error_message.cmp(&other.error_message))
    }
}

impl PartialOrd for ValidationError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.priority, self.error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validation;

    #[test]
    fn compare_to_orders_by_priority() {
        let a = ValidationError::of(1, "a");
        let b = ValidationError::of(2, "b");
        assert_eq!(a.compare_to(Some(&b)), Ordering::Less);
        assert_eq!(b.compare_to(Some(&a)), Ordering::Greater);
        assert_eq!(
            a.compare_to(Some(&ValidationError::of(1, "other message"))),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_to_none_is_greater() {
        assert_eq!(ValidationError::of(i32::MIN, "").compare_to(None), Ordering::Greater);
    }

    #[test]
    fn max_picks_most_important() {
        let errors = vec![
            ValidationError::of(3, "stock"),
            ValidationError::of(7, "payment"),
            ValidationError::of(1, "address"),
        ];
        let top = errors.iter().max().map(ValidationError::error_message);
        assert_eq!(top, Some("payment"));
    }

    #[test]
    fn display_shows_priority_and_message() {
        assert_eq!(ValidationError::of(4, "too long").to_string(), "[4] too long");
    }

    #[test]
    fn used_as_validation_error_element() {
        let v: Validation<ValidationError, u32> = Validation::combine([
            Validation::invalid(vec![ValidationError::of(1, "first")]),
            Validation::valid(10),
            Validation::invalid(vec![ValidationError::of(2, "second")]),
        ]);
        let messages: Vec<_> = v.errors().iter().map(ValidationError::error_message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}

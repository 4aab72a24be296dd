use tracing::{debug, warn};

use crate::conditions::Conditions;
use crate::models::Shed;

/// Outcome of checking the feeding lane in front of a shed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCheck {
    /// One entry per look down the lane, true when it was clear.
    pub attempts: Vec<bool>,
}

impl PathCheck {
    pub fn is_clear(&self) -> bool {
        self.attempts.last().copied().unwrap_or(false)
    }
}

/// Look down the lane up to `max_attempts` times, stopping at the first clear look.
///
/// A lane still blocked after the last attempt is not an error: the shed is
/// simply skipped for this round.
pub fn check_clear_path(
    shed: &Shed,
    max_attempts: u32,
    conditions: &mut impl Conditions,
) -> PathCheck {
    let mut attempts = Vec::new();

    for attempt in 1..=max_attempts {
        let clear = conditions.path_clear();
        attempts.push(clear);
        debug!(shed = %shed.shed_id, attempt, clear, "path check");
        if clear {
            return PathCheck { attempts };
        }
    }

    warn!(shed = %shed.shed_id, attempts = max_attempts, "path blocked");
    PathCheck { attempts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::testing::Scripted;

    fn shed() -> Shed {
        Shed::new("Shed1", "Milking Cows", 5).unwrap()
    }

    #[test]
    fn test_clear_on_third_attempt() {
        let mut conditions = Scripted {
            paths: [false, false, true].into(),
            ..Default::default()
        };
        let check = check_clear_path(&shed(), 3, &mut conditions);
        assert!(check.is_clear());
        assert_eq!(check.attempts.len(), 3);
    }

    #[test]
    fn test_stops_at_first_clear() {
        let mut conditions = Scripted {
            paths: [true, false].into(),
            ..Default::default()
        };
        let check = check_clear_path(&shed(), 3, &mut conditions);
        assert!(check.is_clear());
        assert_eq!(check.attempts, vec![true]);
        // The second scripted look is left unused
        assert_eq!(conditions.paths.len(), 1);
    }

    #[test]
    fn test_gives_up_after_three_blocked() {
        let mut conditions = Scripted {
            paths: [false, false, false, true].into(),
            ..Default::default()
        };
        let check = check_clear_path(&shed(), 3, &mut conditions);
        assert!(!check.is_clear());
        assert_eq!(check.attempts, vec![false, false, false]);
    }
}

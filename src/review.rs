use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INITIAL_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Recall-quality rating for one flashcard review, 0 (blackout) through 5
/// (perfect). Construction validates the range up front; the scheduler
/// itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("quality rating {0} is outside 0-5")]
pub struct QualityError(u8);

impl Quality {
    pub fn new(value: u8) -> Result<Self, QualityError> {
        if value > 5 {
            Err(QualityError(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Quality {
    type Error = QualityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

/// Per-flashcard scheduling state. Keyed by flashcard identity and persisted
/// by the caller; the field names stay camelCase on the wire to match the
/// stored progress format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// days until the next review, at least 1 once reviewed
    pub interval: u32,

    /// consecutive successful recalls
    pub repetitions: u32,

    /// interval growth multiplier, floored at 1.3
    pub ease_factor: f64,

    pub next_review_date: DateTime<Utc>,
}

/// SuperMemo-2 recurrence. Computes the next scheduling state from a quality
/// rating and the previous state; a missing previous state means the card
/// has never been reviewed. Pure apart from reading the current time — the
/// caller owns persistence and any read-modify-write serialization.
pub fn schedule(quality: Quality, previous: Option<&ReviewState>) -> ReviewState {
    schedule_at(quality, previous, Utc::now())
}

/// As [`schedule`], with an explicit current time.
pub fn schedule_at(
    quality: Quality,
    previous: Option<&ReviewState>,
    now: DateTime<Utc>,
) -> ReviewState {
    let (prev_interval, prev_repetitions, prev_ease) = previous
        .map(|state| (state.interval, state.repetitions, state.ease_factor))
        .unwrap_or((0, 0, INITIAL_EASE_FACTOR));

    let (interval, repetitions) = if quality.value() >= 3 {
        let interval = match prev_repetitions {
            0 => 1,
            1 => 6,
            _ => (prev_interval as f64 * prev_ease).round() as u32,
        };
        (interval, prev_repetitions + 1)
    } else {
        (1, 0)
    };

    // the ease factor moves on every review, in both branches
    let miss = f64::from(5 - quality.value());
    let ease_factor = (prev_ease + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);

    ReviewState {
        interval,
        repetitions,
        ease_factor,
        next_review_date: now + Duration::days(i64::from(interval)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn q(value: u8) -> Quality {
        Quality::new(value).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_review_perfect() {
        let state = schedule_at(q(5), None, now());

        assert_eq!(state.repetitions, 1);
        assert_eq!(state.interval, 1);
        assert!((state.ease_factor - 2.6).abs() < 1e-9);
        assert_eq!(state.next_review_date, now() + Duration::days(1));
    }

    #[test]
    fn test_second_review_jumps_to_six_days() {
        let first = schedule_at(q(5), None, now());
        let second = schedule_at(q(5), Some(&first), now());

        assert_eq!(second.repetitions, 2);
        assert_eq!(second.interval, 6);
    }

    #[test]
    fn test_third_review_multiplies_by_ease_factor() {
        let first = schedule_at(q(5), None, now());
        let second = schedule_at(q(5), Some(&first), now());
        let third = schedule_at(q(5), Some(&second), now());

        assert_eq!(third.repetitions, 3);
        let expected = (6.0 * second.ease_factor).round() as u32;
        assert_eq!(third.interval, expected);
        assert_eq!(third.next_review_date, now() + Duration::days(i64::from(expected)));
    }

    #[test]
    fn test_failed_recall_resets_but_keeps_penalizing_ease() {
        let previous = ReviewState {
            interval: 6,
            repetitions: 2,
            ease_factor: 2.5,
            next_review_date: now(),
        };

        let state = schedule_at(q(0), Some(&previous), now());

        assert_eq!(state.repetitions, 0);
        assert_eq!(state.interval, 1);
        assert!(state.ease_factor < previous.ease_factor);
        assert!(state.ease_factor >= MIN_EASE_FACTOR);
    }

    #[test]
    fn test_ease_factor_never_drops_below_floor() {
        let mut state: Option<ReviewState> = None;
        for _ in 0..10 {
            state = Some(schedule_at(q(0), state.as_ref(), now()));
        }
        assert_eq!(state.unwrap().ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn test_quality_three_counts_as_success_but_shrinks_ease() {
        let state = schedule_at(q(3), None, now());

        assert_eq!(state.repetitions, 1);
        assert_eq!(state.interval, 1);
        // 2.5 + (0.1 - 2 * (0.08 + 2 * 0.02)) = 2.36
        assert!((state.ease_factor - 2.36).abs() < 1e-9);
    }

    #[test]
    fn test_quality_validation() {
        assert!(Quality::new(0).is_ok());
        assert!(Quality::new(5).is_ok());
        assert_eq!(Quality::new(6), Err(QualityError(6)));
    }

    #[test]
    fn test_review_state_wire_format_is_camel_case() {
        let state = ReviewState {
            interval: 6,
            repetitions: 2,
            ease_factor: 2.5,
            next_review_date: now(),
        };

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"easeFactor\""));
        assert!(json.contains("\"nextReviewDate\""));

        let back: ReviewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_scheduler_does_not_mutate_previous_state() {
        let previous = ReviewState {
            interval: 6,
            repetitions: 2,
            ease_factor: 2.5,
            next_review_date: now(),
        };
        let copy = previous.clone();

        let _ = schedule_at(q(4), Some(&previous), now());

        assert_eq!(previous, copy);
    }
}

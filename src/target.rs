//! Target word resolution
//!
//! All players of a play period must get the same puzzle, so resolution is a
//! pure function of the calendar day and the configured policy.

use crate::config::ConfigError;
use crate::core::{PlayPeriod, Word};
use crate::wordlists::{WEEKLY, loader::words_from_slice};
use chrono::{DateTime, NaiveDate, TimeZone};

/// Ordered list of weekly targets, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRotation {
    words: Vec<Word>,
}

impl WeeklyRotation {
    /// Build a rotation from an ordered word list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The rotation compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` if the embedded list is empty.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(words_from_slice(WEEKLY))
    }

    /// Word for an ISO week number, wrapping when the list is shorter than a year
    #[must_use]
    pub fn word_for_week(&self, week: u32) -> &Word {
        let index = (week.saturating_sub(1) as usize) % self.words.len();
        &self.words[index]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// How the target is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPolicy {
    /// The same word every period
    Fixed(Word),
    /// One word per ISO week
    Weekly(WeeklyRotation),
}

/// Resolves the secret word for a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResolver {
    policy: TargetPolicy,
}

impl TargetResolver {
    #[must_use]
    pub const fn new(policy: TargetPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    /// Target word for the period containing `date`
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use hauspokal_wordle::core::Word;
    /// use hauspokal_wordle::target::{TargetPolicy, TargetResolver, WeeklyRotation};
    ///
    /// let words = ["WITCH", "BROOM"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let resolver = TargetResolver::new(TargetPolicy::Weekly(WeeklyRotation::new(words).unwrap()));
    ///
    /// // 2026-01-08 is in ISO week 2
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 8).unwrap();
    /// assert_eq!(resolver.resolve(date).text(), "BROOM");
    /// ```
    #[must_use]
    pub fn resolve(&self, date: NaiveDate) -> Word {
        match &self.policy {
            TargetPolicy::Fixed(word) => word.clone(),
            TargetPolicy::Weekly(rotation) => {
                rotation.word_for_week(PlayPeriod::of(date).week()).clone()
            }
        }
    }

    /// Target word for the calendar day of `now` in its own time zone
    #[must_use]
    pub fn resolve_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Word {
        self.resolve(now.date_naive())
    }

    /// Every word this resolver can return
    #[must_use]
    pub fn candidates(&self) -> Vec<Word> {
        match &self.policy {
            TargetPolicy::Fixed(word) => vec![word.clone()],
            TargetPolicy::Weekly(rotation) => rotation.words().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly(words: &[&str]) -> TargetResolver {
        let rotation = WeeklyRotation::new(words_from_slice(words)).unwrap();
        TargetResolver::new(TargetPolicy::Weekly(rotation))
    }

    #[test]
    fn empty_rotation_is_config_error() {
        assert!(matches!(
            WeeklyRotation::new(Vec::new()),
            Err(ConfigError::EmptyWordList)
        ));
    }

    #[test]
    fn fixed_policy_ignores_date() {
        let resolver = TargetResolver::new(TargetPolicy::Fixed(Word::new("snape").unwrap()));
        assert_eq!(resolver.resolve(date(2026, 1, 1)).text(), "SNAPE");
        assert_eq!(resolver.resolve(date(2030, 7, 15)).text(), "SNAPE");
        assert_eq!(resolver.candidates().len(), 1);
    }

    #[test]
    fn embedded_rotation_week_five_is_harry() {
        let resolver = TargetResolver::new(TargetPolicy::Weekly(WeeklyRotation::embedded().unwrap()));
        // 2026-01-29 is in ISO week 5
        assert_eq!(resolver.resolve(date(2026, 1, 29)).text(), "HARRY");
    }

    #[test]
    fn weekly_policy_indexes_by_week() {
        let resolver = weekly(&["WITCH", "BROOM", "STAGS"]);
        // Week 1, 2, 3 of 2026
        assert_eq!(resolver.resolve(date(2026, 1, 1)).text(), "WITCH");
        assert_eq!(resolver.resolve(date(2026, 1, 5)).text(), "BROOM");
        assert_eq!(resolver.resolve(date(2026, 1, 12)).text(), "STAGS");
    }

    #[test]
    fn weekly_policy_wraps_short_lists() {
        let resolver = weekly(&["WITCH", "BROOM", "STAGS"]);
        // Week 4 wraps to index 0, week 5 to index 1
        assert_eq!(resolver.resolve(date(2026, 1, 19)).text(), "WITCH");
        assert_eq!(resolver.resolve(date(2026, 1, 26)).text(), "BROOM");
        // Week 53 -> index 52 % 3 = 1
        assert_eq!(resolver.resolve(date(2026, 12, 31)).text(), "BROOM");
    }

    #[test]
    fn week_53_wraps_with_full_year_list() {
        let rotation = WeeklyRotation::embedded().unwrap();
        assert_eq!(rotation.word_for_week(53), rotation.word_for_week(1));
    }

    #[test]
    fn same_day_same_word() {
        let resolver = TargetResolver::new(TargetPolicy::Weekly(WeeklyRotation::embedded().unwrap()));
        let morning = Utc.with_ymd_and_hms(2026, 3, 4, 6, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2026, 3, 4, 23, 59, 59).unwrap();

        assert_eq!(resolver.resolve_at(&morning), resolver.resolve_at(&evening));
        assert_eq!(
            resolver.resolve(date(2026, 3, 4)),
            resolver.resolve(date(2026, 3, 4))
        );
    }

    #[test]
    fn resolve_at_uses_local_calendar_day() {
        let resolver = weekly(&["WITCH", "BROOM"]);
        // Sunday 23:30 at UTC+2 is still week 1
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2026, 1, 4, 23, 30, 0).unwrap();
        assert_eq!(resolver.resolve_at(&local).text(), "WITCH");

        // Monday 00:30 at UTC+2 is week 2 locally although UTC is still Sunday
        let local = offset.with_ymd_and_hms(2026, 1, 5, 0, 30, 0).unwrap();
        assert_eq!(resolver.resolve_at(&local).text(), "BROOM");
    }
}

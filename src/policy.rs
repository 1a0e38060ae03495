//! Range policies: how capacity, weights and name lengths scale with the item count.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Number of letters names are drawn from.
pub const ALPHABET_LEN: u64 = 26;

/// Inclusive ranges used to draw one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub capacity: RangeInclusive<u64>,
    /// Shared by cost and value.
    pub weight: RangeInclusive<u64>,
    pub name_len: RangeInclusive<usize>,
}

impl Bounds {
    /// Rejects ranges that are empty or would allow a zero capacity, weight or
    /// name length.
    pub fn validate(&self) -> Result<()> {
        check_range("capacity", &self.capacity, 1)?;
        check_range("weight", &self.weight, 1)?;
        check_range("name length", &self.name_len, 1)?;
        Ok(())
    }

    /// Number of distinct names these bounds can produce, saturating at
    /// `limit` so huge length ranges stay cheap to evaluate.
    pub fn name_space(&self, limit: u64) -> u64 {
        let mut total: u64 = 0;
        let mut per_len = ALPHABET_LEN.saturating_pow(
            u32::try_from(*self.name_len.start()).unwrap_or(u32::MAX),
        );
        for _ in self.name_len.clone() {
            total = total.saturating_add(per_len);
            if total >= limit {
                return limit;
            }
            per_len = per_len.saturating_mul(ALPHABET_LEN);
        }
        total
    }

    /// Rough size in bytes of the text form of `count` items, saturating.
    pub fn estimated_bytes(&self, count: usize) -> u64 {
        let mean_name = (*self.name_len.start() as u64)
            .saturating_add(*self.name_len.end() as u64)
            .div_ceil(2);
        let digits = u64::from(self.weight.end().checked_ilog10().unwrap_or(0) + 1);
        // Two numbers, two commas and the newline.
        let per_item = mean_name.saturating_add(2 * digits + 3);
        (count as u64).saturating_mul(per_item)
    }
}

fn check_range<T>(what: &str, range: &RangeInclusive<T>, min: T) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if range.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{what} range {}..={} is empty",
            range.start(),
            range.end()
        )));
    }
    if *range.start() < min {
        return Err(Error::InvalidArgument(format!(
            "{what} range must start at {min} or above, got {}",
            range.start()
        )));
    }
    Ok(())
}

/// Which set of ranges to scale by the item count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Capacity in `[5n, 15n]`, name length in `[1, 1 + n/26]`.
    ///
    /// The longest names always leave room for `n` distinct names.
    #[default]
    Unique,
    /// Capacity in `[n, 10n]`, name length in `[5, 10]`.
    Legacy,
}

impl RangePolicy {
    /// Ranges for `count` items. `count` must be positive.
    pub fn bounds(self, count: usize) -> Bounds {
        let n = count as u64;
        let weight = (n / 2).max(1)..=n.saturating_mul(5).max(1);
        match self {
            RangePolicy::Unique => Bounds {
                capacity: n.saturating_mul(5)..=n.saturating_mul(15),
                weight,
                name_len: 1..=1 + count / ALPHABET_LEN as usize,
            },
            RangePolicy::Legacy => Bounds {
                capacity: n..=n.saturating_mul(10),
                weight,
                name_len: 5..=10,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RangePolicy::Unique => "unique",
            RangePolicy::Legacy => "legacy",
        }
    }
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Random instance generation.
//!
//! Draw order is fixed: the capacity first, then for every item its name, its
//! cost and its value. A seeded RNG therefore reproduces the same instance.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::instance::{Instance, Item};
use crate::policy::{Bounds, RangePolicy};

/// Draws allowed for a single item's name before giving up.
pub const MAX_NAME_ATTEMPTS: usize = 1024;

/// Largest instance, by estimated text size, that will be held in memory.
pub const MAX_INSTANCE_BYTES: u64 = 1 << 32;

/// Generates `count` items using the ranges `policy` assigns to `count`.
pub fn generate<R: Rng + ?Sized>(count: usize, policy: RangePolicy, rng: &mut R) -> Result<Instance> {
    check_count(count)?;
    let bounds = policy.bounds(count);
    debug!(%policy, count, ?bounds, "computed bounds");
    generate_with_bounds(count, &bounds, rng)
}

/// Generates `count` items drawing every field from `bounds`.
///
/// Fails with [`Error::GenerationExhausted`] if `bounds` cannot name `count`
/// items, or if a single item needs more than [`MAX_NAME_ATTEMPTS`] draws.
pub fn generate_with_bounds<R: Rng + ?Sized>(
    count: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Result<Instance> {
    check_count(count)?;
    bounds.validate()?;
    let estimated = bounds.estimated_bytes(count);
    if estimated > MAX_INSTANCE_BYTES {
        return Err(Error::InvalidArgument(format!(
            "{count} items would take about {estimated} bytes, more than the {MAX_INSTANCE_BYTES} byte limit"
        )));
    }
    if bounds.name_space(count as u64) < count as u64 {
        return Err(Error::GenerationExhausted { count: 0, attempts: 0 });
    }

    let capacity = rng.gen_range(bounds.capacity.clone());

    let too_many = |_| Error::InvalidArgument(format!("cannot allocate room for {count} items"));
    let mut used = HashSet::new();
    used.try_reserve(count).map_err(too_many)?;
    let mut items = Vec::new();
    items.try_reserve(count).map_err(too_many)?;
    for index in 0..count {
        let name = unused_name(&mut used, bounds, rng).ok_or(Error::GenerationExhausted {
            count: index,
            attempts: MAX_NAME_ATTEMPTS,
        })?;
        let cost = rng.gen_range(bounds.weight.clone());
        let value = rng.gen_range(bounds.weight.clone());
        items.push(Item { name, cost, value });
    }

    Ok(Instance { capacity, items })
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidArgument(
            "number of items must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Draws names until one is not in `used`, records it and returns it.
fn unused_name<R: Rng + ?Sized>(
    used: &mut HashSet<String>,
    bounds: &Bounds,
    rng: &mut R,
) -> Option<String> {
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let len = rng.gen_range(bounds.name_len.clone());
        let name = random_name(len, rng);
        if used.insert(name.clone()) {
            return Some(name);
        }
        trace!(%name, attempt, "name already used");
    }
    None
}

/// A string of `len` uniformly chosen lowercase ASCII letters.
pub fn random_name<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

/// Owns an RNG handle and a policy, for callers generating several instances.
#[derive(Debug)]
pub struct Generator {
    policy: RangePolicy,
    rng: StdRng,
}

impl Generator {
    /// Seeded from system entropy.
    pub fn new(policy: RangePolicy) -> Self {
        Self {
            policy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded with `seed`; the same seed and policy give the same instances.
    pub fn with_seed(policy: RangePolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn generate(&mut self, count: usize) -> Result<Instance> {
        generate(count, self.policy, &mut self.rng)
    }
}

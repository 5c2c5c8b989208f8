//! Deterministic per-actor and arena-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every component instance (an actor's wanderer, each of its timers) owns
//! its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (actor_id * MIXING_CONSTANT) XOR stream_salt
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive actor IDs uniformly across the seed space.
//! The stream salt separates the components of one actor, so adding a timer
//! to an actor never changes how its wanderer moves.
//!
//! Components draw through the [`RandomSource`] trait rather than a concrete
//! generator; tests inject scripted sources to force specific headings.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ActorId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Second odd constant (splitmix64 multiplier) used to salt stream indices.
const STREAM_CONSTANT: u64 = 0xbf58_476d_1ce4_e5b9;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The random draws the motion and timer components need.
///
/// # Contract
///
/// - `unit_f32` returns a value in `[0, 1)`.
/// - `range_f32(lo, hi)` returns a value in `[lo, hi]`, and exactly `lo` when
///   `lo >= hi` (degenerate ranges are not an error).
pub trait RandomSource {
    fn unit_f32(&mut self) -> f32;

    fn range_f32(&mut self, lo: f32, hi: f32) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn unit_f32(&mut self) -> f32 {
        (**self).unit_f32()
    }

    #[inline]
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        (**self).range_f32(lo, hi)
    }
}

// ── RngStream ─────────────────────────────────────────────────────────────────

/// Which component of an actor a generator belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RngStream {
    /// The actor's `BoundedWanderer`.
    Motion,
    /// The actor's n-th timer.
    Timer(u32),
}

impl RngStream {
    #[inline]
    fn salt(self) -> u64 {
        let index = match self {
            RngStream::Motion   => 0,
            RngStream::Timer(n) => n as u64 + 1,
        };
        index.wrapping_mul(STREAM_CONSTANT)
    }
}

// ── ActorRng ──────────────────────────────────────────────────────────────────

/// Per-component deterministic RNG.
///
/// Owned exclusively by one component instance; never shared.
#[derive(Clone, Debug)]
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed deterministically from the run's global seed, an actor ID and the
    /// component stream.
    pub fn new(global_seed: u64, actor: ActorId, stream: RngStream) -> Self {
        let seed = global_seed
            ^ (actor.0 as u64).wrapping_mul(MIXING_CONSTANT)
            ^ stream.salt();
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, e.g. for tests and one-off components.
    pub fn from_seed(seed: u64) -> Self {
        ActorRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for ActorRng {
    #[inline]
    fn unit_f32(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    #[inline]
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        // Non-finite spans (NaN or infinite bounds) fall through to `lo`.
        if lo >= hi || !(hi - lo).is_finite() {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Arena-level RNG for global operations (spawn placement and the like).
///
/// Used only from the single-threaded arena loop.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit_f32(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    #[inline]
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi || !(hi - lo).is_finite() {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }
}

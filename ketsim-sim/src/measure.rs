//! Projective measurement and repeated sampling
//!
//! Measurement reads one qubit in the computational basis and collapses
//! the state onto the observed branch. Sampling draws whole-register
//! outcomes from the probability distribution without disturbing the
//! state, standing in for the repeat-the-experiment loop of real
//! hardware.

use std::collections::HashMap;

use crate::apply::check_qubit;
use crate::error::{Result, SimError};
use ketsim_core::{Qubit, DEFAULT_TOLERANCE};
use ketsim_state::QuantumState;
use num_complex::Complex64;
use rand::Rng;

/// Measures `qubit` in the computational basis and collapses `state`
/// onto the observed outcome.
///
/// When the outcome is already certain (probability within
/// [`DEFAULT_TOLERANCE`] of 0 or 1) the rng is never consulted, so
/// deterministic circuits stay reproducible under any rng.
///
/// # Errors
///
/// Returns [`SimError::QubitOutOfRange`] if `qubit` does not address
/// `state`.
///
/// # Example
///
/// ```
/// use ketsim_core::Qubit;
/// use ketsim_sim::measure;
/// use ketsim_state::QuantumState;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut state = QuantumState::with_basis(2, 0b01).unwrap();
/// let outcome = measure(&mut state, Qubit::new(1), &mut rng).unwrap();
/// assert_eq!(outcome, 1);
/// ```
pub fn measure(state: &mut QuantumState, qubit: Qubit, rng: &mut impl Rng) -> Result<u8> {
    check_qubit(qubit, state.nbits())?;

    let mask = qubit.mask();
    let prob_zero: f64 = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(index, _)| index & mask == 0)
        .map(|(_, amplitude)| amplitude.norm_sqr())
        .sum();
    let prob_one = 1.0 - prob_zero;

    // Certain outcomes bypass the rng
    let outcome: u8 = if prob_one <= DEFAULT_TOLERANCE {
        0
    } else if prob_zero <= DEFAULT_TOLERANCE {
        1
    } else if rng.gen::<f64>() < prob_one {
        1
    } else {
        0
    };

    let p_outcome = if outcome == 1 { prob_one } else { prob_zero };
    if p_outcome <= 0.0 {
        return Err(SimError::DegenerateOutcome { qubit, outcome });
    }

    // Zero the discarded branch, rescale the kept one back to unit norm
    let scale = 1.0 / p_outcome.sqrt();
    let want = if outcome == 1 { mask } else { 0 };
    for (index, amplitude) in state.amplitudes_mut().iter_mut().enumerate() {
        if index & mask == want {
            *amplitude *= scale;
        } else {
            *amplitude = Complex64::new(0.0, 0.0);
        }
    }

    Ok(outcome)
}

/// Occurrence counts from repeated whole-register sampling.
///
/// Keys are basis-state indices; only observed outcomes are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCounts {
    counts: HashMap<usize, usize>,
    shots: usize,
}

impl SampleCounts {
    fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    fn record(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
    }

    /// Total number of shots taken.
    #[inline]
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Occurrences of the basis state `index`.
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Fraction of shots that produced `index`.
    pub fn frequency(&self, index: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.count(index) as f64 / self.shots as f64
    }

    /// Iterates over observed `(index, count)` pairs in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&index, &count)| (index, count))
    }

    /// Observed outcomes sorted by descending count, ties broken by
    /// ascending index.
    pub fn ranked(&self) -> Vec<(usize, usize)> {
        let mut entries: Vec<(usize, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Draws `shots` independent whole-register samples from `state`.
///
/// The state is read, never collapsed, so one prepared state serves an
/// entire histogram.
pub fn sample(state: &QuantumState, shots: usize, rng: &mut impl Rng) -> SampleCounts {
    let probabilities = state.probabilities();
    let mut counts = SampleCounts::new(shots);

    for _ in 0..shots {
        let random_value: f64 = rng.gen();
        let mut cumulative = 0.0;
        // Rounding can leave the scan short of random_value; the last
        // index absorbs the remainder
        let mut hit = probabilities.len() - 1;
        for (index, probability) in probabilities.iter().enumerate() {
            cumulative += probability;
            if random_value < cumulative {
                hit = index;
                break;
            }
        }
        counts.record(hit);
    }

    counts
}

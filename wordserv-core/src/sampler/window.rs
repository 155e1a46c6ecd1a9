use std::ops::Range;

use rand::Rng;

/// Picks a random contiguous window of `k` items in a sequence of `len`.
///
/// The window is shortened to `len` when `k > len`, so the result is
/// always a valid range of `0..len`. An empty sequence yields `0..0`.
///
/// The start is drawn from `0..max(len - k, 1)`.
pub fn random_window<R: Rng + ?Sized>(rng: &mut R, len: usize, k: usize) -> Range<usize> {
	let size = k.min(len);
	let start = rng.random_range(0..(len - size).max(1));
	start..start + size
}

/// Returns the last index from which the remaining items still hold
/// `target` units.
///
/// Walks `counts` from the end, summing as it goes, and stops at the first
/// index where the running total reaches `target`: the largest `i` such
/// that `counts[i..].sum() >= target`. Returns 0 when the whole sequence
/// holds less than `target`.
///
/// Used with per-chapter paragraph counts and per-chapter word counts.
pub fn latest_start_bound<I>(counts: I, target: usize) -> usize
where
	I: IntoIterator<Item = usize>,
	I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
	let mut total = 0;
	for (index, count) in counts.into_iter().enumerate().rev() {
		total += count;
		if total >= target {
			return index;
		}
	}
	0
}

/// Draws a starting chapter for a run of `target` units.
///
/// The draw range is `0..latest_start_bound(counts, target)`, widened to
/// `0..1` when the bound is 0.
pub(crate) fn random_start<R, I>(rng: &mut R, counts: I, target: usize) -> usize
where
	R: Rng + ?Sized,
	I: IntoIterator<Item = usize>,
	I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
	let bound = latest_start_bound(counts, target);
	rng.random_range(0..bound.max(1))
}

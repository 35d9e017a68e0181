//! Bonus application shared by every stage that combines percentages.
//!
//! The stack applies bonuses in a fixed order:
//! Flat → %Inc → More
//!
//! Attack assembly uses Flat and %Inc; the final score composition is a
//! pure More chain.

/// A single bonus that can be applied to a value.
///
/// - **Flat**: additive, summed before anything else (e.g. +30 attack)
/// - **Increased**: percentages summed, then applied once (e.g. +20%)
/// - **More**: independent multipliers applied one after another (e.g. ×1.2)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bonus {
    /// Flat additive bonus (applied first)
    Flat(f64),

    /// Percentage increase, summed with other %Inc then multiplied.
    /// Plain percent (20.0 = +20%).
    Increased(f64),

    /// Multiplicative "more" modifier (20.0 = ×1.2, -10.0 = ×0.9).
    More(f64),
}

/// A collection of bonuses applied in Flat → %Inc → More order.
///
/// # Example
/// ```
/// # use score_core::stats::bonus::BonusStack;
/// let value = BonusStack::new()
///     .flat(100.0)
///     .increased(20.0)
///     .increased(30.0)
///     .more(10.0)
///     .apply(0.0);
/// // (0 + 100) × 1.5 × 1.1
/// assert!((value - 165.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    pub fn add(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = Bonus>) {
        self.bonuses.extend(bonuses);
    }

    /// Sum of all flat bonuses.
    pub fn flat_sum(&self) -> f64 {
        self.bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Flat(v) => Some(*v),
                _ => None,
            })
            .sum()
    }

    /// Sum of all %Inc bonuses, in percent.
    pub fn increased_sum(&self) -> f64 {
        self.bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Increased(p) => Some(*p),
                _ => None,
            })
            .sum()
    }

    /// Product of every More multiplier, `Π (1 + p/100)`.
    ///
    /// An empty chain is exactly 1.0, and a More(0.0) factor is exactly 1.0,
    /// so absent stats leave the product bit-identical.
    pub fn more_product(&self) -> f64 {
        self.bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::More(p) => Some(*p),
                _ => None,
            })
            .fold(1.0, |acc, percent| acc * (1.0 + percent / 100.0))
    }

    /// Apply all bonuses to a base value.
    ///
    /// # Formula
    /// ```text
    /// result = (base + flat_sum) × (1 + inc_sum/100) × more_product
    /// ```
    pub fn apply(&self, base: f64) -> f64 {
        let after_flat = base + self.flat_sum();
        let after_inc = after_flat * (1.0 + self.increased_sum() / 100.0);
        after_inc * self.more_product()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

/// Builder-style helpers.
impl BonusStack {
    pub fn flat(mut self, value: f64) -> Self {
        self.add(Bonus::Flat(value));
        self
    }

    pub fn increased(mut self, percent: f64) -> Self {
        self.add(Bonus::Increased(percent));
        self
    }

    pub fn more(mut self, percent: f64) -> Self {
        self.add(Bonus::More(percent));
        self
    }
}

/// Floor that tolerates representation error just below an integer.
///
/// `0.29 * 100.0` evaluates to `28.999999999999996`; the game computes 29.
/// Scores are at most in the millions, far above the tolerance.
pub fn floor_tolerant(value: f64) -> f64 {
    const TOLERANCE: f64 = 1e-6;
    (value + TOLERANCE).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_then_increased_then_more() {
        let stack = BonusStack::new()
            .more(50.0)
            .flat(5.0)
            .increased(20.0)
            .increased(15.0);
        // (10 + 5) × 1.35 × 1.5
        assert!((stack.apply(10.0) - 30.375).abs() < 1e-9);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn empty_more_chain_is_exactly_one() {
        assert_eq!(BonusStack::new().more_product(), 1.0);
        assert_eq!(BonusStack::new().more(0.0).more(0.0).more_product(), 1.0);
    }

    #[test]
    fn more_chain_is_order_independent() {
        let terms = [20.0, 6.6, 3.25, 41.0, 0.0, 12.5, 7.0, 1.75, 2.1];
        let forward: BonusStack = terms.iter().fold(BonusStack::new(), |s, &p| s.more(p));
        let reverse: BonusStack = terms
            .iter()
            .rev()
            .fold(BonusStack::new(), |s, &p| s.more(p));
        let mut rotated = BonusStack::new();
        rotated.extend(
            terms
                .iter()
                .cycle()
                .skip(4)
                .take(terms.len())
                .map(|&p| Bonus::More(p)),
        );

        let a = forward.more_product();
        assert!((a - reverse.more_product()).abs() < 1e-12);
        assert!((a - rotated.more_product()).abs() < 1e-12);
    }

    #[test]
    fn tolerant_floor_recovers_integral_products() {
        assert_eq!((0.29_f64 * 100.0).floor(), 28.0);
        assert_eq!(floor_tolerant(0.29 * 100.0), 29.0);
        assert_eq!(floor_tolerant(6600.9), 6600.0);
        assert_eq!(floor_tolerant(0.0), 0.0);
    }
}

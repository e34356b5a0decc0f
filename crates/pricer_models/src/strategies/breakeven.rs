//! Breakeven markers.

/// One or two underlying prices at which a strategy's P&L is zero.
///
/// Pair order follows each strategy's definition and is kept as-is
/// (most list the upper marker first; the butterfly lists the lower first).
///
/// # Examples
/// ```
/// use pricer_models::strategies::Breakeven;
///
/// assert_eq!(Breakeven::Single(105.0).to_vec(), vec![105.0]);
/// assert_eq!(Breakeven::Pair(105.0, 95.0).to_vec(), vec![105.0, 95.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Breakeven {
    /// A single marker
    Single(f64),
    /// Two markers
    Pair(f64, f64),
}

impl Breakeven {
    /// Normalises into a sequence.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Breakeven::Single(price) => vec![price],
            Breakeven::Pair(first, second) => vec![first, second],
        }
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        match self {
            Breakeven::Single(_) => 1,
            Breakeven::Pair(..) => 2,
        }
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Breakeven> for Vec<f64> {
    fn from(breakeven: Breakeven) -> Self {
        breakeven.to_vec()
    }
}

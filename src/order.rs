//! Loop-order selector for the naive kernels.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Nesting order of the `i`, `j`, `k` loops.
///
/// All three compute the same product. They differ only in how they walk
/// memory, which is what the benchmark measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoopOrder {
    /// Row of A times column of B, scalar accumulator. B is read with
    /// stride `n`.
    Ijk,
    /// Broadcast `A[i][k]` over row `k` of B into row `i` of C. Every
    /// inner access is stride 1.
    #[default]
    Ikj,
    /// Same inner loop as `Ikj` with the two outer loops swapped, so row
    /// `k` of B stays hot while A is walked down a column.
    Kij,
}

impl LoopOrder {
    /// Every order, reference first.
    pub const ALL: [LoopOrder; 3] = [LoopOrder::Ijk, LoopOrder::Ikj, LoopOrder::Kij];

    /// Order used as ground truth when verifying the others.
    pub const REFERENCE: LoopOrder = LoopOrder::Ijk;

    /// Tag accepted by `FromStr` for this order.
    pub fn as_str(self) -> &'static str {
        match self {
            LoopOrder::Ijk => "ijk",
            LoopOrder::Ikj => "ikj",
            LoopOrder::Kij => "kij",
        }
    }
}

impl fmt::Display for LoopOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoopOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ijk" => Ok(LoopOrder::Ijk),
            "ikj" => Ok(LoopOrder::Ikj),
            "kij" => Ok(LoopOrder::Kij),
            other => Err(Error::UnknownOrder(other.to_string())),
        }
    }
}

//! Stack display convention.
//!
//! Material quantities are shown to players as full stacks plus a
//! remainder. Most material stacks to 64; some monsters drop material
//! that stacks to 16.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stack size convention.
///
/// # Examples
///
/// ```rust
/// use dropcalc::StackSize;
///
/// assert_eq!(StackSize::Standard.units(), 64);
/// assert_eq!(StackSize::Small.units(), 16);
/// assert_eq!(StackSize::for_flags([false, true, false]), StackSize::Small);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StackSize {
    /// 16 units per stack.
    Small,
    /// 64 units per stack.
    #[default]
    Standard,
}

impl StackSize {
    /// Units per full stack.
    pub fn units(self) -> u64 {
        match self {
            StackSize::Small => 16,
            StackSize::Standard => 64,
        }
    }

    /// Pick the stack size for an aggregate of sources.
    ///
    /// A single small-stack source forces `Small` for the whole aggregate.
    pub fn for_flags(small_stack_flags: impl IntoIterator<Item = bool>) -> Self {
        if small_stack_flags.into_iter().any(|small| small) {
            StackSize::Small
        } else {
            StackSize::Standard
        }
    }
}

/// A quantity split into full stacks and a remainder.
///
/// Always satisfies `groups * size + remaining == total` and
/// `remaining < size`.
///
/// # Examples
///
/// ```rust
/// use dropcalc::{StackCount, StackSize};
///
/// let count = StackCount::decompose(200, StackSize::Standard);
/// assert_eq!((count.groups, count.remaining), (3, 8));
/// assert_eq!(count.to_string(), "3 groups + 8 units");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCount {
    /// Number of full stacks.
    pub groups: u64,
    /// Units left over after the full stacks.
    pub remaining: u64,
    /// Stack size used for the split.
    pub size: StackSize,
}

impl StackCount {
    /// Split `total` into stacks of `size`.
    pub fn decompose(total: u64, size: StackSize) -> Self {
        let units = size.units();
        Self {
            groups: total / units,
            remaining: total % units,
            size,
        }
    }
}

impl fmt::Display for StackCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} groups + {} units", self.groups, self.remaining)
    }
}

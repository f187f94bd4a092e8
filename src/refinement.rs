//! Refinement cost derivation.
//!
//! Raw drops that need refinement are converted in batches: each
//! refinement action consumes a fixed number of raw units and charges a
//! fixed amount of one or more currencies. Recipe costs from every
//! contributing monster are summed into a single recipe.

use crate::catalog::SourceRef;
use crate::stack::{StackCount, StackSize};
use std::collections::BTreeMap;

/// Refinement recipe summed over all contributing monsters.
///
/// # Examples
///
/// ```rust
/// use dropcalc::refinement::RefinementCost;
/// use dropcalc::StackSize;
///
/// let cost = RefinementCost::new(2, [("silver".to_string(), 5)].into());
/// let plan = cost.plan(30, StackSize::Standard).unwrap();
///
/// assert_eq!(plan.refine_count, 15);
/// assert_eq!(plan.total_currency, vec![("silver".to_string(), 75)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinementCost {
    /// Raw units consumed per refinement action.
    pub material: u64,
    /// Currency charged per refinement action, by currency code.
    pub currency: BTreeMap<String, u64>,
}

/// Refinement figures for a concrete raw-material total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementPlan {
    /// Number of refinement actions; any fractional leftover is dropped.
    pub refine_count: u64,
    /// `refine_count` split into stacks.
    pub refined_stack: StackCount,
    /// Currency charged by one refinement action.
    pub per_refinement_currency: Vec<(String, u64)>,
    /// Currency charged by all `refine_count` actions.
    pub total_currency: Vec<(String, u64)>,
}

/// Why a plan could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanIssue {
    /// The recipe consumes no material and charges no currency.
    Unspecified,
    /// The recipe charges currency but consumes no material.
    ZeroMaterial,
    /// A summed recipe cost or a currency total does not fit in `u64`.
    Overflow,
}

impl RefinementCost {
    /// Create a recipe directly.
    pub fn new(material: u64, currency: BTreeMap<String, u64>) -> Self {
        Self { material, currency }
    }

    /// Sum the recipe costs of every source that declares one.
    ///
    /// # Errors
    ///
    /// * `PlanIssue::Overflow` - a summed cost does not fit in `u64`
    pub fn aggregate(sources: &[SourceRef<'_>]) -> Result<Self, PlanIssue> {
        let mut total = RefinementCost::default();
        for cost in sources.iter().filter_map(|s| s.monster.currency_cost.as_ref()) {
            total.material = total
                .material
                .checked_add(u64::from(cost.refine_cost_material))
                .ok_or(PlanIssue::Overflow)?;
            for (code, amount) in &cost.refine_cost_currency {
                let entry = total.currency.entry(code.clone()).or_insert(0);
                *entry = entry.checked_add(*amount).ok_or(PlanIssue::Overflow)?;
            }
        }
        Ok(total)
    }

    /// Whether no source defines any refinement cost.
    pub fn is_unspecified(&self) -> bool {
        self.material == 0 && self.currency.is_empty()
    }

    /// Derive refinement figures for `total_unrefined` raw units.
    ///
    /// # Errors
    ///
    /// * `PlanIssue::Unspecified` - no cost is defined; callers omit the figures
    /// * `PlanIssue::ZeroMaterial` - currency is charged but nothing consumed
    /// * `PlanIssue::Overflow` - a currency total does not fit in `u64`
    pub fn plan(
        &self,
        total_unrefined: u64,
        stack_size: StackSize,
    ) -> Result<RefinementPlan, PlanIssue> {
        if self.is_unspecified() {
            return Err(PlanIssue::Unspecified);
        }
        if self.material == 0 {
            return Err(PlanIssue::ZeroMaterial);
        }

        let refine_count = total_unrefined / self.material;
        let per_refinement_currency: Vec<(String, u64)> = self
            .currency
            .iter()
            .map(|(code, amount)| (code.clone(), *amount))
            .collect();
        let total_currency = per_refinement_currency
            .iter()
            .map(|(code, amount)| {
                amount
                    .checked_mul(refine_count)
                    .map(|total| (code.clone(), total))
                    .ok_or(PlanIssue::Overflow)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RefinementPlan {
            refine_count,
            refined_stack: StackCount::decompose(refine_count, stack_size),
            per_refinement_currency,
            total_currency,
        })
    }
}

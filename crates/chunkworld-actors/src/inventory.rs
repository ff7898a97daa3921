//! Resource-inventory operations.
//!
//! The inventory itself is caller-owned: a plain `BTreeMap<Material, u32>`
//! supplied by whoever holds the resources (the surrounding application,
//! in the current game). This module provides the checked helpers the
//! economy needs, most importantly the all-or-nothing batch deduction
//! used by construction -- either every cost line is paid or nothing is
//! touched.

use std::collections::BTreeMap;

use chunkworld_types::Material;

use crate::error::ActorError;

/// Compute the total number of units across all materials.
///
/// Returns `None` if the sum overflows `u32`.
pub fn total(inventory: &BTreeMap<Material, u32>) -> Option<u32> {
    let mut sum: u32 = 0;
    for qty in inventory.values() {
        sum = sum.checked_add(*qty)?;
    }
    Some(sum)
}

/// Whether the inventory holds at least `amount` of the given material.
pub fn has_at_least(inventory: &BTreeMap<Material, u32>, material: Material, amount: u32) -> bool {
    inventory.get(&material).copied().unwrap_or(0) >= amount
}

/// Add `amount` units of `material` to the inventory.
///
/// # Errors
///
/// Returns [`ActorError::ArithmeticOverflow`] if the quantity would
/// exceed `u32::MAX`.
pub fn add(
    inventory: &mut BTreeMap<Material, u32>,
    material: Material,
    amount: u32,
) -> Result<(), ActorError> {
    let entry = inventory.entry(material).or_insert(0);
    *entry = entry
        .checked_add(amount)
        .ok_or_else(|| ActorError::ArithmeticOverflow {
            context: format!("adding {amount} {material} overflows the inventory"),
        })?;
    Ok(())
}

/// Remove `amount` units of `material` from the inventory.
///
/// Unlike the historical implementation, a depleted line item stays in
/// the map at zero -- construction tests observe exact zero balances.
///
/// # Errors
///
/// Returns [`ActorError::InsufficientResources`] if the inventory holds
/// fewer than `amount` units.
pub fn deduct(
    inventory: &mut BTreeMap<Material, u32>,
    material: Material,
    amount: u32,
) -> Result<(), ActorError> {
    let available = inventory.get(&material).copied().unwrap_or(0);
    let remaining = available
        .checked_sub(amount)
        .ok_or(ActorError::InsufficientResources {
            material,
            required: amount,
            available,
            missing: amount.saturating_sub(available),
        })?;
    inventory.insert(material, remaining);
    Ok(())
}

/// Deduct an entire cost list atomically: validate every line first,
/// then deduct. On any shortfall nothing is touched and the error names
/// the first short material and the exact deficit.
///
/// # Errors
///
/// Returns [`ActorError::InsufficientResources`] for the first cost
/// line the inventory cannot cover.
pub fn deduct_all(
    inventory: &mut BTreeMap<Material, u32>,
    costs: &[(Material, u32)],
) -> Result<(), ActorError> {
    // Validation pass: no mutation until every line is covered.
    for &(material, required) in costs {
        let available = inventory.get(&material).copied().unwrap_or(0);
        if available < required {
            return Err(ActorError::InsufficientResources {
                material,
                required,
                available,
                missing: required.saturating_sub(available),
            });
        }
    }

    // Deduction pass: cannot fail after validation.
    for &(material, required) in costs {
        deduct(inventory, material, required)?;
    }
    Ok(())
}

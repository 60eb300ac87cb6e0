//! Trader assort merging.

use loadout_types::TraderAssort;

/// Append `patch` offers to `host` and overwrite its barter and loyalty
/// entries by item id. Offers are not de-duplicated.
///
/// Returns the number of offers appended.
pub fn merge_assort(host: &mut TraderAssort, patch: &TraderAssort) -> usize {
    host.items.extend(patch.items.iter().cloned());
    for (id, scheme) in &patch.barter_scheme {
        host.barter_scheme.insert(id.clone(), scheme.clone());
    }
    for (id, level) in &patch.loyal_level_items {
        host.loyal_level_items.insert(id.clone(), level.clone());
    }
    patch.items.len()
}

//! Weapon-mastery template extension.

use loadout_types::MasteryRecord;

use crate::config::MasteryExtension;

/// Append each extension's templates to every record whose name matches.
///
/// Records are visited in order; for each record, matching extensions are
/// applied in table order. Returns the number of ids appended.
pub fn extend_mastery(records: &mut [MasteryRecord], table: &[MasteryExtension]) -> usize {
    let mut appended = 0;
    for record in records.iter_mut() {
        for extension in table.iter().filter(|e| e.weapon == record.name) {
            record.templates.extend(extension.templates.iter().cloned());
            appended += extension.templates.len();
        }
    }
    appended
}

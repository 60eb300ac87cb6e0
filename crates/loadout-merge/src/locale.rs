//! Display strings for new items.

use loadout_types::{LocaleStrings, Locales};

/// Write the `Name`, `ShortName`, and `Description` keys for `id` into every
/// language. The same text goes into each language; there is no translation.
///
/// Returns the number of languages written.
pub fn localize(locales: &mut Locales, id: &str, strings: &LocaleStrings) -> usize {
    for table in locales.values_mut() {
        table.insert(format!("{id} Name"), strings.name.clone());
        table.insert(format!("{id} ShortName"), strings.shortname.clone());
        table.insert(format!("{id} Description"), strings.description.clone());
    }
    locales.len()
}

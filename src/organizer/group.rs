use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use log::{info, warn};
use crate::error::Result;
use crate::font::parse_font_path;
use crate::models::{FontEntry, FontFamily};

/// Parse every discovered path, keeping discovery order
pub fn parse_fonts(paths: &[PathBuf]) -> Result<Vec<(String, FontEntry)>> {
    paths.iter().map(|path| parse_font_path(path)).collect()
}

/// Group parsed fonts by family name.
///
/// Within a family, fonts enter in the order given and are then stable-sorted
/// by weight, so identical input order always yields identical families.
pub fn aggregate(entries: Vec<(String, FontEntry)>) -> BTreeMap<String, FontFamily> {
    let mut groups: BTreeMap<String, Vec<FontEntry>> = BTreeMap::new();
    for (family_name, entry) in entries {
        groups.entry(family_name).or_default().push(entry);
    }

    let families: BTreeMap<String, FontFamily> = groups
        .into_iter()
        .filter_map(|(name, fonts)| {
            report_duplicate_data_sets(&name, &fonts);
            FontFamily::new(name.clone(), fonts).map(|family| (name, family))
        })
        .collect();

    info!("Grouped fonts into {} families", families.len());
    families
}

// Duplicates are kept; the later copy overwrites the earlier one on disk.
fn report_duplicate_data_sets(family_name: &str, fonts: &[FontEntry]) {
    let mut seen = HashSet::new();
    for font in fonts {
        if !seen.insert(font.data_set_id.as_str()) {
            warn!(
                "Family {} has more than one font named {} ({})",
                family_name,
                font.data_set_id,
                font.source_path.display()
            );
        }
    }
}

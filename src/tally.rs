//! Runtime helper: counts how many rolls each sub stat received on a relic,
//! plus the builder for the affix lookup table it reads.

use crate::error::RatingResult;
use crate::loader::decode_source;
use crate::util::write_canonical_json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub const RELIQUARY_AFFIX: &str = "ReliquaryAffixExcelConfigData.json";

/// Affix id (decimal string) to stat name.
pub type AffixLookup = BTreeMap<String, String>;

/// One rolled-affix row of the upstream affix config. Newer dumps carry
/// obfuscated keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixConfig {
    #[serde(alias = "ELKKIAIGOBK")]
    pub id: u32,
    #[serde(rename = "propType", alias = "JJNPGPFNJHP")]
    pub prop_type: String,
}

pub fn load_affix_configs<P: AsRef<Path>>(path: P) -> RatingResult<Vec<AffixConfig>> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| RELIQUARY_AFFIX.to_string());
    decode_source(&name, BufReader::new(File::open(path)?))
}

/// Id to stat name; a later row for the same id replaces the earlier one.
pub fn build_lookup(configs: &[AffixConfig]) -> AffixLookup {
    let lookup: AffixLookup = configs
        .iter()
        .map(|c| (c.id.to_string(), c.prop_type.clone()))
        .collect();
    info!(
        "🔢 Built affix lookup: {} ids from {} rows",
        lookup.len(),
        configs.len()
    );
    lookup
}

/// Writes the lookup as sorted, pretty JSON.
pub fn write_lookup<P: AsRef<Path>>(lookup: &AffixLookup, path: P) -> RatingResult<()> {
    write_canonical_json(lookup, path)
}

pub fn load_lookup<P: AsRef<Path>>(path: P) -> RatingResult<AffixLookup> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Tallies rolled affix ids per stat name.
///
/// An id missing from `lookup` means the lookup table is older than the game
/// data. The partial tally is discarded, `on_stale` runs once and the result
/// is empty.
pub fn count_affixes(
    affix_ids: &[u32],
    lookup: &AffixLookup,
    on_stale: Option<&mut dyn FnMut()>,
) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for id in affix_ids {
        let Some(name) = lookup.get(&id.to_string()) else {
            warn!("affix id {} not found in lookup table", id);
            if let Some(hook) = on_stale {
                hook();
            }
            return BTreeMap::new();
        };
        *counts.entry(name.clone()).or_insert(0) += 1;
    }
    counts
}

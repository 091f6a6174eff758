use crate::error::{RatingError, RatingResult};
use crate::records::{AvatarConfig, MainAffixValue, RecordSet, RelicRecommend, SubAffixValue};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub const AVATAR_CONFIG: &str = "AvatarConfig.json";
pub const AVATAR_CONFIG_LD: &str = "AvatarConfigLD.json";
pub const RELIC_RECOMMEND: &str = "AvatarRelicRecommend.json";
pub const RELIC_RECOMMEND_LD: &str = "AvatarRelicRecommendLD.json";
pub const MAIN_AFFIX_VALUE: &str = "RelicMainAffixAvatarValue.json";
pub const SUB_AFFIX_VALUE: &str = "RelicSubAffixAvatarValue.json";

/// Decodes one source file's record array. `name` only labels errors.
pub fn decode_source<T: DeserializeOwned, R: Read>(name: &str, reader: R) -> RatingResult<Vec<T>> {
    serde_json::from_reader(reader).map_err(|source| RatingError::Decode {
        name: name.to_string(),
        source,
    })
}

fn read_source<T: DeserializeOwned>(dir: &Path, name: &str) -> RatingResult<Vec<T>> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(RatingError::MissingSource(path));
    }
    let records = decode_source(name, BufReader::new(File::open(&path)?))?;
    debug!("   Loaded {} records from {}", records.len(), name);
    Ok(records)
}

fn read_optional_source<T: DeserializeOwned>(dir: &Path, name: &str) -> RatingResult<Vec<T>> {
    if !dir.join(name).is_file() {
        info!("   {} not present, skipping", name);
        return Ok(Vec::new());
    }
    read_source(dir, name)
}

/// A required source followed by its optional supplement.
fn read_with_supplement<T: DeserializeOwned>(
    dir: &Path,
    primary: &str,
    supplement: &str,
) -> RatingResult<Vec<T>> {
    let mut records = read_source(dir, primary)?;
    records.extend(read_optional_source(dir, supplement)?);
    Ok(records)
}

/// Reads all four record sets from `dir` concurrently.
///
/// Every read finishes before the first error, if any, is returned.
pub fn load_record_set<P: AsRef<Path>>(dir: P) -> RatingResult<RecordSet> {
    let dir = dir.as_ref();
    info!("📂 Loading design data from {:?}", dir);

    let ((roster, recommendations), (main_values, sub_values)) = rayon::join(
        || {
            rayon::join(
                || read_with_supplement::<AvatarConfig>(dir, AVATAR_CONFIG, AVATAR_CONFIG_LD),
                || read_with_supplement::<RelicRecommend>(dir, RELIC_RECOMMEND, RELIC_RECOMMEND_LD),
            )
        },
        || {
            rayon::join(
                || read_source::<MainAffixValue>(dir, MAIN_AFFIX_VALUE),
                || read_source::<SubAffixValue>(dir, SUB_AFFIX_VALUE),
            )
        },
    );

    let records = RecordSet {
        roster: roster?,
        recommendations: recommendations?,
        main_values: main_values?,
        sub_values: sub_values?,
    };

    info!(
        "   -> {} characters, {} recommendations, {} main / {} sub value rows",
        records.roster.len(),
        records.recommendations.len(),
        records.main_values.len(),
        records.sub_values.len()
    );

    Ok(records)
}

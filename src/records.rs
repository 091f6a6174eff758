//! Decoded upstream design records.
//!
//! Field names follow the upstream files (PascalCase, a few all-caps
//! acronyms). Unknown fields are ignored so newer dumps keep decoding.

use crate::stats::{BaseType, DamageType, Property, RelicType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type AvatarId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    #[serde(rename = "AvatarID")]
    pub avatar_id: AvatarId,
    #[serde(rename = "DamageType")]
    pub damage_type: DamageType,
    #[serde(rename = "AvatarBaseType")]
    pub base_type: BaseType,
    #[serde(rename = "AvatarVOTag")]
    pub vo_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProperty {
    #[serde(rename = "RelicType")]
    pub relic_type: RelicType,
    #[serde(rename = "PropertyType")]
    pub property_type: Property,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicRecommend {
    #[serde(rename = "AvatarID")]
    pub avatar_id: AvatarId,
    #[serde(rename = "PropertyList")]
    pub property_list: Vec<RecommendedProperty>,
}

/// Per-character desirability of each main stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MainAffixValue {
    #[serde(rename = "AvatarID")]
    pub avatar_id: AvatarId,
    #[serde(rename = "HP")]
    pub hp: f64,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defence: Option<f64>,
    pub speed: f64,
    #[serde(default)]
    pub critical_chance: Option<f64>,
    #[serde(default)]
    pub critical_damage: Option<f64>,
    #[serde(default)]
    pub status_probability: Option<f64>,
    #[serde(default)]
    pub break_damage: Option<f64>,
    #[serde(default)]
    pub damage_added_ratio: Option<f64>,
    #[serde(default, rename = "SPRatio")]
    pub sp_ratio: Option<f64>,
    #[serde(default)]
    pub heal_ratio: Option<f64>,
}

/// Per-character desirability of each sub stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubAffixValue {
    #[serde(rename = "AvatarID")]
    pub avatar_id: AvatarId,
    #[serde(rename = "HP")]
    pub hp: f64,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defence: Option<f64>,
    pub speed: f64,
    #[serde(default)]
    pub critical_chance: Option<f64>,
    #[serde(default)]
    pub critical_damage: Option<f64>,
    #[serde(default)]
    pub status_probability: Option<f64>,
    pub status_resistance: f64,
    #[serde(default)]
    pub break_damage: Option<f64>,
}

/// The four upstream record sets, fully loaded.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub roster: Vec<AvatarConfig>,
    pub recommendations: Vec<RelicRecommend>,
    pub main_values: Vec<MainAffixValue>,
    pub sub_values: Vec<SubAffixValue>,
}

/// Borrowed per-character view over a [`RecordSet`].
pub struct CharacterRecords<'a> {
    pub config: &'a AvatarConfig,
    pub recommend: Option<&'a RelicRecommend>,
    pub main_value: Option<&'a MainAffixValue>,
    pub sub_value: Option<&'a SubAffixValue>,
}

impl RecordSet {
    /// Roster sorted and deduplicated by id, each character paired with its
    /// first matching record from every optional set.
    pub fn characters(&self) -> Vec<CharacterRecords<'_>> {
        let recommend = first_by_id(&self.recommendations, |r| r.avatar_id);
        let main = first_by_id(&self.main_values, |r| r.avatar_id);
        let sub = first_by_id(&self.sub_values, |r| r.avatar_id);

        let mut roster: Vec<&AvatarConfig> = self.roster.iter().collect();
        roster.sort_by_key(|c| c.avatar_id);
        roster.dedup_by_key(|c| c.avatar_id);

        roster
            .into_iter()
            .map(|config| CharacterRecords {
                config,
                recommend: recommend.get(&config.avatar_id).copied(),
                main_value: main.get(&config.avatar_id).copied(),
                sub_value: sub.get(&config.avatar_id).copied(),
            })
            .collect()
    }
}

fn first_by_id<T>(records: &[T], id: impl Fn(&T) -> AvatarId) -> HashMap<AvatarId, &T> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        map.entry(id(record)).or_insert(record);
    }
    map
}

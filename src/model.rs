use crate::error::RatingResult;
use crate::records::AvatarId;
use crate::stats::{Property, RelicType};
use crate::util::{to_canonical_json, write_canonical_json};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;

/// Main-stat weights of one slot, kept in candidate order.
///
/// Order matters: when two stats tie for the highest weight, the earlier one
/// is the slot's ideal stat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotWeights {
    entries: Vec<(Property, f64)>,
}

impl SlotWeights {
    pub fn fixed(property: Property) -> Self {
        Self {
            entries: vec![(property, 1.0)],
        }
    }

    pub fn entries(&self) -> &[(Property, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, w)| *w)
    }

    /// Overwrites an existing entry in place, or appends a new one.
    pub fn set(&mut self, property: Property, weight: f64) {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((property, weight)),
        }
    }

    pub fn has_ideal(&self) -> bool {
        self.entries.iter().any(|(_, w)| *w == 1.0)
    }

    /// The highest-weighted stat, earliest on ties.
    pub fn ideal(&self) -> Option<Property> {
        let mut best: Option<(Property, f64)> = None;
        for &(p, w) in &self.entries {
            match best {
                Some((_, bw)) if w <= bw => {}
                _ => best = Some((p, w)),
            }
        }
        best.map(|(p, _)| p)
    }

    /// Raises the highest entry to 1.0 unless some entry already holds 1.0.
    pub fn promote_highest(&mut self) {
        if self.has_ideal() {
            return;
        }
        if let Some(ideal) = self.ideal() {
            self.set(ideal, 1.0);
        }
    }
}

impl Serialize for SlotWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (p, w) in &self.entries {
            map.serialize_entry(p, w)?;
        }
        map.end()
    }
}

struct SlotWeightsVisitor;

impl<'de> Visitor<'de> for SlotWeightsVisitor {
    type Value = SlotWeights;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of stat name to weight")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SlotWeights, A::Error> {
        let mut weights = SlotWeights::default();
        while let Some((property, weight)) = access.next_entry::<Property, f64>()? {
            weights.set(property, weight);
        }
        Ok(weights)
    }
}

/// Entries keep the order they are read in. Emitted files list them
/// alphabetically, so ties in a loaded slot resolve by stat name.
impl<'de> Deserialize<'de> for SlotWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SlotWeightsVisitor)
    }
}

/// Relative value of every sub stat for one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubWeights {
    #[serde(rename = "HPDelta")]
    pub hp_delta: f64,
    #[serde(rename = "AttackDelta")]
    pub attack_delta: f64,
    #[serde(rename = "DefenceDelta")]
    pub defence_delta: f64,
    #[serde(rename = "HPAddedRatio")]
    pub hp_added_ratio: f64,
    #[serde(rename = "AttackAddedRatio")]
    pub attack_added_ratio: f64,
    #[serde(rename = "DefenceAddedRatio")]
    pub defence_added_ratio: f64,
    #[serde(rename = "SpeedDelta")]
    pub speed_delta: f64,
    #[serde(rename = "CriticalChanceBase")]
    pub critical_chance_base: f64,
    #[serde(rename = "CriticalDamageBase")]
    pub critical_damage_base: f64,
    #[serde(rename = "StatusProbabilityBase")]
    pub status_probability_base: f64,
    #[serde(rename = "StatusResistanceBase")]
    pub status_resistance_base: f64,
    #[serde(rename = "BreakDamageAddedRatioBase")]
    pub break_damage_added_ratio_base: f64,
}

impl SubWeights {
    /// `(stat, weight)` pairs in [`Property::SUB_AFFIXES`] order.
    pub fn entries(&self) -> [(Property, f64); 12] {
        [
            (Property::HpDelta, self.hp_delta),
            (Property::AttackDelta, self.attack_delta),
            (Property::DefenceDelta, self.defence_delta),
            (Property::HpAddedRatio, self.hp_added_ratio),
            (Property::AttackAddedRatio, self.attack_added_ratio),
            (Property::DefenceAddedRatio, self.defence_added_ratio),
            (Property::SpeedDelta, self.speed_delta),
            (Property::CriticalChanceBase, self.critical_chance_base),
            (Property::CriticalDamageBase, self.critical_damage_base),
            (Property::StatusProbabilityBase, self.status_probability_base),
            (Property::StatusResistanceBase, self.status_resistance_base),
            (
                Property::BreakDamageAddedRatioBase,
                self.break_damage_added_ratio_base,
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreModel {
    pub main: BTreeMap<String, SlotWeights>,
    pub weight: SubWeights,
    pub max: f64,
}

impl Default for ScoreModel {
    fn default() -> Self {
        let main = RelicType::iter()
            .map(|slot| {
                let weights = slot.fixed_main().map(SlotWeights::fixed).unwrap_or_default();
                (slot.key(), weights)
            })
            .collect();
        Self {
            main,
            weight: SubWeights::default(),
            max: 0.0,
        }
    }
}

impl ScoreModel {
    pub fn slot(&self, slot: RelicType) -> Option<&SlotWeights> {
        self.main.get(&slot.key())
    }
}

/// Score models of every character, keyed by the decimal character id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreDb {
    pub models: BTreeMap<String, ScoreModel>,
}

impl ScoreDb {
    pub fn get(&self, id: AvatarId) -> Option<&ScoreModel> {
        self.models.get(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Pretty JSON with every object's keys sorted and integral numbers
    /// written without a fractional part.
    pub fn to_canonical_json(&self) -> RatingResult<String> {
        to_canonical_json(self)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> RatingResult<()> {
        write_canonical_json(self, path)
    }

    pub fn from_reader<R: Read>(reader: R) -> RatingResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RatingResult<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

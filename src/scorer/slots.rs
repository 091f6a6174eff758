//! Main-stat preferences for the four variable relic slots.

use crate::model::SlotWeights;
use crate::records::{MainAffixValue, RelicRecommend};
use crate::stats::{DamageType, Property, RelicType};
use crate::util::round_decimal;
use std::collections::BTreeMap;
use tracing::debug;

pub type MainTable = BTreeMap<String, SlotWeights>;

/// Attack weight granted per unit of elemental damage preference on the neck.
const DAMAGE_TO_ATTACK: f64 = 0.8;
/// Both neck preferences must exceed this before the attack correction runs.
const CORRECTION_THRESHOLD: f64 = 0.1;

fn slot_mut(main: &mut MainTable, slot: RelicType) -> &mut SlotWeights {
    main.entry(slot.key()).or_default()
}

/// Marks every recommended stat as ideal (1.0) in its slot.
///
/// Head and hand mains are fixed and never touched. A slot keeps the first
/// recommended ideal; later ones for the same slot are skipped.
pub fn apply_recommendations(main: &mut MainTable, recommend: &RelicRecommend) {
    for rec in &recommend.property_list {
        if rec.relic_type.fixed_main().is_some() {
            debug!(
                avatar = recommend.avatar_id,
                "ignoring {} recommendation for fixed slot {}", rec.property_type, rec.relic_type
            );
            continue;
        }

        let weights = slot_mut(main, rec.relic_type);
        if weights.has_ideal() && weights.get(rec.property_type) != Some(1.0) {
            debug!(
                avatar = recommend.avatar_id,
                "slot {} already has an ideal stat, skipping {}", rec.relic_type, rec.property_type
            );
            continue;
        }
        weights.set(rec.property_type, 1.0);
    }
}

/// Candidate main stats of a variable slot with their continuous values, in
/// tie-break order. Fixed slots have no candidates.
pub fn candidates(
    slot: RelicType,
    value: &MainAffixValue,
    damage_type: DamageType,
) -> Vec<(Property, f64)> {
    let hp = (Property::HpAddedRatio, value.hp);
    let attack = (Property::AttackAddedRatio, value.attack.unwrap_or(0.0));
    let defence = (Property::DefenceAddedRatio, value.defence.unwrap_or(0.0));

    match slot {
        RelicType::Head | RelicType::Hand => Vec::new(),
        RelicType::Body => vec![
            hp,
            attack,
            defence,
            (
                Property::CriticalChanceBase,
                value.critical_chance.unwrap_or(0.0),
            ),
            (
                Property::CriticalDamageBase,
                value.critical_damage.unwrap_or(0.0),
            ),
            (Property::HealRatioBase, value.heal_ratio.unwrap_or(0.0)),
            (
                Property::StatusProbabilityBase,
                value.status_probability.unwrap_or(0.0),
            ),
        ],
        RelicType::Foot => vec![hp, attack, defence, (Property::SpeedDelta, value.speed)],
        RelicType::Neck => vec![
            hp,
            attack,
            defence,
            (
                damage_type.added_ratio(),
                value.damage_added_ratio.unwrap_or(0.0),
            ),
        ],
        RelicType::Object => vec![
            (
                Property::BreakDamageAddedRatioBase,
                value.break_damage.unwrap_or(0.0),
            ),
            (Property::SpRatioBase, value.sp_ratio.unwrap_or(0.0)),
            hp,
            attack,
            defence,
        ],
    }
}

/// Rebuilds every variable slot from the continuous value table.
///
/// Candidates come first, in their fixed order, and overwrite recommended
/// values for the same stat. Recommended stats that are not candidates are
/// kept after them.
pub fn fill_from_values(main: &mut MainTable, value: &MainAffixValue, damage_type: DamageType) {
    for slot in RelicType::VARIABLE {
        let previous = main.remove(&slot.key()).unwrap_or_default();
        let mut filled = SlotWeights::default();
        for (property, weight) in candidates(slot, value, damage_type) {
            filled.set(property, weight);
        }
        for &(property, weight) in previous.entries() {
            if filled.get(property).is_none() {
                filled.set(property, weight);
            }
        }
        main.insert(slot.key(), filled);
    }
}

/// Promotes the highest stat of each variable slot to 1.0 when no stat
/// reached it.
pub fn promote_ideals(main: &mut MainTable) {
    for slot in RelicType::VARIABLE {
        if let Some(weights) = main.get_mut(&slot.key()) {
            weights.promote_highest();
        }
    }
}

/// Neck attack weight implied by an elemental damage preference.
pub fn corrected_attack(damage_ratio: f64, attack_ratio: f64) -> f64 {
    round_decimal(damage_ratio * DAMAGE_TO_ATTACK, 1)
        .min(1.0)
        .max(attack_ratio)
}

/// Lifts the neck's attack weight for characters that lean on elemental
/// damage bonuses more than the raw attack value shows.
pub fn correct_neck_attack(main: &mut MainTable, value: &MainAffixValue) {
    let (Some(damage), Some(attack)) = (value.damage_added_ratio, value.attack) else {
        return;
    };
    if damage > CORRECTION_THRESHOLD && attack > CORRECTION_THRESHOLD {
        slot_mut(main, RelicType::Neck)
            .set(Property::AttackAddedRatio, corrected_attack(damage, attack));
    }
}

/// Runs all four stages for one character on top of `main`.
pub fn build_slot_preferences(
    main: &mut MainTable,
    recommend: Option<&RelicRecommend>,
    value: Option<&MainAffixValue>,
    damage_type: DamageType,
) {
    if let Some(recommend) = recommend {
        apply_recommendations(main, recommend);
    }
    if let Some(value) = value {
        fill_from_values(main, value, damage_type);
    }
    promote_ideals(main);
    if let Some(value) = value {
        correct_neck_attack(main, value);
    }
}

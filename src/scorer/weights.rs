use crate::model::SubWeights;
use crate::records::SubAffixValue;
use crate::util::round_decimal;

/// Raw flat-stat preferences at or below this are treated as noise.
pub const FLAT_THRESHOLD: f64 = 0.1;
/// A flat roll is worth roughly a third of a percentage roll.
pub const FLAT_DIVISOR: f64 = 3.0;

pub fn flat_weight(raw: f64) -> f64 {
    if raw > FLAT_THRESHOLD {
        round_decimal(raw / FLAT_DIVISOR, 1)
    } else {
        0.0
    }
}

pub fn build_sub_weights(value: &SubAffixValue) -> SubWeights {
    SubWeights {
        hp_delta: flat_weight(value.hp),
        attack_delta: value.attack.map(flat_weight).unwrap_or(0.0),
        defence_delta: value.defence.map(flat_weight).unwrap_or(0.0),
        hp_added_ratio: value.hp,
        attack_added_ratio: value.attack.unwrap_or(0.0),
        defence_added_ratio: value.defence.unwrap_or(0.0),
        speed_delta: value.speed,
        critical_chance_base: value.critical_chance.unwrap_or(0.0),
        critical_damage_base: value.critical_damage.unwrap_or(0.0),
        status_probability_base: value.status_probability.unwrap_or(0.0),
        status_resistance_base: value.status_resistance,
        break_damage_added_ratio_base: value.break_damage.unwrap_or(0.0),
    }
}

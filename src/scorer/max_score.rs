//! Best achievable score for a character.
//!
//! A relic carries four sub stats. The leading one is assumed to take every
//! upgrade (6 rolls), the other three one roll each. Each variable slot is
//! scored without its ideal main stat among the subs; the unrestricted best
//! relic is then counted twice more and the sum averaged over six slots.

use crate::model::SubWeights;
use crate::stats::{Property, RelicType};
use crate::util::{literal_len, round_decimal};

use super::slots::MainTable;

const ROLL_QUALITY: f64 = 1.2;
const LEAD_ROLLS: f64 = 6.0;
const UNRESTRICTED_SLOTS: f64 = 2.0;
const SLOT_COUNT: f64 = 6.0;
const SUBS_PER_RELIC: usize = 4;
const MAX_LITERAL_LEN: usize = 6;

/// Sub stats by descending weight; equal weights keep canonical order.
pub fn rank(weights: &SubWeights) -> Vec<(Property, f64)> {
    let mut ranked = weights.entries().to_vec();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Score of one relic holding the first four `ranked` sub stats, or `None`
/// when fewer than four are available.
pub fn relic_score(ranked: &[(Property, f64)]) -> Option<f64> {
    if ranked.len() < SUBS_PER_RELIC {
        return None;
    }
    Some(ROLL_QUALITY * (ranked[0].1 * LEAD_ROLLS + ranked[1].1 + ranked[2].1 + ranked[3].1))
}

/// Best relic for a variable slot; its main stat cannot repeat as a sub.
fn slot_score(main: &MainTable, slot: RelicType, ranked: &[(Property, f64)]) -> f64 {
    let Some(ideal) = main.get(&slot.key()).and_then(|w| w.ideal()) else {
        return 0.0;
    };
    let available: Vec<(Property, f64)> = ranked
        .iter()
        .filter(|(p, _)| *p != ideal)
        .take(SUBS_PER_RELIC)
        .copied()
        .collect();
    relic_score(&available).unwrap_or(0.0)
}

pub fn max_score(main: &MainTable, weights: &SubWeights) -> f64 {
    let ranked = rank(weights);

    let mut total = 0.0;
    for slot in RelicType::VARIABLE {
        total += slot_score(main, slot, &ranked);
    }

    if let Some(best) = relic_score(&ranked) {
        total += UNRESTRICTED_SLOTS * best;
    }

    stabilize(total / SLOT_COUNT)
}

/// Long literals are cut to three decimals so the emitted value is stable.
pub fn stabilize(score: f64) -> f64 {
    if literal_len(score) > MAX_LITERAL_LEN {
        round_decimal(score, 3)
    } else {
        score
    }
}

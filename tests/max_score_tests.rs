use relic_rating::model::{ScoreModel, SlotWeights, SubWeights};
use relic_rating::scorer::max_score::{max_score, rank, relic_score, stabilize};
use relic_rating::scorer::slots::MainTable;
use relic_rating::stats::{Property, RelicType};

fn crit_speed_weights() -> SubWeights {
    SubWeights {
        critical_chance_base: 1.0,
        critical_damage_base: 1.0,
        attack_added_ratio: 0.75,
        speed_delta: 0.75,
        ..Default::default()
    }
}

fn main_with_ideals(ideals: [(RelicType, Property); 4]) -> MainTable {
    let mut main = ScoreModel::default().main;
    for (slot, property) in ideals {
        main.insert(slot.key(), SlotWeights::fixed(property));
    }
    main
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_rank_is_descending_and_stable() {
    let ranked = rank(&crit_speed_weights());
    let names: Vec<Property> = ranked.iter().take(5).map(|(p, _)| *p).collect();
    assert_eq!(
        names,
        vec![
            Property::CriticalChanceBase,
            Property::CriticalDamageBase,
            Property::AttackAddedRatio,
            Property::SpeedDelta,
            Property::HpDelta,
        ]
    );
    assert_eq!(ranked.len(), 12);
}

#[test]
fn test_relic_score_formula() {
    let ranked = rank(&crit_speed_weights());
    // 1.2 * (1 * 6 + 1 + 0.75 + 0.75)
    assert_close(relic_score(&ranked).unwrap(), 10.2);
}

#[test]
fn test_relic_score_needs_four_subs() {
    let ranked = rank(&crit_speed_weights());
    assert_eq!(relic_score(&ranked[..3]), None);
}

#[test]
fn test_max_score_excludes_each_slot_main() {
    let main = main_with_ideals([
        (RelicType::Body, Property::CriticalChanceBase),
        (RelicType::Foot, Property::SpeedDelta),
        (RelicType::Neck, Property::FireAddedRatio),
        (RelicType::Object, Property::AttackAddedRatio),
    ]);
    // body 9.0 + feet 9.3 + neck 10.2 + rope 9.3 + 2 * 10.2 = 58.2
    assert_close(max_score(&main, &crit_speed_weights()), 9.7);
}

#[test]
fn test_empty_slots_contribute_nothing() {
    let main = ScoreModel::default().main;
    assert_close(max_score(&main, &crit_speed_weights()), 3.4);
}

#[test]
fn test_zero_weights_give_zero() {
    let main = main_with_ideals([
        (RelicType::Body, Property::HpAddedRatio),
        (RelicType::Foot, Property::HpAddedRatio),
        (RelicType::Neck, Property::HpAddedRatio),
        (RelicType::Object, Property::HpAddedRatio),
    ]);
    assert_eq!(max_score(&main, &SubWeights::default()), 0.0);
}

#[test]
fn test_ideal_is_highest_entry_when_no_exact_one() {
    let mut main = ScoreModel::default().main;
    let mut neck = SlotWeights::default();
    neck.set(Property::HpAddedRatio, 0.2);
    neck.set(Property::AttackAddedRatio, 0.75);
    neck.set(Property::FireAddedRatio, 0.5);
    main.insert(RelicType::Neck.key(), neck);

    // Only the neck counts: attack is excluded there, then the doubled
    // global term.  neck 1.2 * (6 + 1 + 0.75 + 0) = 9.3
    let expected = (9.3 + 2.0 * 10.2) / 6.0;
    assert_close(max_score(&main, &crit_speed_weights()), expected);
}

#[test]
fn test_stabilize_rounds_long_literals() {
    assert_eq!(stabilize(1.23456789), 1.235);
    assert_eq!(stabilize(0.1 + 0.2), 0.3);
    assert_eq!(stabilize(12.5), 12.5);
    assert_eq!(stabilize(0.0), 0.0);
    // "9.7125" is exactly six characters and stays as is.
    assert_eq!(stabilize(9.7125), 9.7125);
    // Exact halves round up.
    assert_eq!(stabilize(10.0625), 10.063);
}

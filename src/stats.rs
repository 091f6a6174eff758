use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Every stat name that can appear in a score model, spelled the way the
/// game data spells it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum Property {
    #[serde(rename = "HPDelta")]
    #[strum(serialize = "HPDelta")]
    HpDelta,
    AttackDelta,
    DefenceDelta,
    #[serde(rename = "HPAddedRatio")]
    #[strum(serialize = "HPAddedRatio")]
    HpAddedRatio,
    AttackAddedRatio,
    DefenceAddedRatio,
    SpeedDelta,
    CriticalChanceBase,
    CriticalDamageBase,
    StatusProbabilityBase,
    StatusResistanceBase,
    BreakDamageAddedRatioBase,
    HealRatioBase,
    #[serde(rename = "SPRatioBase")]
    #[strum(serialize = "SPRatioBase")]
    SpRatioBase,
    PhysicalAddedRatio,
    FireAddedRatio,
    IceAddedRatio,
    ThunderAddedRatio,
    WindAddedRatio,
    QuantumAddedRatio,
    ImaginaryAddedRatio,
}

impl Property {
    /// Sub-stat enumeration order. Ranking ties resolve to the earlier entry.
    pub const SUB_AFFIXES: [Property; 12] = [
        Property::HpDelta,
        Property::AttackDelta,
        Property::DefenceDelta,
        Property::HpAddedRatio,
        Property::AttackAddedRatio,
        Property::DefenceAddedRatio,
        Property::SpeedDelta,
        Property::CriticalChanceBase,
        Property::CriticalDamageBase,
        Property::StatusProbabilityBase,
        Property::StatusResistanceBase,
        Property::BreakDamageAddedRatioBase,
    ];
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum DamageType {
    Fire,
    Ice,
    Imaginary,
    Physical,
    Quantum,
    Thunder,
    Wind,
}

impl DamageType {
    /// The neck-slot damage bonus that boosts this element.
    pub fn added_ratio(self) -> Property {
        match self {
            Self::Fire => Property::FireAddedRatio,
            Self::Ice => Property::IceAddedRatio,
            Self::Imaginary => Property::ImaginaryAddedRatio,
            Self::Physical => Property::PhysicalAddedRatio,
            Self::Quantum => Property::QuantumAddedRatio,
            Self::Thunder => Property::ThunderAddedRatio,
            Self::Wind => Property::WindAddedRatio,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum BaseType {
    Knight,
    Mage,
    Memory,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RelicType {
    Head,
    Hand,
    Body,
    Foot,
    Neck,
    Object,
}

impl RelicType {
    /// Slots whose main stat is chosen from several candidates.
    pub const VARIABLE: [RelicType; 4] = [
        RelicType::Body,
        RelicType::Foot,
        RelicType::Neck,
        RelicType::Object,
    ];

    pub fn slot_id(self) -> u8 {
        match self {
            Self::Head => 1,
            Self::Hand => 2,
            Self::Body => 3,
            Self::Foot => 4,
            Self::Neck => 5,
            Self::Object => 6,
        }
    }

    /// Key used for this slot in the emitted `main` table.
    pub fn key(self) -> String {
        self.slot_id().to_string()
    }

    /// The only legal main stat of the head and hand slots.
    pub fn fixed_main(self) -> Option<Property> {
        match self {
            Self::Head => Some(Property::HpDelta),
            Self::Hand => Some(Property::AttackDelta),
            _ => None,
        }
    }
}

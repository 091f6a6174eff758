pub mod max_score;
pub mod slots;
pub mod weights;

use crate::model::{ScoreDb, ScoreModel};
use crate::records::{CharacterRecords, MainAffixValue, RecordSet, RelicRecommend, SubAffixValue};
use crate::stats::DamageType;
use rayon::prelude::*;
use tracing::{debug, info};

/// Threads one character's score model through the build stages.
///
/// Slot preferences and sub weights are independent; the max score reads
/// both and is computed by [`ModelBuilder::finish`].
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    model: ScoreModel,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_preferences(
        mut self,
        damage_type: DamageType,
        recommend: Option<&RelicRecommend>,
        value: Option<&MainAffixValue>,
    ) -> Self {
        slots::build_slot_preferences(&mut self.model.main, recommend, value, damage_type);
        self
    }

    pub fn with_sub_weights(mut self, value: Option<&SubAffixValue>) -> Self {
        if let Some(value) = value {
            self.model.weight = weights::build_sub_weights(value);
        }
        self
    }

    pub fn finish(mut self) -> ScoreModel {
        self.model.max = max_score::max_score(&self.model.main, &self.model.weight);
        self.model
    }
}

pub fn score_character(records: &CharacterRecords<'_>) -> ScoreModel {
    debug!(avatar = records.config.avatar_id, "Processing");
    ModelBuilder::new()
        .with_sub_weights(records.sub_value)
        .with_slot_preferences(
            records.config.damage_type,
            records.recommend,
            records.main_value,
        )
        .finish()
}

/// Builds the score model of every character on the roster.
pub fn generate(records: &RecordSet) -> ScoreDb {
    let characters = records.characters();
    info!("⚙️  Scoring {} characters...", characters.len());

    let models = characters
        .par_iter()
        .map(|c| (c.config.avatar_id.to_string(), score_character(c)))
        .collect();

    ScoreDb { models }
}

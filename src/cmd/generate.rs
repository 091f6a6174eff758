use crate::reports;
use clap::Args;
use relic_rating::config::SourceConfig;
use relic_rating::error::RatingResult;
use relic_rating::loader::load_record_set;
use relic_rating::scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: SourceConfig,

    /// Print a per-character summary table after writing the model
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: GenerateArgs) -> RatingResult<()> {
    let records = load_record_set(&args.config.input_dir)?;
    let db = scorer::generate(&records);

    db.write_to_file(&args.config.output)?;
    info!(
        "✅ Wrote {} score models to {:?}",
        db.len(),
        args.config.output
    );

    if args.summary {
        reports::print_model_summary(&db);
    }
    Ok(())
}

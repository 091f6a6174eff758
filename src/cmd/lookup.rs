use clap::Args;
use relic_rating::error::RatingResult;
use relic_rating::tally::{build_lookup, load_affix_configs, write_lookup};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Upstream relic affix config (JSON array of affix rows)
    #[arg(
        short,
        long,
        default_value = "data/ExcelBinOutput/ReliquaryAffixExcelConfigData.json"
    )]
    pub input: PathBuf,

    /// Where the affix id to stat name table is written
    #[arg(short, long, default_value = "data/CountDB4GI.json")]
    pub output: PathBuf,
}

pub fn run(args: LookupArgs) -> RatingResult<()> {
    let configs = load_affix_configs(&args.input)?;
    let lookup = build_lookup(&configs);
    write_lookup(&lookup, &args.output)?;
    info!("✅ Wrote {} affix ids to {:?}", lookup.len(), args.output);
    Ok(())
}

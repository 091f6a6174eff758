use crate::reports;
use clap::Args;
use relic_rating::error::RatingResult;
use relic_rating::tally::{count_affixes, load_lookup};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct TallyArgs {
    /// JSON object mapping affix id to stat name
    #[arg(short, long)]
    pub lookup: PathBuf,

    /// Print a table instead of JSON
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Rolled affix ids of one relic
    #[arg(required = true)]
    pub ids: Vec<u32>,
}

pub fn run(args: TallyArgs) -> RatingResult<()> {
    let lookup = load_lookup(&args.lookup)?;

    let mut stale = false;
    let mut on_stale = || stale = true;
    let counts = count_affixes(&args.ids, &lookup, Some(&mut on_stale as &mut dyn FnMut()));
    if stale {
        warn!(
            "⚠️  Lookup table {:?} is out of date; tally discarded.",
            args.lookup
        );
    }

    if args.table {
        reports::print_tally(&counts);
    } else {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    }
    Ok(())
}

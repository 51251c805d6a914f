use anyhow::bail;
use vesna::RegressionAnalysis;

use super::{ConfigArg, PairsArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RegressArg {
    #[clap(flatten)]
    pub(super) input: PairsArg,
    #[clap(flatten)]
    pub(super) config: ConfigArg,
    /// Print JSON, including the plot series, instead of tables
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(arg: &RegressArg) -> anyhow::Result<()> {
    let config = arg.config.load()?;
    let Some(data) = arg.input.load()? else {
        bail!("no data: pass --x and --y, or --pairs-file");
    };

    let analysis = RegressionAnalysis::compute(data, &config)?;
    if arg.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!(
            "{}",
            analysis.display_with(config.decimals, config.correlation_decimals)
        );
    }
    Ok(())
}

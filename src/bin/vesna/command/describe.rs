use anyhow::bail;
use vesna::Summary;

use super::{ConfigArg, ValuesArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    pub(super) input: ValuesArg,
    #[clap(flatten)]
    pub(super) config: ConfigArg,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let config = arg.config.load()?;
    let Some(sample) = arg.input.load()? else {
        bail!("no data: pass --values or --file");
    };

    let summary = Summary::compute(&sample, &config)?;
    if arg.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.display_with(config.decimals));
        println!("{}", summary.frequency_table);
    }
    Ok(())
}

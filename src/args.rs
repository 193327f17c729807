use clap::Parser;

pub const USAGE: &str = "Usage: privat_rates <number_of_days>";

/// Prints PrivatBank EUR/USD national bank rates for the last few days as JSON.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// How many days to fetch, counting today.
    // Zero and negative counts are usage errors here rather than an empty `[]` result.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,
}

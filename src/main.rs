use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use args::{Args, USAGE};
use collector::Collector;
use config::Config;
use exchange_rate::render;
use fetcher::{HttpFetcher, RateSource};

mod args;
mod collector;
mod config;
mod error;
mod exchange_rate;
mod fetcher;
mod privat_api;
#[cfg(test)]
mod test_support;

const MAX_DAYS: u32 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let connect = || -> Result<Collector<HttpFetcher>> {
        let config = Config::from_env();
        debug!("{:?}", config);
        Ok(Collector::new(HttpFetcher::new()?, config.api_url))
    };

    run(std::env::args_os(), connect, &mut io::stdout()).await
}

/// Validates the arguments and prints the collected days to `out`.
///
/// `connect` is only called once the day count is accepted, so usage errors
/// and the day cap never touch the network.
async fn run<I, T, S, F, W>(argv: I, connect: F, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: RateSource,
    F: FnOnce() -> Result<Collector<S>>,
    W: Write,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            return Ok(());
        }
        Err(err) => {
            debug!("{}", err);
            writeln!(out, "{}", USAGE)?;
            return Ok(());
        }
    };

    if args.days > MAX_DAYS {
        writeln!(
            out,
            "Error: You can only retrieve data for a maximum of {} days.",
            MAX_DAYS
        )?;
        return Ok(());
    }

    let collector = connect()?;
    let records = collector.collect(args.days).await;

    writeln!(out, "{}", render(&records)?)?;

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();
}

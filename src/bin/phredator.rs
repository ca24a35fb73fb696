use anyhow::Result;
use structopt::StructOpt;

use phredator::cli;
use phredator::cli::Phredator;

pub fn main() -> Result<()> {
    let opt = Phredator::from_args();

    // setup logger
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;

    cli::run(opt)
}

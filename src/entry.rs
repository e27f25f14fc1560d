use clap::Parser;

use crate::args::ProbeArgs;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = ProbeArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(crate::app::run_probe(&args))
}

use datapeek::cli::{Cli, CliParsed};
use datapeek::error_chain;
use datapeek::load::LoaderBuilder;
use datapeek::preview::PreviewBuilder;
use log::{debug, error};
use std::process;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::from_args();
    let parsed = match CliParsed::from_cli(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    debug!("{:#?}", parsed);

    let data = match LoaderBuilder::new()
        .with_delimiter(parsed.delimiter)
        .build()
        .load(&parsed.file)
    {
        Ok(data) => data,
        Err(err) => {
            error!("{}", error_chain(&err));
            err.into_partial()
        }
    };

    let preview = PreviewBuilder::new()
        .with_rows(parsed.rows)
        .with_format(parsed.format)
        .build();

    if let Err(err) = preview.print(&data) {
        error!("{}", error_chain(&err));
        process::exit(1);
    }
}

//! Parsing Options.
//! `--input {file}` or `-i`, reads stdin when omitted

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn make_options_parser() -> Command {
    Command::new("kthseg")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Answers static range k-th smallest queries")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read `n m`, n values and m `l r k` queries from FILE instead of stdin"),
        )
        .arg(
            Arg::new("keep-going")
                .short('k')
                .long("keep-going")
                .action(ArgAction::SetTrue)
                .help("Report failing queries and continue instead of stopping at the first one"),
        )
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub keep_going: bool,
}

impl Options {
    pub fn parse_from_args<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Ok(Options {
            input: matches.get_one::<PathBuf>("input").cloned(),
            keep_going: matches.get_flag("keep-going"),
        })
    }
}

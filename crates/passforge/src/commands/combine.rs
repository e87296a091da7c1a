use crate::{
    helpers::output::{print_candidate, save_output},
    Result,
};
use passforge_password::combine::{combine_randomized, MAX_COMBINE_WORDS};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Maximum number of combinations to print.
    #[clap(long)]
    pub limit: Option<usize>,

    /// Print the MD5, SHA1 and SHA256 digests of each combination.
    #[clap(long)]
    pub hashes: bool,

    /// Append combinations to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Words to combine, for example a name, birthdate and nickname.
    #[clap(required = true, num_args = 1..=MAX_COMBINE_WORDS)]
    pub words: Vec<String>,
}

/// Print every combination of the words in random order.
pub fn run(args: Args) -> Result<()> {
    let mut combos = combine_randomized(&args.words)?;
    if let Some(limit) = args.limit {
        combos.truncate(limit);
    }
    for combo in &combos {
        print_candidate(combo, args.hashes);
    }
    save_output(args.output.as_deref(), &combos)
}

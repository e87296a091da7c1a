use crate::{
    helpers::output::{print_candidate, save_output},
    Result,
};
use passforge_password::mangle::{leet_variants, numeric_suffix};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Maximum number of variants to print.
    #[clap(short, long, default_value_t = 10)]
    pub count: usize,

    /// Append variants to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Base word to mangle.
    pub word: String,
}

/// Print leetspeak variants of a word with a
/// random numeric suffix.
pub fn run(args: Args) -> Result<()> {
    let generated: Vec<String> = leet_variants(&args.word)
        .iter()
        .take(args.count)
        .map(|variant| numeric_suffix(variant))
        .collect();
    for word in &generated {
        print_candidate(word, false);
    }
    save_output(args.output.as_deref(), &generated)
}

use crate::{
    helpers::output::{print_candidate, save_output},
    Result, TARGET,
};
use passforge_password::passphrase::{
    generate_passphrase, read_wordlist, DEFAULT_NUM_WORDS, DEFAULT_WORDS,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Word list file with one word per line.
    #[clap(long, env = "PASSFORGE_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Number of passphrases to generate.
    #[clap(short, long, default_value_t = 10)]
    pub count: usize,

    /// Number of words in each passphrase.
    #[clap(short = 'n', long, default_value_t = DEFAULT_NUM_WORDS)]
    pub words: usize,

    /// Separator placed between words.
    #[clap(long, default_value = " ")]
    pub separator: String,

    /// Append passphrases to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Generate passphrases.
pub fn run(args: Args) -> Result<()> {
    let words: Vec<String> = if let Some(path) = &args.wordlist {
        let words = read_wordlist(path)?;
        tracing::debug!(
            target: TARGET,
            path = %path.display(),
            words = words.len(),
            "wordlist",
        );
        words
    } else {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    };

    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let passphrase =
            generate_passphrase(&words, args.words, &args.separator)?;
        print_candidate(&passphrase, false);
        generated.push(passphrase);
    }
    save_output(args.output.as_deref(), &generated)
}

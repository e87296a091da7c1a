use crate::{
    helpers::output::{print_candidate, save_output},
    Result,
};
use passforge_password::{build_pool, generate_password};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Length of each password.
    #[clap(short, long, default_value_t = 14)]
    pub length: usize,

    /// Number of passwords to generate.
    #[clap(short, long, default_value_t = 10)]
    pub count: usize,

    /// Include symbols in the pool.
    #[clap(short, long)]
    pub symbols: bool,

    /// Append generated passwords to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Generate random letters and digits.
pub fn run(args: Args) -> Result<()> {
    let pool = build_pool(true, true, true, args.symbols);
    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let password = generate_password(args.length, &pool)?;
        print_candidate(&password, false);
        generated.push(password);
    }
    save_output(args.output.as_deref(), &generated)
}

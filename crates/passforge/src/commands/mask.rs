use crate::{
    helpers::{
        messages::info,
        output::{print_candidate, save_output},
    },
    Result,
};
use passforge_password::{
    generate_mask,
    mask::{mask_keyspace, mask_length},
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Number of passwords to generate.
    #[clap(short, long, default_value_t = 10)]
    pub count: usize,

    /// Print the MD5, SHA1 and SHA256 digests of each password.
    #[clap(long)]
    pub hashes: bool,

    /// Print the length and keyspace of the mask.
    #[clap(long)]
    pub keyspace: bool,

    /// Append generated passwords to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Mask pattern, for example ?u?l?l?l?d?d?s.
    pub mask: String,
}

/// Generate passwords from a mask.
pub fn run(args: Args) -> Result<()> {
    if args.keyspace {
        info(format!(
            "length {}, keyspace {}",
            mask_length(&args.mask),
            mask_keyspace(&args.mask)
        ));
    }

    let generated: Vec<String> =
        (0..args.count).map(|_| generate_mask(&args.mask)).collect();
    for password in &generated {
        print_candidate(password, args.hashes);
    }

    save_output(args.output.as_deref(), &generated)
}

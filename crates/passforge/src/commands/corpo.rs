use crate::{
    helpers::{
        copy_to_clipboard,
        messages::{fail, info, warn},
        output::{print_candidate, save_output},
    },
    Error, Result, TARGET,
};
use passforge_password::{
    build_pool, entropy_bits, generate_with_policy,
    generator::DEFAULT_LENGTH, PolicyKind,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Length of each password.
    #[clap(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Number of passwords to generate.
    #[clap(short, long, default_value_t = 1)]
    pub count: usize,

    /// Exclude uppercase letters.
    #[clap(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters.
    #[clap(long)]
    pub no_lower: bool,

    /// Exclude digits.
    #[clap(long)]
    pub no_digits: bool,

    /// Exclude symbols.
    #[clap(long)]
    pub no_symbols: bool,

    /// Policy to enforce: nist, strict or none.
    #[clap(long, default_value_t = PolicyKind::Strict)]
    pub policy: PolicyKind,

    /// Append generated passwords to this file.
    #[clap(long, env = "PASSFORGE_OUTPUT")]
    pub save: Option<PathBuf>,

    /// Copy the last generated password to the clipboard.
    #[clap(long)]
    pub copy: bool,

    /// Log the approximate entropy per password.
    #[clap(short, long)]
    pub verbose: bool,
}

/// Generate policy compliant passwords.
pub fn run(args: Args) -> Result<()> {
    let (pool, generated) = generate(&args)?;

    if args.copy {
        if let Some(last) = generated.last() {
            copy_to_clipboard(last);
        }
    }

    save_output(args.save.as_deref(), &generated)?;

    if args.verbose {
        let bits = entropy_bits(args.length, pool.chars().count());
        info(format!("approx entropy per password: {:.2} bits", bits));
    }

    Ok(())
}

/// Build the pool and print each password that satisfies
/// the policy.
///
/// Policy exhaustion is reported and generation moves on
/// to the next password.
fn generate(args: &Args) -> Result<(String, Vec<String>)> {
    let policy = args.policy.policy();
    let pool = build_pool(
        !args.no_upper,
        !args.no_lower,
        !args.no_digits,
        !args.no_symbols,
    );

    if pool.is_empty() {
        return Err(Error::NoPool);
    }

    if args.length < policy.min_length {
        warn(format!(
            "minimum password length for the {} policy is {}",
            args.policy, policy.min_length
        ));
    }

    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        match generate_with_policy(args.length, &pool, &policy) {
            Ok(password) => {
                print_candidate(&password, false);
                generated.push(password);
            }
            Err(e @ passforge_password::Error::PolicyExhausted(_)) => {
                fail(e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }
    tracing::debug!(
        target: TARGET,
        requested = args.count,
        generated = generated.len(),
        "corpo",
    );
    Ok((pool, generated))
}

use crate::{
    helpers::{
        messages::success,
        output::{print_candidate, save_output},
        readline::read_line_allow_empty,
    },
    Result, TARGET,
};
use passforge_password::{
    combine::{profile_wordlist, MangleOptions},
    profile::Profile,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Full name.
    #[clap(long)]
    pub name: Option<String>,

    /// Nickname.
    #[clap(long)]
    pub nick: Option<String>,

    /// Birthdate, for example DDMMYYYY.
    #[clap(long)]
    pub dob: Option<String>,

    /// Load name, nickname and birthdate from a JSON profile.
    ///
    /// Values given on the command line take precedence.
    #[clap(long, env = "PASSFORGE_PROFILE")]
    pub load_profile: Option<PathBuf>,

    /// Save the inputs to a JSON profile.
    #[clap(long)]
    pub save_profile: Option<PathBuf>,

    /// Apply leetspeak substitutions.
    #[clap(long)]
    pub leet: bool,

    /// Reverse every candidate.
    #[clap(long)]
    pub reverse: bool,

    /// Print the MD5, SHA1 and SHA256 digests of each candidate.
    #[clap(long)]
    pub hashes: bool,

    /// Append the wordlist to this file.
    #[clap(short, long, env = "PASSFORGE_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Build a wordlist from personal data.
pub fn run(args: Args) -> Result<()> {
    let loaded = if let Some(path) = &args.load_profile {
        tracing::debug!(
            target: TARGET,
            path = %path.display(),
            "load profile",
        );
        Profile::load(path)?
    } else {
        Default::default()
    };

    let profile = Profile {
        name: Some(resolve(args.name, loaded.name, "Full Name: ")?),
        nick: Some(resolve(args.nick, loaded.nick, "Nickname: ")?),
        dob: Some(resolve(args.dob, loaded.dob, "Birthdate (DDMMYYYY): ")?),
    }
    .sanitized();

    if let Some(path) = &args.save_profile {
        profile.save(path)?;
        success(format!("profile saved to {}", path.display()));
    }

    let options = MangleOptions {
        leet: args.leet,
        reverse: args.reverse,
    };
    let wordlist = profile_wordlist(
        profile.name.as_deref().unwrap_or_default(),
        profile.nick.as_deref().unwrap_or_default(),
        profile.dob.as_deref().unwrap_or_default(),
        options,
    );

    for word in &wordlist {
        print_candidate(word, args.hashes);
    }
    save_output(args.output.as_deref(), &wordlist)
}

/// Prefer the command line value, then the loaded
/// profile, then prompt.
fn resolve(
    arg: Option<String>,
    loaded: Option<String>,
    prompt: &str,
) -> Result<String> {
    match preferred(arg, loaded) {
        Some(value) => Ok(value),
        None => read_line_allow_empty(prompt),
    }
}

/// First non-empty value, empty strings must be prompted for.
fn preferred(arg: Option<String>, loaded: Option<String>) -> Option<String> {
    arg.filter(|v| !v.is_empty())
        .or(loaded.filter(|v| !v.is_empty()))
}

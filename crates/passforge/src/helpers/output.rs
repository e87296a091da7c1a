//! Printing and saving generated candidates.
use crate::{helpers::messages::success, Result};
use passforge_password::digest::Digests;
use std::{fs::OpenOptions, io::Write, path::Path};

/// Print a candidate to stdout, optionally followed
/// by its digests.
pub(crate) fn print_candidate(candidate: &str, hashes: bool) {
    println!("{}", candidate);
    if hashes {
        print_digests(candidate, "    ");
    }
}

/// Print the digests of a value.
pub(crate) fn print_digests(value: &str, indent: &str) {
    let digests = Digests::compute(value);
    println!("{}MD5:    {}", indent, digests.md5);
    println!("{}SHA1:   {}", indent, digests.sha1);
    println!("{}SHA256: {}", indent, digests.sha256);
}

/// Append lines to a file, creating it when missing.
///
/// Returns the number of lines written.
pub(crate) fn append_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
) -> Result<usize> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    file.flush()?;
    Ok(lines.len())
}

/// Append candidates to an output file when one was
/// requested and report the result.
pub(crate) fn save_output<S: AsRef<str>>(
    path: Option<&Path>,
    lines: &[S],
) -> Result<()> {
    if let Some(path) = path {
        if !lines.is_empty() {
            let written = append_lines(path, lines)?;
            tracing::debug!(
                target: crate::TARGET,
                path = %path.display(),
                lines = written,
                "append output",
            );
            success(format!("saved {} to {}", written, path.display()));
        }
    }
    Ok(())
}

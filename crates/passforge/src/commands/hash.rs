use crate::helpers::output::print_digests;

/// Print the digests of a word.
pub fn run(word: String) {
    println!("{}", word);
    print_digests(&word, "  ");
}

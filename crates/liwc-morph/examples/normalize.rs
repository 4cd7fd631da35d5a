use std::env;

use anyhow::{Result, bail};
use liwc_morph::{StripSource, SuffixStripper, tokenize};

fn main() -> Result<()> {
    let text: Vec<String> = env::args().skip(1).collect();
    if text.is_empty() {
        bail!("usage: cargo run -p liwc-morph --example normalize -- <text>");
    }
    let text = text.join(" ");
    let stripper = SuffixStripper::hindi();

    for token in tokenize(&text) {
        let norm = stripper.normalize_detailed(token);
        let how = match norm.source {
            StripSource::Unchanged => "-".to_string(),
            StripSource::Suffix(suffix) => format!("-{suffix}"),
        };
        println!("{:<12} {:<10} [{}]", token, norm.base, how);
    }

    Ok(())
}

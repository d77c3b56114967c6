use crate::utils::error::{KataError, Result};
use regex::Regex;
use std::sync::OnceLock;

const KATA: &str = "pig-latin";

fn consonant_cluster() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^aeiou]+)(.*)$").expect("consonant regex is valid"))
}

pub fn translate(word: &str) -> Result<String> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(KataError::invalid_input(
            KATA,
            format!("'{}' must be a non-empty word of ASCII letters", word),
        ));
    }

    let lower = word.to_ascii_lowercase();
    match consonant_cluster().captures(&lower) {
        Some(caps) => Ok(format!("{}{}ay", &caps[2], &caps[1])),
        None => Ok(format!("{}way", lower)),
    }
}

pub fn translate_sentence(sentence: &str) -> Result<String> {
    let words = sentence
        .split_whitespace()
        .map(translate)
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}

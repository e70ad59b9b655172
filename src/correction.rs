//! Idiom correction engine.
//!
//! Runs after the model has produced a translation and rewrites literal
//! renderings of idioms found in the source text. Matching is exact substring
//! matching: idioms case-insensitively against the source, bad renderings
//! case-sensitively against the translation.

use crate::glossary::Glossary;

/// Outcome of a correction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The corrected translation
    pub text: String,

    /// Idioms whose bad renderings were replaced, in glossary order
    pub applied: Vec<String>,

    /// Number of bad-rendering substrings that were rewritten (all occurrences)
    pub replacements: usize,
}

impl Correction {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            applied: Vec::new(),
            replacements: 0,
        }
    }
}

/// Correct literal idiom renderings in `translated_text`.
///
/// Translations into any language other than the glossary's target language
/// are returned untouched. Entries are applied in glossary order, each one
/// against the text already rewritten by the entries before it.
pub fn correct(
    glossary: &Glossary,
    source_text: &str,
    translated_text: &str,
    target_lang: &str,
) -> Correction {
    if target_lang != glossary.target_language() {
        return Correction::unchanged(translated_text);
    }

    let lower_source = source_text.to_lowercase();
    let mut correction = Correction::unchanged(translated_text);

    for entry in glossary.entries() {
        if !lower_source.contains(&entry.idiom) {
            continue;
        }

        let mut fired = false;
        for bad in &entry.bad_renderings {
            let occurrences = correction.text.matches(bad.as_str()).count();
            if occurrences > 0 {
                correction.text = correction.text.replace(bad.as_str(), &entry.good_rendering);
                correction.replacements += occurrences;
                fired = true;
            }
        }

        if fired {
            correction.applied.push(entry.idiom.clone());
        }
    }

    correction
}

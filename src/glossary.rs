//! Idiom glossary: correction rules for literal mistranslations.
//!
//! Each entry pairs an English idiom with the literal renderings the model
//! tends to produce in the target language and the culturally correct phrase
//! that should replace them. A glossary is built once at startup and shared
//! read-only between requests.

use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One correction rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlossaryEntry {
    /// Source-language phrase, stored lower-cased
    pub idiom: String,

    /// Literal target-language renderings, matched case-sensitively
    #[serde(rename = "bad")]
    pub bad_renderings: Vec<String>,

    /// Replacement for every matched bad rendering
    #[serde(rename = "good")]
    pub good_rendering: String,
}

impl GlossaryEntry {
    pub fn new(idiom: &str, bad_renderings: &[&str], good_rendering: &str) -> Self {
        Self {
            idiom: idiom.to_lowercase(),
            bad_renderings: bad_renderings.iter().map(|s| s.to_string()).collect(),
            good_rendering: good_rendering.to_string(),
        }
    }
}

/// Immutable set of correction rules for a single target language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Glossary {
    /// Target language tag the renderings are written in (e.g., "ur")
    target_language: String,
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    /// Build a glossary, validating every entry.
    pub fn new(target_language: impl Into<String>, entries: Vec<GlossaryEntry>) -> Result<Self> {
        let target_language = target_language.into();
        if target_language.is_empty() {
            bail!("Glossary target language must not be empty");
        }

        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, mut entry)| {
                if entry.idiom.trim().is_empty() {
                    bail!("Glossary entry {} has an empty idiom", index);
                }
                if entry.bad_renderings.is_empty() {
                    bail!("Glossary entry '{}' has no bad renderings", entry.idiom);
                }
                if entry.bad_renderings.iter().any(|bad| bad.is_empty()) {
                    bail!("Glossary entry '{}' has an empty bad rendering", entry.idiom);
                }
                if entry.good_rendering.is_empty() {
                    bail!("Glossary entry '{}' has an empty good rendering", entry.idiom);
                }
                entry.idiom = entry.idiom.to_lowercase();
                Ok(entry)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            target_language,
            entries,
        })
    }

    /// The English -> Urdu ruleset shipped with the service.
    pub fn builtin() -> Self {
        Self {
            target_language: Language::URDU.code().to_string(),
            entries: URDU_IDIOMS
                .iter()
                .map(|(idiom, bad, good)| GlossaryEntry::new(idiom, bad, good))
                .collect(),
        }
    }

    /// Load a glossary from a JSON file.
    ///
    /// Expected shape:
    /// `{ "target_language": "ur", "entries": [{ "idiom": "...", "bad": ["..."], "good": "..." }] }`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read glossary file {}", path.display()))?;
        let raw: Glossary = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse glossary file {}", path.display()))?;

        Self::new(raw.target_language, raw.entries)
            .with_context(|| format!("Invalid glossary file {}", path.display()))
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Entries in definition order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// (idiom, literal renderings, correct rendering)
const URDU_IDIOMS: &[(&str, &[&str], &str)] = &[
    (
        "butterflies in my stomach",
        &["میرے پیٹ میں تتلیاں", "پیٹ میں تتلی"],
        "دل گھبرانا / خوفزدہ ہونا",
    ),
    (
        "over the moon",
        &["چاند کے اوپر", "چاند پر"],
        "بے حد خوش / پھولے نہ سمانا",
    ),
    (
        "on cloud nine",
        &["بادل نو پر", "نویں بادل پر"],
        "ساتویں آسمان پر / بہت خوش",
    ),
    (
        "under the weather",
        &["موسم کے تحت", "موسم کے نیچے"],
        "طبیعت ناساز",
    ),
    ("heart of gold", &["سونے کا دل"], "انتہائی نیک دل / رحم دل"),
    (
        "cold feet",
        &["ٹھنڈے پاؤں", "پاؤں ٹھنڈے"],
        "ہمت ہار جانا / گھبرا جانا",
    ),
    (
        "piece of cake",
        &["کیک کا ایک ٹکڑا", "کیک کا ٹکڑا", "کیک کا حصہ"],
        "بائیں ہاتھ کا کھیل / بہت آسان کام",
    ),
    (
        "break a leg",
        &["ٹانگ توڑ دو", "ٹانگ توڑنا"],
        "اللہ کامیاب کرے / گڈ لک",
    ),
    (
        "hit the sack",
        &["بوری کو مارنا", "بوری مارو"],
        "سو جانا / بستر پر جانا",
    ),
    (
        "burn the midnight oil",
        &["آدھی رات کا تیل جلانا", "رات کا تیل جلائیں"],
        "رات دن ایک کرنا / سخت محنت کرنا",
    ),
    (
        "call it a day",
        &["اسے ایک دن کہو", "اسے دن بلاؤ"],
        "آج کے لیے کام ختم کرنا",
    ),
    (
        "cut corners",
        &["کونے کاٹنا", "کونے کاٹ دیں"],
        "کام میں ڈنڈی مارنا / بچت کے لیے معیار گرانا",
    ),
    (
        "miss the boat",
        &["کشتی چھوٹ جانا", "کشتی کو یاد کرنا"],
        "موقع گنوا دینا",
    ),
    (
        "beat around the bush",
        &["جھاڑی کے گرد مارنا", "جھاڑی کو پیٹنا"],
        "ادھر ادھر کی باتیں کرنا / اصل مدعے پر نہ آنا",
    ),
    (
        "hit the nail on the head",
        &["سر پر کیل مارنا", "کیل کو سر پر مارو"],
        "بالکل درست بات کرنا / نشانہ پر لگنا",
    ),
    (
        "spill the beans",
        &["پھلیاں گرانا", "پھلیاں بہا دو"],
        "راز فاش کر دینا / بھانڈا پھوڑنا",
    ),
    (
        "bite the bullet",
        &["گولی کاٹنا", "گولی کاٹو"],
        "کڑوا گھونٹ بھرنا / مشکل برداشت کرنا",
    ),
    (
        "apple of my eye",
        &["میری آنکھ کا سیب", "آنکھ کا سیب"],
        "آنکھ کا تارہ / بہت عزیز",
    ),
    (
        "once in a blue moon",
        &["نیلے چاند میں ایک بار", "نیلے چاند میں"],
        "کبھی کبھار / عید کا چاند",
    ),
    (
        "add fuel to the fire",
        &["آگ میں ایندھن ڈالنا", "آگ پر تیل"],
        "جلتی پر تیل ڈالنا",
    ),
    (
        "blessing in disguise",
        &["بھیس میں نعمت", "چھپی ہوئی نعمت"],
        "زحمت میں رحمت",
    ),
    (
        "cost an arm and a leg",
        &["ایک بازو اور ٹانگ کی لاگت", "ہاتھ اور ٹانگ کی قیمت"],
        "بہت مہنگا پڑنا / بھاری قیمت چکانا",
    ),
    (
        "cry over spilt milk",
        &["گرے ہوئے دودھ پر رونا", "بکھرے دودھ پر رونا"],
        "اب پچھتائے کیا ہوت جب چڑیاں چگ گئیں کھیت",
    ),
    (
        "actions speak louder than words",
        &["عمل الفاظ سے زیادہ بلند بولتے ہیں"],
        "عمل کا اثر باتوں سے زیادہ ہوتا ہے",
    ),
    (
        "barking up the wrong tree",
        &["غلط درخت پر بھونکنا"],
        "غلط فہمی کا شکار ہونا / غلط جگہ کوشش کرنا",
    ),
    (
        "kill two birds with one stone",
        &["ایک پتھر سے دو پرندے مارنا"],
        "ایک تیر سے دو شکار",
    ),
    (
        "better late than never",
        &["کبھی نہیں سے دیر بہتر"],
        "دیر آید درست آید",
    ),
    (
        "face the music",
        &["موسیقی کا سامنا", "میوزک کا سامنا"],
        "نتائج بھگتنا / کیے کی سزا پانا",
    ),
    (
        "through thick and thin",
        &["موٹے اور پتلے کے ذریعے"],
        "اچھے برے حالات میں / سکھ دکھ میں",
    ),
    (
        "turn a blind eye",
        &["اندھی آنکھ موڑنا", "آنکھیں بند کرنا"],
        "نظر انداز کرنا / جان بوجھ کر انجان بننا",
    ),
    (
        "wild goose chase",
        &["جنگلی ہنس کا پیچھا"],
        "لا حاصل کوشش / بے کار بھاگ دوڑ",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== Builtin Tests ====================

    #[test]
    fn test_builtin_targets_urdu() {
        let glossary = Glossary::builtin();
        assert_eq!(glossary.target_language(), "ur");
        assert_eq!(glossary.len(), 31);
        assert!(!glossary.is_empty());
    }

    #[test]
    fn test_builtin_entries_are_well_formed() {
        let glossary = Glossary::builtin();
        for entry in glossary.entries() {
            assert_eq!(entry.idiom, entry.idiom.to_lowercase());
            assert!(!entry.bad_renderings.is_empty(), "{}", entry.idiom);
            assert!(!entry.good_rendering.is_empty(), "{}", entry.idiom);
        }
    }

    #[test]
    fn test_builtin_preserves_definition_order() {
        let glossary = Glossary::builtin();
        let entries = glossary.entries();
        assert_eq!(entries[0].idiom, "butterflies in my stomach");
        assert_eq!(entries[entries.len() - 1].idiom, "wild goose chase");
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Glossary::builtin();
        let rebuilt = Glossary::new("ur", builtin.entries().to_vec()).expect("Should validate");
        assert_eq!(builtin, rebuilt);
    }

    #[test]
    fn test_builtin_good_renderings_contain_no_bad_rendering() {
        let glossary = Glossary::builtin();
        for entry in glossary.entries() {
            for other in glossary.entries() {
                for bad in &other.bad_renderings {
                    assert!(
                        !entry.good_rendering.contains(bad.as_str()),
                        "good rendering of '{}' contains bad rendering '{}' of '{}'",
                        entry.idiom,
                        bad,
                        other.idiom
                    );
                }
            }
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_new_lowercases_idioms() {
        let glossary = Glossary::new(
            "ur",
            vec![GlossaryEntry {
                idiom: "Piece Of Cake".to_string(),
                bad_renderings: vec!["کیک کا ٹکڑا".to_string()],
                good_rendering: "بہت آسان کام".to_string(),
            }],
        )
        .expect("Should validate");

        assert_eq!(glossary.entries()[0].idiom, "piece of cake");
    }

    #[test]
    fn test_new_rejects_empty_bad_renderings() {
        let result = Glossary::new(
            "ur",
            vec![GlossaryEntry {
                idiom: "cold feet".to_string(),
                bad_renderings: vec![],
                good_rendering: "گھبرا جانا".to_string(),
            }],
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("no bad renderings"), "unexpected error: {}", err);
    }

    #[test]
    fn test_new_rejects_empty_idiom() {
        let result = Glossary::new("ur", vec![GlossaryEntry::new("  ", &["x"], "y")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty_target_language() {
        assert!(Glossary::new("", vec![]).is_err());
    }

    // ==================== File Loading Tests ====================

    #[test]
    fn test_from_file_success() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "target_language": "ur",
                "entries": [
                    {{ "idiom": "Cold Feet", "bad": ["ٹھنڈے پاؤں"], "good": "گھبرا جانا" }}
                ]
            }}"#
        )
        .expect("write glossary");

        let glossary = Glossary::from_file(file.path()).expect("Should load");
        assert_eq!(glossary.target_language(), "ur");
        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary.entries()[0].idiom, "cold feet");
        assert_eq!(glossary.entries()[0].bad_renderings, vec!["ٹھنڈے پاؤں"]);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Glossary::from_file(dir.path().join("missing.json"));
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write glossary");

        let result = Glossary::from_file(file.path());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_from_file_invalid_entry() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "target_language": "ur", "entries": [{{ "idiom": "x", "bad": [], "good": "y" }}] }}"#
        )
        .expect("write glossary");

        let result = Glossary::from_file(file.path());
        assert!(result.unwrap_err().to_string().contains("Invalid glossary"));
    }
}

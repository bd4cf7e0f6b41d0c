//! Per-locale grammar tables.
//!
//! Every word and sentence template a locale needs lives in a [`Grammar`]
//! value. The formatters are written once against this table, so a new
//! language is a new table (built in, or read from TOML with
//! [`Grammar::from_toml_str`]) rather than new code.
//!
//! # Templates
//!
//! Templates use `{name}` placeholders filled by the formatters:
//!
//! | template | placeholders |
//! |----------|--------------|
//! | `features.observed`, `features.excluded_list` | `{items}` |
//! | `features.excluded_single` | `{item}` |
//! | `features.observed_and_excluded_*` | `{observed}`, `{excluded}` |
//! | `onsets.iso_sentence`, `onsets.iso_clause` | `{age}` |
//! | `units.modifier` | `{n}`, `{unit}`, `{ending}` |
//! | `description.subject` | `{article}`, `{age}`, `{noun}` |
//! | `description.with_subject` | `{subject}`, `{relative}`, `{onset}` |
//! | `description.without_subject` | `{onset}` |

mod english;
mod german;

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use ppkt_model::{DurationUnit, HpoOnsetAge, LifeStage, PhenopacketSex};
use serde::{Deserialize, Serialize};

use crate::error::{NlgError, Result};

/// Complete set of locale-specific words and templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Language tag, e.g. `en`.
    pub language: String,
    /// Word placed before the last item of a list.
    pub conjunction: String,
    pub features: FeatureTemplates,
    pub pronouns: Pronouns,
    pub onsets: OnsetPhrases,
    pub units: UnitNames,
    pub genders: GenderForms,
    pub subjects: SubjectNouns,
    pub description: DescriptionTemplates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTemplates {
    /// Rendered when no feature survives translation.
    pub none: String,
    pub observed: String,
    pub excluded_single: String,
    pub excluded_list: String,
    pub observed_and_excluded_single: String,
    pub observed_and_excluded_plural: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronouns {
    pub female: String,
    pub male: String,
    pub unknown: String,
}

/// Sentence-initial and embedded renderings of one onset category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnsetPhrase {
    /// Starts a sentence: "During childhood".
    pub sentence: String,
    /// Follows "presented": "as a child".
    pub clause: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnsetPhrases {
    pub iso_sentence: String,
    pub iso_clause: String,
    pub antenatal: OnsetPhrase,
    pub embryonal: OnsetPhrase,
    pub fetal: OnsetPhrase,
    pub congenital: OnsetPhrase,
    pub neonatal: OnsetPhrase,
    pub infantile: OnsetPhrase,
    pub childhood: OnsetPhrase,
    pub juvenile: OnsetPhrase,
    pub adult: OnsetPhrase,
    pub young_adult: OnsetPhrase,
    pub middle_age: OnsetPhrase,
    pub late: OnsetPhrase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitName {
    pub singular: String,
    pub plural: String,
    /// Stem used in age modifiers: "year" in "46-year-old".
    pub adjective: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitNames {
    /// Age modifier placed before the subject noun.
    pub modifier: String,
    pub year: UnitName,
    pub month: UnitName,
    pub week: UnitName,
    pub day: UnitName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Words that agree with the grammatical gender of the subject noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub article: String,
    pub relative: String,
    /// Ending appended to the age modifier.
    pub ending: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderForms {
    /// Article used before a vowel sound ("an"), if the language has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vowel_article: Option<String>,
    pub masculine: Inflection,
    pub feminine: Inflection,
    pub neuter: Inflection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    pub text: String,
    pub gender: Gender,
}

/// Nouns for one life stage. A missing noun means the subject is not
/// named, e.g. an individual of unknown sex and unknown age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexNouns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female: Option<Noun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male: Option<Noun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<Noun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectNouns {
    /// Used when the age is not known.
    pub unspecified: SexNouns,
    pub prenatal: SexNouns,
    pub newborn: SexNouns,
    pub infant: SexNouns,
    pub child: SexNouns,
    pub adolescent: SexNouns,
    pub adult: SexNouns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionTemplates {
    pub subject: String,
    pub with_subject: String,
    pub without_subject: String,
}

impl Grammar {
    pub fn english() -> Self {
        english::grammar()
    }

    pub fn german() -> Self {
        german::grammar()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NlgError::io(path, e))?;
        let grammar = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            language = %grammar.language,
            "loaded grammar table"
        );
        Ok(grammar)
    }

    pub fn pronoun(&self, sex: PhenopacketSex) -> &str {
        match sex {
            PhenopacketSex::Female => &self.pronouns.female,
            PhenopacketSex::Male => &self.pronouns.male,
            PhenopacketSex::Unknown => &self.pronouns.unknown,
        }
    }

    pub fn onset(&self, onset: HpoOnsetAge) -> &OnsetPhrase {
        let phrases = &self.onsets;
        match onset {
            HpoOnsetAge::Antenatal => &phrases.antenatal,
            HpoOnsetAge::Embryonal => &phrases.embryonal,
            HpoOnsetAge::Fetal => &phrases.fetal,
            HpoOnsetAge::Congenital => &phrases.congenital,
            HpoOnsetAge::Neonatal => &phrases.neonatal,
            HpoOnsetAge::Infantile => &phrases.infantile,
            HpoOnsetAge::Childhood => &phrases.childhood,
            HpoOnsetAge::Juvenile => &phrases.juvenile,
            HpoOnsetAge::Adult => &phrases.adult,
            HpoOnsetAge::YoungAdult => &phrases.young_adult,
            HpoOnsetAge::MiddleAge => &phrases.middle_age,
            HpoOnsetAge::Late => &phrases.late,
        }
    }

    pub fn unit(&self, unit: DurationUnit) -> &UnitName {
        match unit {
            DurationUnit::Year => &self.units.year,
            DurationUnit::Month => &self.units.month,
            DurationUnit::Week => &self.units.week,
            DurationUnit::Day => &self.units.day,
        }
    }

    /// `"46 years"`, `"1 month"`.
    pub fn quantity(&self, amount: u32, unit: DurationUnit) -> String {
        let names = self.unit(unit);
        let name = if amount == 1 {
            &names.singular
        } else {
            &names.plural
        };
        format!("{amount} {name}")
    }

    pub fn inflection(&self, gender: Gender) -> &Inflection {
        match gender {
            Gender::Masculine => &self.genders.masculine,
            Gender::Feminine => &self.genders.feminine,
            Gender::Neuter => &self.genders.neuter,
        }
    }

    /// Indefinite article for a noun of `gender` placed before `following`.
    pub fn article(&self, gender: Gender, following: &str) -> &str {
        match &self.genders.vowel_article {
            Some(article) if starts_with_vowel_sound(following) => article,
            _ => &self.inflection(gender).article,
        }
    }

    /// Subject noun for a sex at a life stage (`None` stage: age unknown).
    pub fn noun(&self, sex: PhenopacketSex, stage: Option<LifeStage>) -> Option<&Noun> {
        let nouns = match stage {
            None => &self.subjects.unspecified,
            Some(LifeStage::Prenatal) => &self.subjects.prenatal,
            Some(LifeStage::Newborn) => &self.subjects.newborn,
            Some(LifeStage::Infant) => &self.subjects.infant,
            Some(LifeStage::Child) => &self.subjects.child,
            Some(LifeStage::Adolescent) => &self.subjects.adolescent,
            Some(LifeStage::Adult) => &self.subjects.adult,
        };
        match sex {
            PhenopacketSex::Female => nouns.female.as_ref(),
            PhenopacketSex::Male => nouns.male.as_ref(),
            PhenopacketSex::Unknown => nouns.unknown.as_ref(),
        }
    }
}

/// Built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

static ENGLISH: LazyLock<Grammar> = LazyLock::new(english::grammar);
static GERMAN: LazyLock<Grammar> = LazyLock::new(german::grammar);

impl Locale {
    pub fn grammar(self) -> &'static Grammar {
        match self {
            Locale::En => &ENGLISH,
            Locale::De => &GERMAN,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "de" | "german" | "deutsch" => Ok(Locale::De),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Fill `{name}` placeholders in one pass; unknown placeholders stay as
/// written, and substituted values are never re-scanned.
pub(crate) fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 2]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

/// English "an" rule: vowel letters, and numbers read as "eight…",
/// "eleven…" or "eighteen…".
fn starts_with_vowel_sound(word: &str) -> bool {
    let digits: String = word.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return word
            .chars()
            .next()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    }
    digits.starts_with('8')
        || (digits.len() % 3 == 2 && (digits.starts_with("11") || digits.starts_with("18")))
}

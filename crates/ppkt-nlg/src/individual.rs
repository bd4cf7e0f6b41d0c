//! Pronouns, onset phrases and the introductory sentence about a subject.

use ppkt_model::{Individual, Iso8601Age, PhenopacketAge, PhenopacketSex};

use crate::error::{NlgError, Result};
use crate::grammar::{Grammar, fill};
use crate::join::oxford_comma_list;

/// Describes the subject of a phenopacket in one locale.
#[derive(Debug, Clone, Copy)]
pub struct IndividualFormatter<'a> {
    grammar: &'a Grammar,
}

impl<'a> IndividualFormatter<'a> {
    pub fn new(grammar: &'a Grammar) -> Self {
        Self { grammar }
    }

    /// Pronoun (or neutral phrase) standing for the subject.
    pub fn he_she_individual(&self, sex: PhenopacketSex) -> &'a str {
        self.grammar.pronoun(sex)
    }

    /// Sentence-initial phrase: "At birth", "At an age of 46 years".
    pub fn at_age(&self, age: &PhenopacketAge) -> String {
        match age {
            PhenopacketAge::HpoOnset(onset) => self.grammar.onset(*onset).sentence.clone(),
            PhenopacketAge::Iso8601(age) => fill(
                &self.grammar.onsets.iso_sentence,
                &[("age", self.duration(age).as_str())],
            ),
        }
    }

    /// Embedded phrase following "presented": "as an infant", "at the age
    /// of 3 days". Empty when the onset is unknown.
    pub fn onset_clause(&self, onset: Option<&PhenopacketAge>) -> String {
        match onset {
            None => String::new(),
            Some(PhenopacketAge::HpoOnset(onset)) => self.grammar.onset(*onset).clause.clone(),
            Some(PhenopacketAge::Iso8601(age)) => fill(
                &self.grammar.onsets.iso_clause,
                &[("age", self.duration(age).as_str())],
            ),
        }
    }

    /// Noun phrase with article, e.g. "a 46-year-old woman". `None` when
    /// neither sex nor age names the subject.
    pub fn subject(&self, sex: PhenopacketSex, age: Option<&PhenopacketAge>) -> Option<String> {
        let noun = self
            .grammar
            .noun(sex, age.map(PhenopacketAge::life_stage))?;
        let inflection = self.grammar.inflection(noun.gender);
        let modifier = match age {
            Some(PhenopacketAge::Iso8601(age)) => {
                let (amount, unit) = age.dominant_unit();
                fill(
                    &self.grammar.units.modifier,
                    &[
                        ("n", amount.to_string().as_str()),
                        ("unit", self.grammar.unit(unit).adjective.as_str()),
                        ("ending", inflection.ending.as_str()),
                    ],
                )
            }
            Some(PhenopacketAge::HpoOnset(_)) | None => String::new(),
        };
        let following = if modifier.is_empty() {
            noun.text.as_str()
        } else {
            modifier.as_str()
        };
        let article = self.grammar.article(noun.gender, following);
        Some(collapse(&fill(
            &self.grammar.description.subject,
            &[
                ("article", article),
                ("age", modifier.as_str()),
                ("noun", noun.text.as_str()),
            ],
        )))
    }

    /// Introductory sentence, ending where the feature list is appended.
    ///
    /// # Errors
    ///
    /// Returns [`NlgError::NoAnnotations`] when the individual has no
    /// phenotypic features.
    pub fn individual_description(&self, individual: &Individual) -> Result<String> {
        if !individual.has_annotations() {
            tracing::warn!(
                individual_id = %individual.id,
                "cannot describe individual without HPO annotations"
            );
            return Err(NlgError::NoAnnotations {
                individual_id: individual.id.clone(),
            });
        }

        let onset = self.onset_clause(individual.onset.as_ref());
        let templates = &self.grammar.description;
        let sentence = match self.subject(individual.sex, individual.age.as_ref()) {
            Some(subject) => {
                let relative = self
                    .grammar
                    .noun(
                        individual.sex,
                        individual.age.as_ref().map(PhenopacketAge::life_stage),
                    )
                    .map_or("", |noun| self.grammar.inflection(noun.gender).relative.as_str());
                fill(
                    &templates.with_subject,
                    &[
                        ("subject", subject.as_str()),
                        ("relative", relative),
                        ("onset", onset.as_str()),
                    ],
                )
            }
            None => fill(&templates.without_subject, &[("onset", onset.as_str())]),
        };
        Ok(collapse(&sentence))
    }

    /// "46 years", "1 year and 6 months", "0 days".
    fn duration(&self, age: &Iso8601Age) -> String {
        let parts: Vec<String> = age
            .components()
            .into_iter()
            .map(|(amount, unit)| self.grammar.quantity(amount, unit))
            .collect();
        if parts.is_empty() {
            let (amount, unit) = age.dominant_unit();
            return self.grammar.quantity(amount, unit);
        }
        oxford_comma_list(&parts, &self.grammar.conjunction)
    }
}

/// Squeeze the gaps left by empty placeholders.
fn collapse(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" ,", ",")
}

//! One entry point per locale bundling the feature and individual formatters.

use std::collections::BTreeSet;

use ppkt_model::{Individual, OntologyTerm, PhenopacketAge, PhenopacketSex};

use crate::error::Result;
use crate::features::{FeatureFormatter, Rendered};
use crate::grammar::{Grammar, Locale};
use crate::individual::IndividualFormatter;
use crate::missing::MissingTranslations;
use crate::options::FormatOptions;
use crate::translation::TranslationProvider;

/// Locale-bound prose generator.
///
/// Holds only shared references; every call returns its own translation
/// misses, so a narrator can be used from several threads at once.
#[derive(Debug)]
pub struct Narrator<'a, P: ?Sized> {
    grammar: &'a Grammar,
    translations: &'a P,
    options: FormatOptions,
}

impl<'a, P: TranslationProvider + ?Sized> Narrator<'a, P> {
    pub fn new(grammar: &'a Grammar, translations: &'a P) -> Self {
        Self {
            grammar,
            translations,
            options: FormatOptions::default(),
        }
    }

    /// Narrator using one of the built-in grammar tables.
    pub fn for_locale(locale: Locale, translations: &'a P) -> Self {
        Self::new(locale.grammar(), translations)
    }

    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    fn features(&self) -> FeatureFormatter<'a, P> {
        FeatureFormatter::new(self.grammar, self.translations).with_options(self.options)
    }

    fn individual(&self) -> IndividualFormatter<'a> {
        IndividualFormatter::new(self.grammar)
    }

    pub fn format_features(
        &self,
        terms: &[OntologyTerm],
        missing: &mut MissingTranslations,
    ) -> String {
        self.features().format_features(terms, missing)
    }

    pub fn render_features(&self, terms: &[OntologyTerm]) -> Rendered {
        self.features().render_features(terms)
    }

    pub fn he_she_individual(&self, sex: PhenopacketSex) -> &'a str {
        self.individual().he_she_individual(sex)
    }

    pub fn at_age(&self, age: &PhenopacketAge) -> String {
        self.individual().at_age(age)
    }

    /// # Errors
    ///
    /// Fails with [`crate::NlgError::NoAnnotations`] for an individual
    /// without phenotypic features.
    pub fn individual_description(&self, individual: &Individual) -> Result<String> {
        self.individual().individual_description(individual)
    }

    /// Introductory sentence followed by the feature sentence.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::NlgError::NoAnnotations`] for an individual
    /// without phenotypic features.
    pub fn narrate(&self, individual: &Individual) -> Result<Rendered> {
        let description = self.individual_description(individual)?;
        let features = self.render_features(&individual.phenotypic_features);
        Ok(Rendered {
            text: format!("{description} {}", features.text).trim_end().to_string(),
            missing: features.missing,
        })
    }
}

/// A narrator plus the misses accumulated over its lifetime.
#[derive(Debug)]
pub struct NarrationSession<'a, P: ?Sized> {
    narrator: Narrator<'a, P>,
    missing: MissingTranslations,
}

impl<'a, P: TranslationProvider + ?Sized> NarrationSession<'a, P> {
    pub fn new(narrator: Narrator<'a, P>) -> Self {
        Self {
            narrator,
            missing: MissingTranslations::new(),
        }
    }

    pub fn narrator(&self) -> &Narrator<'a, P> {
        &self.narrator
    }

    pub fn format_features(&mut self, terms: &[OntologyTerm]) -> String {
        self.narrator.format_features(terms, &mut self.missing)
    }

    /// # Errors
    ///
    /// Fails with [`crate::NlgError::NoAnnotations`] for an individual
    /// without phenotypic features.
    pub fn narrate(&mut self, individual: &Individual) -> Result<String> {
        let rendered = self.narrator.narrate(individual)?;
        self.missing.merge(rendered.missing);
        Ok(rendered.text)
    }

    pub fn get_missing_translations(&self) -> &BTreeSet<String> {
        self.missing.get_all()
    }

    pub fn into_missing_translations(self) -> MissingTranslations {
        self.missing
    }
}

//! Sentence describing observed and excluded phenotypic features.

use ppkt_model::OntologyTerm;
use serde::Serialize;

use crate::grammar::{Grammar, fill};
use crate::join::oxford_comma_list;
use crate::missing::MissingTranslations;
use crate::options::{FormatOptions, MissingLabelPolicy};
use crate::translation::TranslationProvider;

/// Rendered prose together with the translation misses it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub text: String,
    pub missing: MissingTranslations,
}

/// Formats a feature list in one locale.
///
/// The formatter only borrows its grammar and translations, so one instance
/// can be shared across threads; misses go to the caller-supplied
/// [`MissingTranslations`] or come back in a [`Rendered`].
#[derive(Debug)]
pub struct FeatureFormatter<'a, P: ?Sized> {
    grammar: &'a Grammar,
    translations: &'a P,
    options: FormatOptions,
}

impl<'a, P: TranslationProvider + ?Sized> FeatureFormatter<'a, P> {
    pub fn new(grammar: &'a Grammar, translations: &'a P) -> Self {
        Self {
            grammar,
            translations,
            options: FormatOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Render `terms` and return the misses alongside the text.
    pub fn render_features(&self, terms: &[OntologyTerm]) -> Rendered {
        let mut missing = MissingTranslations::new();
        let text = self.format_features(terms, &mut missing);
        Rendered { text, missing }
    }

    /// Render `terms`, recording every untranslated term in `missing`.
    pub fn format_features(
        &self,
        terms: &[OntologyTerm],
        missing: &mut MissingTranslations,
    ) -> String {
        let observed = self.translate(terms.iter().filter(|t| t.is_observed()), missing);
        let excluded = self.translate(terms.iter().filter(|t| t.excluded), missing);
        tracing::debug!(
            language = %self.grammar.language,
            observed = observed.len(),
            excluded = excluded.len(),
            "formatting features"
        );
        self.compose(&observed, &excluded)
    }

    fn translate<'t, I>(&self, terms: I, missing: &mut MissingTranslations) -> Vec<String>
    where
        I: Iterator<Item = &'t OntologyTerm>,
    {
        let mut labels = Vec::new();
        for term in terms {
            if let Some(label) = self.translations.label(&term.id) {
                labels.push(label.to_string());
                continue;
            }
            missing.record(&term.label, &term.id);
            tracing::debug!(
                term_id = %term.id,
                label = %term.label,
                language = %self.grammar.language,
                "no translation for term"
            );
            if self.options.missing_label_policy == MissingLabelPolicy::FallbackToDefault {
                labels.push(term.label.clone());
            }
        }
        labels
    }

    fn compose(&self, observed: &[String], excluded: &[String]) -> String {
        let templates = &self.grammar.features;
        let join = |labels: &[String]| oxford_comma_list(labels, &self.grammar.conjunction);
        let (case, text) = match (observed.is_empty(), excluded) {
            (true, []) => ("none", templates.none.clone()),
            (false, []) => (
                "observed",
                fill(&templates.observed, &[("items", join(observed).as_str())]),
            ),
            (true, [only]) => (
                "excluded_single",
                fill(&templates.excluded_single, &[("item", only.as_str())]),
            ),
            (true, _) => (
                "excluded_list",
                fill(&templates.excluded_list, &[("items", join(excluded).as_str())]),
            ),
            (false, _) => {
                // Verb agreement follows the excluded group only.
                let (case, template) = if excluded.len() == 1 {
                    (
                        "observed_and_excluded_single",
                        &templates.observed_and_excluded_single,
                    )
                } else {
                    (
                        "observed_and_excluded_plural",
                        &templates.observed_and_excluded_plural,
                    )
                };
                let text = fill(
                    template,
                    &[
                        ("observed", join(observed).as_str()),
                        ("excluded", join(excluded).as_str()),
                    ],
                );
                (case, text)
            }
        };
        tracing::debug!(language = %self.grammar.language, case, "composed feature sentence");
        text
    }
}

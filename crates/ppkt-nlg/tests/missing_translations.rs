//! Missing-translation tracking and Babelon loading.

mod common;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use common::{
    female_46_years_infantile_onset, german_labels, hepatomegaly, pneumonia, two_years_old_male,
};
use ppkt_nlg::{
    FormatOptions, Locale, MissingLabelPolicy, MissingTranslations, NarrationSession, Narrator,
    TranslationMap,
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn untranslated_term_is_dropped_and_recorded() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let mut missing = MissingTranslations::new();

    let text = narrator.format_features(&[pneumonia(), hepatomegaly()], &mut missing);
    assert_eq!(text, "Hepatomegalie. ");
    assert_eq!(missing.len(), 1);
    assert!(missing.contains("Pneumonia (HP:0002090)"));
}

#[test]
fn all_terms_untranslated_renders_no_abnormalities() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let rendered = narrator.render_features(&[pneumonia()]);
    assert_eq!(rendered.text, "keine phänotypischen Abnormalitäten");
    assert!(rendered.missing.contains("Pneumonia (HP:0002090)"));
}

#[test]
fn fallback_policy_keeps_default_label() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels).with_options(
        FormatOptions::new().with_missing_label_policy(MissingLabelPolicy::FallbackToDefault),
    );
    let rendered = narrator.render_features(&two_years_old_male().phenotypic_features);
    assert_eq!(
        rendered.text,
        "Lymphopenie und Pneumonia, und Verminderter IgA-Spiegel im Blut und Decreased circulating total IgM wurden ausgeschlossen."
    );
    assert_eq!(rendered.missing.len(), 2);
}

#[test]
fn missing_set_serializes_as_sorted_list() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let rendered = narrator.render_features(&two_years_old_male().phenotypic_features);
    insta::assert_json_snapshot!(rendered.missing, @r#"
    [
      "Decreased circulating total IgM (HP:0002850)",
      "Pneumonia (HP:0002090)"
    ]
    "#);
}

#[test]
fn session_accumulates_across_calls() {
    let labels = german_labels();
    let mut session = NarrationSession::new(Narrator::for_locale(Locale::De, &labels));

    session.narrate(&female_46_years_infantile_onset()).unwrap();
    assert!(session.get_missing_translations().is_empty());

    session.format_features(&[pneumonia()]);
    session.narrate(&two_years_old_male()).unwrap();
    session.narrate(&two_years_old_male()).unwrap();

    let missing = session.into_missing_translations();
    let entries: Vec<String> = missing.into_iter().collect();
    assert_eq!(
        entries,
        vec![
            "Decreased circulating total IgM (HP:0002850)".to_string(),
            "Pneumonia (HP:0002090)".to_string(),
        ]
    );
}

#[test]
fn miss_is_logged_at_debug() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    tracing::subscriber::with_default(subscriber, || {
        narrator.render_features(&[pneumonia()]);
    });

    let logs = captured.contents();
    assert!(logs.contains("no translation for term"), "logs: {logs}");
    assert!(logs.contains("HP:0002090"), "logs: {logs}");
}

#[test]
fn chosen_sentence_case_is_logged() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    tracing::subscriber::with_default(subscriber, || {
        narrator.render_features(&two_years_old_male().phenotypic_features);
        narrator.render_features(&[]);
    });

    let logs = captured.contents();
    assert!(logs.contains("composed feature sentence"), "logs: {logs}");
    assert!(logs.contains("observed_and_excluded_single"), "logs: {logs}");
    assert!(logs.contains("none"), "logs: {logs}");
}

#[test]
fn babelon_file_feeds_the_narrator() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../locales/hp-de.babelon.tsv");
    let labels = TranslationMap::from_babelon_path(&path, "de").unwrap();
    assert_eq!(labels.language, "de");
    assert_eq!(labels.len(), 7);

    let narrator = Narrator::for_locale(Locale::De, &labels);
    let rendered = narrator.narrate(&two_years_old_male()).unwrap();
    assert!(rendered.text.ends_with(
        "Lymphopenie, und Verminderter IgA-Spiegel im Blut wurde ausgeschlossen."
    ));
    // The Pneumonia row is only a candidate translation.
    assert!(rendered.missing.contains("Pneumonia (HP:0002090)"));
}

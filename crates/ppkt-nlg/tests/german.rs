//! German prose generation.

mod common;

use common::{
    ataxia, atrophy, bradyphrenia_excluded, female_46_years_infantile_onset, female_no_age,
    female_no_hpos, german_labels, hepatomegaly, iga_excluded, male_4_months_congenital_onset,
    two_years_old_male, unknown_sex_childhood_onset,
};
use ppkt_model::{HpoOnsetAge, PhenopacketAge, PhenopacketSex};
use ppkt_nlg::{Locale, MissingTranslations, Narrator, NlgError, oxford_comma_list};

#[test]
fn oxford_comma_list_uses_und() {
    let conjunction = &Locale::De.grammar().conjunction;
    assert_eq!(oxford_comma_list(&["Ataxie"], conjunction), "Ataxie");
    assert_eq!(
        oxford_comma_list(&["Ataxie", "Hepatomegalie"], conjunction),
        "Ataxie und Hepatomegalie"
    );
    assert_eq!(
        oxford_comma_list(&["Ataxie", "Hepatomegalie", "Lymphopenie"], conjunction),
        "Ataxie, Hepatomegalie und Lymphopenie"
    );
}

#[test]
fn format_features_cases() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let mut missing = MissingTranslations::new();

    assert_eq!(
        narrator.format_features(&[], &mut missing),
        "keine phänotypischen Abnormalitäten"
    );
    assert_eq!(
        narrator.format_features(&[bradyphrenia_excluded()], &mut missing),
        "Bradyphrenie wurde ausgeschlossen."
    );
    assert_eq!(
        narrator.format_features(&[bradyphrenia_excluded(), iga_excluded()], &mut missing),
        "Die folgenden Symptome wurden ausgeschlossen: Bradyphrenie und Verminderter IgA-Spiegel im Blut."
    );
    assert_eq!(
        narrator.format_features(&[atrophy(), ataxia(), bradyphrenia_excluded()], &mut missing),
        "Zerebelläre Atrophie und Ataxie, und Bradyphrenie wurde ausgeschlossen."
    );
    assert_eq!(
        narrator.format_features(&[ataxia(), hepatomegaly(), atrophy()], &mut missing),
        "Ataxie, Hepatomegalie und Zerebelläre Atrophie. "
    );
    assert!(missing.is_empty());
}

#[test]
fn untranslated_terms_are_dropped_and_recorded() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let rendered = narrator.render_features(&two_years_old_male().phenotypic_features);

    assert_eq!(
        rendered.text,
        "Lymphopenie, und Verminderter IgA-Spiegel im Blut wurde ausgeschlossen."
    );
    assert!(!rendered.text.contains("Pneumonia"));
    let missing: Vec<&str> = rendered.missing.iter().collect();
    assert_eq!(
        missing,
        vec![
            "Decreased circulating total IgM (HP:0002850)",
            "Pneumonia (HP:0002090)"
        ]
    );
}

#[test]
fn individual_descriptions() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let cases = [
        (
            female_46_years_infantile_onset(),
            "Der Proband war eine 46-jährige Frau, die sich im Säuglingsalter mit den folgenden Symptomen vorgestellt hat:",
        ),
        (
            male_4_months_congenital_onset(),
            "Der Proband war ein 4-monatiger männlicher Säugling, der sich bei der Geburt mit den folgenden Symptomen vorgestellt hat:",
        ),
        (
            female_no_age(),
            "Der Proband war eine weibliche Person, die sich mit den folgenden Symptomen vorgestellt hat:",
        ),
        (
            unknown_sex_childhood_onset(),
            "Der Proband hat sich im Kindesalter mit den folgenden Symptomen vorgestellt:",
        ),
        (
            two_years_old_male(),
            "Der Proband war ein 2-jähriger Junge, der sich im Alter von 3 Tagen mit den folgenden Symptomen vorgestellt hat:",
        ),
    ];
    for (individual, expected) in cases {
        assert_eq!(
            narrator.individual_description(&individual).unwrap(),
            expected,
            "Incorrect evaluation for: {}",
            individual.id
        );
    }
    assert!(matches!(
        narrator.individual_description(&female_no_hpos()),
        Err(NlgError::NoAnnotations { .. })
    ));
}

#[test]
fn pronouns_and_ages() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    assert_eq!(narrator.he_she_individual(PhenopacketSex::Female), "sie");
    assert_eq!(narrator.he_she_individual(PhenopacketSex::Male), "er");
    assert_eq!(
        narrator.he_she_individual(PhenopacketSex::Unknown),
        "die Person"
    );

    assert_eq!(narrator.at_age(&HpoOnsetAge::congenital()), "Bei der Geburt");
    assert_eq!(narrator.at_age(&HpoOnsetAge::infantile()), "Im Säuglingsalter");
    assert_eq!(
        narrator.at_age(&PhenopacketAge::iso8601("P46Y").unwrap()),
        "Im Alter von 46 Jahren"
    );
    assert_eq!(
        narrator.at_age(&PhenopacketAge::iso8601("P1Y3D").unwrap()),
        "Im Alter von 1 Jahr und 3 Tagen"
    );
}

#[test]
fn narrate_collects_missing_translations_in_session() {
    let labels = german_labels();
    let mut session =
        ppkt_nlg::NarrationSession::new(Narrator::for_locale(Locale::De, &labels));

    let text = session.narrate(&two_years_old_male()).unwrap();
    insta::assert_snapshot!(
        text,
        @"Der Proband war ein 2-jähriger Junge, der sich im Alter von 3 Tagen mit den folgenden Symptomen vorgestellt hat: Lymphopenie, und Verminderter IgA-Spiegel im Blut wurde ausgeschlossen."
    );
    session.narrate(&two_years_old_male()).unwrap();
    assert_eq!(session.get_missing_translations().len(), 2);
    assert!(
        session
            .get_missing_translations()
            .contains("Pneumonia (HP:0002090)")
    );
}

#[test]
fn day_counts_over_a_year_describe_a_child() {
    let labels = german_labels();
    let narrator = Narrator::for_locale(Locale::De, &labels);
    let individual = female_no_age().with_age(PhenopacketAge::iso8601("P400D").unwrap());
    assert_eq!(
        narrator.individual_description(&individual).unwrap(),
        "Der Proband war ein 400-tägiges Mädchen, das sich mit den folgenden Symptomen vorgestellt hat:"
    );
}

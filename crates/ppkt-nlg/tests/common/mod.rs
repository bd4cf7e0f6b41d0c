//! Shared individuals for the prose generation tests.

#![allow(dead_code)]

use ppkt_model::{HpoOnsetAge, Individual, OntologyTerm, PhenopacketAge, PhenopacketSex, TermId};
use ppkt_nlg::TranslationMap;

fn id(value: &str) -> TermId {
    TermId::new(value).expect("valid term id")
}

pub fn atrophy() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0001272"), "Cerebellar atrophy")
}

pub fn ataxia() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0001251"), "Ataxia")
}

pub fn bradyphrenia_excluded() -> OntologyTerm {
    OntologyTerm::excluded(id("HP:0031843"), "Bradyphrenia")
}

pub fn polydactyly() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0100259"), "Postaxial polydactyly")
}

pub fn hepatomegaly() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0002240"), "Hepatomegaly")
}

pub fn lymphopenia() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0001888"), "Lymphopenia")
}

pub fn pneumonia() -> OntologyTerm {
    OntologyTerm::observed(id("HP:0002090"), "Pneumonia")
}

pub fn iga_excluded() -> OntologyTerm {
    OntologyTerm::excluded(id("HP:0002720"), "Decreased circulating IgA level")
}

pub fn igm_excluded() -> OntologyTerm {
    OntologyTerm::excluded(id("HP:0002850"), "Decreased circulating total IgM")
}

fn age(value: &str) -> PhenopacketAge {
    PhenopacketAge::iso8601(value).expect("valid duration")
}

pub fn female_46_years_infantile_onset() -> Individual {
    Individual::new("individual.1", PhenopacketSex::Female)
        .with_age(age("P46Y"))
        .with_onset(HpoOnsetAge::infantile())
        .with_features([atrophy(), ataxia(), bradyphrenia_excluded()])
}

pub fn male_4_months_congenital_onset() -> Individual {
    Individual::new("individual.2", PhenopacketSex::Male)
        .with_age(age("P4M"))
        .with_onset(HpoOnsetAge::congenital())
        .with_feature(polydactyly())
}

pub fn female_no_age() -> Individual {
    Individual::new("individual.3", PhenopacketSex::Female).with_feature(hepatomegaly())
}

/// Invalid for description: no HPO annotations.
pub fn female_no_hpos() -> Individual {
    Individual::new("individual.4", PhenopacketSex::Female)
}

pub fn unknown_sex_childhood_onset() -> Individual {
    Individual::new("individual.5", PhenopacketSex::Unknown)
        .with_onset(HpoOnsetAge::childhood())
        .with_feature(hepatomegaly())
}

pub fn two_years_old_male() -> Individual {
    Individual::new("individual.6", PhenopacketSex::Male)
        .with_age(age("P2Y"))
        .with_onset(age("P3D"))
        .with_features([lymphopenia(), pneumonia(), iga_excluded(), igm_excluded()])
}

/// English labels: the ontology's own.
pub fn english_labels() -> TranslationMap {
    let terms = [
        atrophy(),
        ataxia(),
        bradyphrenia_excluded(),
        polydactyly(),
        hepatomegaly(),
        lymphopenia(),
        pneumonia(),
        iga_excluded(),
        igm_excluded(),
    ];
    TranslationMap::from_terms("en", &terms)
}

/// German labels; Pneumonia and the IgM term are deliberately absent.
pub fn german_labels() -> TranslationMap {
    let mut map = TranslationMap::new("de");
    for (term, label) in [
        ("HP:0001272", "Zerebelläre Atrophie"),
        ("HP:0001251", "Ataxie"),
        ("HP:0031843", "Bradyphrenie"),
        ("HP:0100259", "Postaxiale Polydaktylie"),
        ("HP:0002240", "Hepatomegalie"),
        ("HP:0001888", "Lymphopenie"),
        ("HP:0002720", "Verminderter IgA-Spiegel im Blut"),
    ] {
        map.insert(id(term), label);
    }
    map
}

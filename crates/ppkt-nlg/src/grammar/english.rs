use super::{
    DescriptionTemplates, FeatureTemplates, Gender, GenderForms, Grammar, Inflection, Noun,
    OnsetPhrase, OnsetPhrases, Pronouns, SexNouns, SubjectNouns, UnitName, UnitNames,
};

pub(super) fn grammar() -> Grammar {
    Grammar {
        language: "en".to_string(),
        conjunction: "and".to_string(),
        features: FeatureTemplates {
            none: "no phenotypic abnormalities".to_string(),
            observed: "{items}. ".to_string(),
            excluded_single: "{item} was excluded.".to_string(),
            excluded_list: "The following symptoms were excluded: {items}.".to_string(),
            observed_and_excluded_single: "{observed}, and {excluded} was excluded.".to_string(),
            observed_and_excluded_plural: "{observed}, and {excluded} were excluded.".to_string(),
        },
        pronouns: Pronouns {
            female: "she".to_string(),
            male: "he".to_string(),
            unknown: "the individual".to_string(),
        },
        onsets: OnsetPhrases {
            iso_sentence: "At an age of {age}".to_string(),
            iso_clause: "at the age of {age}".to_string(),
            antenatal: phrase("During the antenatal period", "in the antenatal period"),
            embryonal: phrase("During the embryonal period", "in the embryonal period"),
            fetal: phrase("During the fetal period", "in the fetal period"),
            congenital: phrase("At birth", "at birth"),
            neonatal: phrase("During the neonatal period", "as a newborn"),
            infantile: phrase("During the infantile period", "as an infant"),
            childhood: phrase("During childhood", "as a child"),
            juvenile: phrase("During the juvenile period", "as an adolescent"),
            adult: phrase("During adulthood", "as an adult"),
            young_adult: phrase("During young adulthood", "as a young adult"),
            middle_age: phrase("During middle age", "in middle age"),
            late: phrase("During late adulthood", "at an advanced age"),
        },
        units: UnitNames {
            modifier: "{n}-{unit}-old{ending}".to_string(),
            year: unit("year", "years", "year"),
            month: unit("month", "months", "month"),
            week: unit("week", "weeks", "week"),
            day: unit("day", "days", "day"),
        },
        genders: GenderForms {
            vowel_article: Some("an".to_string()),
            masculine: who(),
            feminine: who(),
            neuter: who(),
        },
        subjects: SubjectNouns {
            unspecified: nouns(Some("female"), Some("male"), None),
            prenatal: nouns(Some("female fetus"), Some("male fetus"), Some("fetus")),
            newborn: nouns(Some("female newborn"), Some("male newborn"), Some("newborn")),
            infant: nouns(Some("female infant"), Some("male infant"), Some("infant")),
            child: nouns(Some("girl"), Some("boy"), Some("child")),
            adolescent: nouns(
                Some("adolescent girl"),
                Some("adolescent boy"),
                Some("adolescent"),
            ),
            adult: nouns(Some("woman"), Some("man"), Some("adult")),
        },
        description: DescriptionTemplates {
            subject: "{article} {age} {noun}".to_string(),
            with_subject: "The proband was {subject} {relative} presented {onset} with".to_string(),
            without_subject: "The proband presented {onset} with".to_string(),
        },
    }
}

fn phrase(sentence: &str, clause: &str) -> OnsetPhrase {
    OnsetPhrase {
        sentence: sentence.to_string(),
        clause: clause.to_string(),
    }
}

fn unit(singular: &str, plural: &str, adjective: &str) -> UnitName {
    UnitName {
        singular: singular.to_string(),
        plural: plural.to_string(),
        adjective: adjective.to_string(),
    }
}

fn who() -> Inflection {
    Inflection {
        article: "a".to_string(),
        relative: "who".to_string(),
        ending: String::new(),
    }
}

// English nouns carry no grammatical gender worth tracking.
fn nouns(female: Option<&str>, male: Option<&str>, unknown: Option<&str>) -> SexNouns {
    let noun = |text: &str| Noun {
        text: text.to_string(),
        gender: Gender::Neuter,
    };
    SexNouns {
        female: female.map(noun),
        male: male.map(noun),
        unknown: unknown.map(noun),
    }
}

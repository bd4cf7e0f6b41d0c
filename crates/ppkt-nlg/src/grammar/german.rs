use super::{
    DescriptionTemplates, FeatureTemplates, Gender, GenderForms, Grammar, Inflection, Noun,
    OnsetPhrase, OnsetPhrases, Pronouns, SexNouns, SubjectNouns, UnitName, UnitNames,
};

pub(super) fn grammar() -> Grammar {
    Grammar {
        language: "de".to_string(),
        conjunction: "und".to_string(),
        features: FeatureTemplates {
            none: "keine phänotypischen Abnormalitäten".to_string(),
            observed: "{items}. ".to_string(),
            excluded_single: "{item} wurde ausgeschlossen.".to_string(),
            excluded_list: "Die folgenden Symptome wurden ausgeschlossen: {items}.".to_string(),
            observed_and_excluded_single: "{observed}, und {excluded} wurde ausgeschlossen."
                .to_string(),
            observed_and_excluded_plural: "{observed}, und {excluded} wurden ausgeschlossen."
                .to_string(),
        },
        pronouns: Pronouns {
            female: "sie".to_string(),
            male: "er".to_string(),
            unknown: "die Person".to_string(),
        },
        onsets: OnsetPhrases {
            iso_sentence: "Im Alter von {age}".to_string(),
            iso_clause: "im Alter von {age}".to_string(),
            antenatal: phrase("Vorgeburtlich", "vorgeburtlich"),
            embryonal: phrase("In der Embryonalperiode", "in der Embryonalperiode"),
            fetal: phrase("In der Fetalperiode", "in der Fetalperiode"),
            congenital: phrase("Bei der Geburt", "bei der Geburt"),
            neonatal: phrase("In der Neugeborenenperiode", "in der Neugeborenenperiode"),
            infantile: phrase("Im Säuglingsalter", "im Säuglingsalter"),
            childhood: phrase("Im Kindesalter", "im Kindesalter"),
            juvenile: phrase("Im Jugendalter", "im Jugendalter"),
            adult: phrase("Im Erwachsenenalter", "im Erwachsenenalter"),
            young_adult: phrase("Im jungen Erwachsenenalter", "im jungen Erwachsenenalter"),
            middle_age: phrase("Im mittleren Lebensalter", "im mittleren Lebensalter"),
            late: phrase("Im höheren Lebensalter", "im höheren Lebensalter"),
        },
        // Plural forms are dative: "im Alter von 3 Tagen".
        units: UnitNames {
            modifier: "{n}-{unit}{ending}".to_string(),
            year: unit("Jahr", "Jahren", "jährig"),
            month: unit("Monat", "Monaten", "monatig"),
            week: unit("Woche", "Wochen", "wöchig"),
            day: unit("Tag", "Tagen", "tägig"),
        },
        genders: GenderForms {
            vowel_article: None,
            masculine: inflection("ein", "der", "er"),
            feminine: inflection("eine", "die", "e"),
            neuter: inflection("ein", "das", "es"),
        },
        subjects: SubjectNouns {
            unspecified: SexNouns {
                female: noun("weibliche Person", Gender::Feminine),
                male: noun("männliche Person", Gender::Feminine),
                unknown: None,
            },
            prenatal: SexNouns {
                female: noun("weiblicher Fetus", Gender::Masculine),
                male: noun("männlicher Fetus", Gender::Masculine),
                unknown: noun("Fetus", Gender::Masculine),
            },
            newborn: SexNouns {
                female: noun("weibliches Neugeborenes", Gender::Neuter),
                male: noun("männliches Neugeborenes", Gender::Neuter),
                unknown: noun("Neugeborenes", Gender::Neuter),
            },
            infant: SexNouns {
                female: noun("weiblicher Säugling", Gender::Masculine),
                male: noun("männlicher Säugling", Gender::Masculine),
                unknown: noun("Säugling", Gender::Masculine),
            },
            child: SexNouns {
                female: noun("Mädchen", Gender::Neuter),
                male: noun("Junge", Gender::Masculine),
                unknown: noun("Kind", Gender::Neuter),
            },
            adolescent: SexNouns {
                female: noun("Jugendliche", Gender::Feminine),
                male: noun("Jugendlicher", Gender::Masculine),
                unknown: noun("jugendliche Person", Gender::Feminine),
            },
            adult: SexNouns {
                female: noun("Frau", Gender::Feminine),
                male: noun("Mann", Gender::Masculine),
                unknown: noun("erwachsene Person", Gender::Feminine),
            },
        },
        description: DescriptionTemplates {
            subject: "{article} {age} {noun}".to_string(),
            with_subject:
                "Der Proband war {subject}, {relative} sich {onset} mit den folgenden Symptomen vorgestellt hat:"
                    .to_string(),
            without_subject:
                "Der Proband hat sich {onset} mit den folgenden Symptomen vorgestellt:".to_string(),
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

fn inflection(article: &str, relative: &str, ending: &str) -> Inflection {
    Inflection {
        article: article.to_string(),
        relative: relative.to_string(),
        ending: ending.to_string(),
    }
}

fn noun(text: &str, gender: Gender) -> Option<Noun> {
    Some(Noun {
        text: text.to_string(),
        gender,
    })
}

//! Ages and onsets as recorded in phenopackets.
//!
//! A phenopacket age is either an explicit ISO 8601 duration (`P46Y`,
//! `P4M`, `P3D`) or one of the HPO onset categories (congenital, infantile,
//! ...). Prose generation dispatches on [`PhenopacketAge`] with exhaustive
//! matches, so adding a category forces every renderer to handle it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ModelError, Result};
use crate::term::TermId;

/// Calendar unit of an ISO 8601 duration component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
}

/// Age given as an ISO 8601 duration of the form `PnYnMnWnD`.
///
/// A date part is required. Time components (`P3DT4H`) are accepted after
/// it but carry no weight in prose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iso8601Age {
    raw: String,
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
}

impl Iso8601Age {
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let Some(body) = trimmed.strip_prefix('P') else {
            return Err(ModelError::duration(value, "missing 'P' designator"));
        };
        let (date, time) = match body.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (body, None),
        };

        let mut age = Self {
            raw: trimmed.to_string(),
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
        };
        let mut last_rank = 0usize;
        let date_parts = components(value, date)?;
        if date_parts.is_empty() {
            return Err(ModelError::duration(value, "no date components"));
        }
        for (amount, designator) in date_parts {
            let (slot, rank) = match designator {
                'Y' => (&mut age.years, 1),
                'M' => (&mut age.months, 2),
                'W' => (&mut age.weeks, 3),
                'D' => (&mut age.days, 4),
                other => {
                    return Err(ModelError::duration(
                        value,
                        format!("unexpected date designator '{other}'"),
                    ));
                }
            };
            if rank <= last_rank {
                return Err(ModelError::duration(value, "components out of order"));
            }
            last_rank = rank;
            *slot = amount;
        }
        if let Some(time) = time {
            let parts = components(value, time)?;
            if parts.is_empty() {
                return Err(ModelError::duration(value, "empty time part"));
            }
            if let Some((_, designator)) = parts.iter().find(|(_, d)| !matches!(*d, 'H' | 'M' | 'S'))
            {
                return Err(ModelError::duration(
                    value,
                    format!("unexpected time designator '{designator}'"),
                ));
            }
        }
        Ok(age)
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Non-zero calendar components, largest unit first.
    pub fn components(&self) -> Vec<(u32, DurationUnit)> {
        [
            (self.years, DurationUnit::Year),
            (self.months, DurationUnit::Month),
            (self.weeks, DurationUnit::Week),
            (self.days, DurationUnit::Day),
        ]
        .into_iter()
        .filter(|(amount, _)| *amount > 0)
        .collect()
    }

    /// Largest non-zero component; `(0, Day)` for an all-zero duration.
    pub fn dominant_unit(&self) -> (u32, DurationUnit) {
        self.components()
            .first()
            .copied()
            .unwrap_or((0, DurationUnit::Day))
    }

    /// Stage from the whole duration, so `P400D` and `P14M` both count as
    /// more than a year.
    pub fn life_stage(&self) -> LifeStage {
        let length = self.centidays();
        if length >= 18 * CENTIDAYS_PER_YEAR {
            LifeStage::Adult
        } else if length >= 13 * CENTIDAYS_PER_YEAR {
            LifeStage::Adolescent
        } else if length >= CENTIDAYS_PER_YEAR {
            LifeStage::Child
        } else if length >= 28 * CENTIDAYS_PER_DAY {
            LifeStage::Infant
        } else {
            LifeStage::Newborn
        }
    }

    /// Approximate length in hundredths of a day (Julian year, mean month).
    fn centidays(&self) -> u64 {
        u64::from(self.years) * CENTIDAYS_PER_YEAR
            + u64::from(self.months) * CENTIDAYS_PER_MONTH
            + u64::from(self.weeks) * 7 * CENTIDAYS_PER_DAY
            + u64::from(self.days) * CENTIDAYS_PER_DAY
    }
}

const CENTIDAYS_PER_DAY: u64 = 100;
const CENTIDAYS_PER_MONTH: u64 = 3_044;
const CENTIDAYS_PER_YEAR: u64 = 36_525;

/// Split `12Y3M` into `[(12, 'Y'), (3, 'M')]`.
fn components(value: &str, part: &str) -> Result<Vec<(u32, char)>> {
    let mut out = Vec::new();
    let mut digits = String::new();
    for c in part.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if digits.is_empty() {
            return Err(ModelError::duration(
                value,
                format!("designator '{c}' without a number"),
            ));
        }
        let amount = digits
            .parse::<u32>()
            .map_err(|e| ModelError::duration(value, e.to_string()))?;
        out.push((amount, c));
        digits.clear();
    }
    if !digits.is_empty() {
        return Err(ModelError::duration(value, "trailing number without designator"));
    }
    Ok(out)
}

impl fmt::Display for Iso8601Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Iso8601Age {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iso8601Age {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Iso8601Age> for String {
    fn from(age: Iso8601Age) -> Self {
        age.raw
    }
}

/// HPO onset categories (subclasses of `HP:0003674` Onset).
///
/// Deserializes from its name (`"infantile"`), its term id
/// (`"HP:0003593"`) or a phenopacket ontology class
/// (`{"id": "HP:0003593", "label": "Infantile onset"}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HpoOnsetAge {
    Antenatal,
    Embryonal,
    Fetal,
    Congenital,
    Neonatal,
    Infantile,
    Childhood,
    Juvenile,
    Adult,
    YoungAdult,
    MiddleAge,
    Late,
}

impl HpoOnsetAge {
    pub const ALL: [HpoOnsetAge; 12] = [
        HpoOnsetAge::Antenatal,
        HpoOnsetAge::Embryonal,
        HpoOnsetAge::Fetal,
        HpoOnsetAge::Congenital,
        HpoOnsetAge::Neonatal,
        HpoOnsetAge::Infantile,
        HpoOnsetAge::Childhood,
        HpoOnsetAge::Juvenile,
        HpoOnsetAge::Adult,
        HpoOnsetAge::YoungAdult,
        HpoOnsetAge::MiddleAge,
        HpoOnsetAge::Late,
    ];

    pub fn congenital() -> PhenopacketAge {
        PhenopacketAge::HpoOnset(Self::Congenital)
    }

    pub fn infantile() -> PhenopacketAge {
        PhenopacketAge::HpoOnset(Self::Infantile)
    }

    pub fn childhood() -> PhenopacketAge {
        PhenopacketAge::HpoOnset(Self::Childhood)
    }

    pub fn juvenile() -> PhenopacketAge {
        PhenopacketAge::HpoOnset(Self::Juvenile)
    }

    /// HPO identifier of the onset class.
    pub fn term_id(self) -> &'static str {
        match self {
            Self::Antenatal => "HP:0030674",
            Self::Embryonal => "HP:0011460",
            Self::Fetal => "HP:0011461",
            Self::Congenital => "HP:0003577",
            Self::Neonatal => "HP:0003623",
            Self::Infantile => "HP:0003593",
            Self::Childhood => "HP:0011463",
            Self::Juvenile => "HP:0003621",
            Self::Adult => "HP:0003581",
            Self::YoungAdult => "HP:0011462",
            Self::MiddleAge => "HP:0003596",
            Self::Late => "HP:0003584",
        }
    }

    /// Serialized name, e.g. `young_adult`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Antenatal => "antenatal",
            Self::Embryonal => "embryonal",
            Self::Fetal => "fetal",
            Self::Congenital => "congenital",
            Self::Neonatal => "neonatal",
            Self::Infantile => "infantile",
            Self::Childhood => "childhood",
            Self::Juvenile => "juvenile",
            Self::Adult => "adult",
            Self::YoungAdult => "young_adult",
            Self::MiddleAge => "middle_age",
            Self::Late => "late",
        }
    }

    pub fn from_term_id(id: &TermId) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|onset| onset.term_id() == id.as_str())
            .ok_or_else(|| ModelError::UnknownOnset { id: id.to_string() })
    }

    pub fn life_stage(self) -> LifeStage {
        match self {
            Self::Antenatal | Self::Embryonal | Self::Fetal => LifeStage::Prenatal,
            Self::Congenital | Self::Neonatal => LifeStage::Newborn,
            Self::Infantile => LifeStage::Infant,
            Self::Childhood => LifeStage::Child,
            Self::Juvenile => LifeStage::Adolescent,
            Self::Adult | Self::YoungAdult | Self::MiddleAge | Self::Late => LifeStage::Adult,
        }
    }
}

impl FromStr for HpoOnsetAge {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|onset| onset.name() == s || onset.term_id() == s)
            .ok_or_else(|| ModelError::UnknownOnset { id: s.to_string() })
    }
}

impl<'de> Deserialize<'de> for HpoOnsetAge {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Class { id: TermId },
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Class { id } => Self::from_term_id(&id).map_err(de::Error::custom),
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}

/// Coarse developmental stage used to pick nouns such as "infant" or "woman".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Prenatal,
    Newborn,
    Infant,
    Child,
    Adolescent,
    Adult,
}

/// Age or onset: exactly one representation is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhenopacketAge {
    Iso8601(Iso8601Age),
    HpoOnset(HpoOnsetAge),
}

impl PhenopacketAge {
    pub fn iso8601(value: &str) -> Result<Self> {
        Iso8601Age::parse(value).map(Self::Iso8601)
    }

    pub fn life_stage(&self) -> LifeStage {
        match self {
            Self::Iso8601(age) => age.life_stage(),
            Self::HpoOnset(onset) => onset.life_stage(),
        }
    }
}

impl From<Iso8601Age> for PhenopacketAge {
    fn from(age: Iso8601Age) -> Self {
        Self::Iso8601(age)
    }
}

impl From<HpoOnsetAge> for PhenopacketAge {
    fn from(onset: HpoOnsetAge) -> Self {
        Self::HpoOnset(onset)
    }
}

//! Phenopacket model types consumed by the prose generators.
//!
//! Values here arrive already validated from whatever parsed the source
//! record; the constructors only check the shape of identifiers and
//! durations.

pub mod age;
pub mod error;
pub mod individual;
pub mod term;

pub use age::{DurationUnit, HpoOnsetAge, Iso8601Age, LifeStage, PhenopacketAge};
pub use error::{ModelError, Result};
pub use individual::{Individual, PhenopacketSex};
pub use term::{OntologyTerm, TermId};

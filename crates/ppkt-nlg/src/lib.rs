//! Natural language generation for phenopacket individuals.
//!
//! Turns an [`Individual`](ppkt_model::Individual) into locale-specific
//! prose: an introductory sentence about the subject and a sentence listing
//! observed and excluded phenotypic features.
//!
//! # Overview
//!
//! - **Grammar tables** ([`Grammar`], [`Locale`]): every word and template a
//!   language needs; English and German are built in.
//! - **Translations** ([`TranslationProvider`], [`TranslationMap`]): term
//!   labels in the target language. Partial coverage is expected.
//! - **Formatters** ([`FeatureFormatter`], [`IndividualFormatter`]) and the
//!   [`Narrator`] facade that bundles them.
//! - **Diagnostics** ([`MissingTranslations`]): terms that had no label.
//!
//! # Example
//!
//! ```ignore
//! use ppkt_nlg::{Locale, Narrator, TranslationMap};
//!
//! let german = TranslationMap::from_babelon_path(path, "de")?;
//! let narrator = Narrator::for_locale(Locale::De, &german);
//! let rendered = narrator.narrate(&individual)?;
//! println!("{}", rendered.text);
//! for entry in rendered.missing.iter() {
//!     eprintln!("missing translation: {entry}");
//! }
//! ```

mod error;
mod features;
mod individual;
mod join;
mod missing;
mod narrator;
mod options;
mod translation;

pub mod grammar;

pub use error::{NlgError, Result};
pub use features::{FeatureFormatter, Rendered};
pub use grammar::{Grammar, Locale};
pub use individual::IndividualFormatter;
pub use join::oxford_comma_list;
pub use missing::MissingTranslations;
pub use narrator::{NarrationSession, Narrator};
pub use options::{FormatOptions, MissingLabelPolicy};
pub use translation::{TranslationMap, TranslationProvider};

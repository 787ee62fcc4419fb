//! The three mock document fixtures and the entry points that render them.
//!
//! Fixture content is fixed: names, policy numbers and addresses are
//! literal test constants, overwritten on every run. Only the policy date
//! is taken from the clock.

mod insurance;
mod state_id;
mod will;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use oxidize_pdf::Color;

use crate::compose::compose;
use crate::error::Result;
use crate::template::DocumentTemplate;

/// One point-size inch, for layout literals expressed in inches.
const INCH: f64 = 72.0;

fn light_grey() -> Color {
    Color::gray(0.83)
}

/// The fixed set of mock documents this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    LifeInsurancePolicy,
    LastWillAndTestament,
    StateIdCard,
}

impl DocumentKind {
    /// All kinds, in generation order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::LifeInsurancePolicy,
        DocumentKind::LastWillAndTestament,
        DocumentKind::StateIdCard,
    ];

    /// Output file name for this kind, fixed and overwritten on each run.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::LifeInsurancePolicy => "Life_Insurance_Policy.pdf",
            DocumentKind::LastWillAndTestament => "Last_Will_and_Testament.pdf",
            DocumentKind::StateIdCard => "State_ID_Card.pdf",
        }
    }

    /// Build the document template for this kind.
    pub fn template(self) -> Result<DocumentTemplate> {
        match self {
            DocumentKind::LifeInsurancePolicy => insurance::template(),
            DocumentKind::LastWillAndTestament => will::template(),
            DocumentKind::StateIdCard => state_id::template(),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::LifeInsurancePolicy => "life insurance policy",
            DocumentKind::LastWillAndTestament => "last will and testament",
            DocumentKind::StateIdCard => "state ID card",
        };
        f.write_str(name)
    }
}

/// Render one fixture document into `out_dir`, creating the directory if
/// needed, and return the path written.
pub fn generate(kind: DocumentKind, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let template = kind.template()?;
    let mut doc = compose(&template)?;
    let path = out_dir.join(template.file_name());
    doc.save(&path)?;
    Ok(path)
}

/// Render every fixture document into `out_dir`, in order. A failure aborts
/// the remaining builds.
pub fn generate_all(out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    DocumentKind::ALL
        .iter()
        .map(|kind| generate(*kind, out_dir))
        .collect()
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vault_fixtures::{generate, DocumentKind};

#[derive(Parser)]
#[command(
    name = "vault-fixtures",
    about = "Generate mock PDF documents for vault testing",
    version
)]
struct Cli {
    /// Output directory for the generated documents
    #[arg(short, long, default_value = "documents")]
    output_dir: PathBuf,

    /// Document kinds to generate (all three when omitted)
    #[arg(value_enum)]
    kinds: Vec<KindArg>,
}

#[derive(ValueEnum, Clone, Copy)]
enum KindArg {
    /// Life insurance policy
    Insurance,
    /// Last will and testament
    Will,
    /// State ID card
    StateId,
}

impl From<KindArg> for DocumentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Insurance => DocumentKind::LifeInsurancePolicy,
            KindArg::Will => DocumentKind::LastWillAndTestament,
            KindArg::StateId => DocumentKind::StateIdCard,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let kinds: Vec<DocumentKind> = if cli.kinds.is_empty() {
        DocumentKind::ALL.to_vec()
    } else {
        cli.kinds.iter().map(|kind| (*kind).into()).collect()
    };

    println!("Creating mock vault documents...");

    for kind in kinds {
        let path = generate(kind, &cli.output_dir)
            .with_context(|| format!("failed to generate the {kind}"))?;
        println!("Created: {}", path.display());
    }

    println!("\nDocuments created successfully!");
    Ok(())
}

//! CLI command definitions

use billed_domain::BillForm;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for submitted bills
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON output
    Json,
}

impl From<billed_domain::OutputFormat> for OutputFormat {
    fn from(format: billed_domain::OutputFormat) -> Self {
        match format {
            billed_domain::OutputFormat::Text => OutputFormat::Text,
            billed_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for billed
#[derive(Parser, Debug)]
#[command(name = "billed")]
#[command(author, version, about = "File expense reports with their receipts")]
#[command(long_about = r#"
billed submits expense reports to the bill store.

A submission has two steps:
1. Upload: the receipt (jpg, jpeg or png) is uploaded and reserves a bill id
2. Submit: the form fields are stored on that bill, which starts as "pending"

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./billed.toml       Project-level config
3. ~/.config/billed/config.toml   Global config

Example:
  billed submit facture.png --type Transports --name "Vol Paris Londres" \
      --amount 348 --date 2004-04-04 --vat 70 --pct 20
  billed check facture.png notes.pdf
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Email of the connected employee (overrides the config file)
    #[arg(long, global = true, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a receipt and submit a new bill
    Submit(SubmitArgs),
    /// Check whether receipt file names have an accepted format
    Check {
        /// File names to check
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,
    },
}

/// Fields of the new-bill form
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Receipt image (jpg, jpeg or png)
    #[arg(value_name = "RECEIPT")]
    pub receipt: PathBuf,

    /// Expense type, e.g. "Transports" or "Hôtel et logement"
    #[arg(long = "type", value_name = "TYPE")]
    pub expense_type: String,

    /// Expense name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Amount including taxes
    #[arg(long)]
    pub amount: String,

    /// Date of the expense (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// VAT amount
    #[arg(long, default_value = "")]
    pub vat: String,

    /// VAT percentage (defaults to 20)
    #[arg(long, default_value = "")]
    pub pct: String,

    /// Free-form commentary
    #[arg(long, default_value = "")]
    pub commentary: String,

    /// Use an in-memory store instead of the API
    #[arg(long)]
    pub dry_run: bool,
}

impl SubmitArgs {
    /// Form fields as the user typed them
    pub fn to_form(&self) -> BillForm {
        BillForm::new()
            .with_expense_type(&self.expense_type)
            .with_name(&self.name)
            .with_amount(&self.amount)
            .with_date(&self.date)
            .with_vat(&self.vat)
            .with_pct(&self.pct)
            .with_commentary(&self.commentary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let cli = Cli::try_parse_from([
            "billed",
            "submit",
            "facture.png",
            "--type",
            "Transports",
            "--amount",
            "348",
            "--date",
            "2004-04-04",
            "--email",
            "a@a",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.email.as_deref(), Some("a@a"));
        assert_eq!(cli.verbose, 2);
        let Some(Command::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.receipt, PathBuf::from("facture.png"));
        assert!(!args.dry_run);

        let form = args.to_form();
        assert_eq!(form.expense_type, "Transports");
        assert_eq!(form.amount, "348");
        assert_eq!(form.pct, "");
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["billed", "check", "a.png", "b.pdf"]).unwrap();
        let Some(Command::Check { files }) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(files, vec!["a.png", "b.pdf"]);
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["billed", "check"]).is_err());
    }
}

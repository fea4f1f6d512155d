//! Console output formatter for bills and receipt checks

use billed_domain::{Bill, INVALID_FORMAT_MESSAGE, is_accepted_format};
use colored::Colorize;
use serde_json::json;

/// Formats submission results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary of a submitted bill
    pub fn format_bill(bill: &Bill, bill_id: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Bill {}", bill_id)));
        output.push('\n');

        let rows = [
            ("Email", bill.email().to_string()),
            ("Type", bill.expense_type().to_string()),
            ("Name", bill.name().to_string()),
            ("Date", bill.date().to_string()),
            ("Amount", format!("{} €", bill.amount())),
            ("VAT", format!("{} ({}%)", bill.vat(), bill.pct())),
            ("Receipt", bill.file_name().unwrap_or("-").to_string()),
            ("Status", bill.status().to_string()),
        ];
        for (label, value) in rows {
            output.push_str(&format!("{:>10} {}\n", format!("{}:", label).cyan().bold(), value));
        }

        if let Some(commentary) = bill.commentary() {
            output.push_str(&format!("\n{}\n{}\n", "Commentary:".cyan().bold(), commentary));
        }

        output
    }

    /// Submitted bill as JSON, with its identifier
    pub fn format_bill_json(bill: &Bill, bill_id: &str) -> String {
        let mut value = serde_json::to_value(bill).unwrap_or_else(|_| json!({}));
        if let Some(object) = value.as_object_mut() {
            object.insert("id".to_string(), json!(bill_id));
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    /// One line per file name, accepted or rejected
    pub fn format_check(files: &[String]) -> String {
        let mut output = String::new();
        for file in files {
            if is_accepted_format(file) {
                output.push_str(&format!("{} {}\n", "accepted".green().bold(), file));
            } else {
                output.push_str(&format!(
                    "{} {} ({})\n",
                    "rejected".red().bold(),
                    file,
                    INVALID_FORMAT_MESSAGE
                ));
            }
        }
        output
    }

    /// File check results as JSON
    pub fn format_check_json(files: &[String]) -> String {
        let results: Vec<_> = files
            .iter()
            .map(|file| json!({ "file": file, "accepted": is_accepted_format(file) }))
            .collect();
        serde_json::to_string_pretty(&results).unwrap_or_default()
    }

    /// Error line for stderr
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{}\n{}", line.dimmed(), title.bold(), line.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billed_domain::{BillDraft, BillForm, CreatedFile, Session};

    fn bill() -> Bill {
        let mut draft = BillDraft::new();
        draft.fill(
            CreatedFile {
                file_url: "https://x".to_string(),
                key: "123".to_string(),
            },
            "image.png",
        );
        BillForm::new()
            .with_expense_type("Transports")
            .with_name("Vol Paris Londres")
            .with_amount("348")
            .with_date("2004-04-04")
            .with_vat("70")
            .with_commentary("séminaire")
            .assemble(&Session::employee("a@a").unwrap(), &draft)
            .unwrap()
    }

    #[test]
    fn test_format_bill_contains_fields() {
        let output = ConsoleFormatter::format_bill(&bill(), "123");
        assert!(output.contains("Bill 123"));
        assert!(output.contains("Vol Paris Londres"));
        assert!(output.contains("348 €"));
        assert!(output.contains("70 (20%)"));
        assert!(output.contains("image.png"));
        assert!(output.contains("pending"));
        assert!(output.contains("séminaire"));
    }

    #[test]
    fn test_format_bill_json_includes_id() {
        let output = ConsoleFormatter::format_bill_json(&bill(), "123");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], "123");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["fileName"], "image.png");
    }

    #[test]
    fn test_format_check() {
        let files = vec!["a.png".to_string(), "b.pdf".to_string()];
        let output = ConsoleFormatter::format_check(&files);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("accepted") && lines[0].contains("a.png"));
        assert!(lines[1].contains("rejected") && lines[1].contains(INVALID_FORMAT_MESSAGE));
    }

    #[test]
    fn test_format_check_json() {
        let files = vec!["report.v2.png".to_string(), "test.pdf".to_string()];
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_check_json(&files)).unwrap();
        assert_eq!(value[0]["accepted"], true);
        assert_eq!(value[1]["accepted"], false);
    }
}

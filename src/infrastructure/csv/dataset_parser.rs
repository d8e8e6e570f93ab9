// ============================================================
// DATASET PARSER
// ============================================================
// Raw CSV text -> validated laptop records, never raises

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::field_rules::{Field, HeaderMap};
use crate::domain::laptop::Laptop;

// parseFloat-style prefix match: sign, digits, optional fraction/exponent.
static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

/// Header-sniffing CSV parser for laptop listings.
///
/// Failure is always expressed in the output: structural problems (empty
/// input, no data rows, missing mandatory columns) yield an empty vec, and a
/// bad row is dropped after a diagnostic. No input makes `parse` error.
pub struct DatasetParser;

impl Default for DatasetParser {
    fn default() -> Self {
        Self
    }
}

impl DatasetParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode an uploaded payload to text: UTF-8 when valid, lossy otherwise.
    pub fn decode_bytes(bytes: &[u8]) -> String {
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
        if had_errors {
            debug!("upload contained invalid UTF-8; decoded lossily");
        }
        text.into_owned()
    }

    /// Parse raw CSV text into laptop records.
    pub fn parse(&self, text: &str) -> Vec<Laptop> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        // Zero-length lines are dropped here; whitespace-only lines survive
        // and still consume a line index below.
        let lines: Vec<&str> = trimmed
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < 2 {
            return Vec::new();
        }

        let header_line = lines[0].strip_prefix('\u{feff}').unwrap_or(lines[0]);
        let headers: Vec<String> = split_quoted_line(header_line)
            .iter()
            .map(|token| strip_surrounding_quotes(token).trim().to_lowercase())
            .collect();

        let map = HeaderMap::from_headers(&headers);
        if !map.has_required_fields() {
            warn!(
                ?headers,
                "could not find mandatory Company/Price columns; ingestion aborted"
            );
            return Vec::new();
        }

        let mut laptops = Vec::new();

        for (index, raw_line) in lines.iter().enumerate().skip(1) {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let row: Vec<String> = split_quoted_line(line)
                .iter()
                .map(|cell| strip_surrounding_quotes(cell).trim().to_string())
                .collect();

            let laptop = Laptop {
                id: index,
                company: text_field(&row, map.get(Field::Company), "Unknown"),
                type_name: text_field(&row, map.get(Field::TypeName), "Unknown"),
                inches: float_field(&row, map.get(Field::Inches)),
                screen_resolution: text_field(&row, map.get(Field::ScreenResolution), ""),
                cpu: text_field(&row, map.get(Field::Cpu), ""),
                ram: numeric_field(&row, map.get(Field::Ram)),
                memory: text_field(&row, map.get(Field::Memory), ""),
                gpu: text_field(&row, map.get(Field::Gpu), ""),
                op_sys: text_field(&row, map.get(Field::OpSys), ""),
                weight: numeric_field(&row, map.get(Field::Weight)),
                price: numeric_field(&row, map.get(Field::Price)),
            };

            if laptop.price > 0.0 {
                laptops.push(laptop);
            } else {
                debug!(row = index, "dropped row with non-positive price");
            }
        }

        debug!(records = laptops.len(), "dataset parsed");
        laptops
    }
}

/// Split on commas, treating a comma inside a double-quoted region as data.
/// Quotes themselves stay in the cell; stripping happens separately and only
/// one level deep (no RFC4180 escaped-quote unescaping).
fn split_quoted_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

fn strip_surrounding_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}

fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| row.get(i)).map(String::as_str)
}

/// Mapped cell when present and non-empty, otherwise the field's default.
fn text_field(row: &[String], index: Option<usize>, default: &str) -> String {
    match cell(row, index) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Plain float field: prefix parse of the mapped cell, 0 when unmapped,
/// missing or unparsable.
fn float_field(row: &[String], index: Option<usize>) -> f64 {
    match index {
        Some(_) => parse_float_prefix(cell(row, index).unwrap_or("0")),
        None => 0.0,
    }
}

/// Unit-suffixed or currency-prefixed field ("8GB", "1.37kg", "₹50,000"):
/// strip everything that is not a digit, dot or minus, then prefix-parse.
fn numeric_field(row: &[String], index: Option<usize>) -> f64 {
    match index {
        Some(_) => clean_number(cell(row, index).unwrap_or("")),
        None => 0.0,
    }
}

fn clean_number(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_float_prefix(&cleaned)
}

fn parse_float_prefix(value: &str) -> f64 {
    FLOAT_PREFIX
        .find(value.trim())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ROW: &str = "\
,Company,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price
0,Apple,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,macOS,1.37kg,71378.6832";

    #[test]
    fn test_parse_sample_row() {
        let laptops = DatasetParser::new().parse(SAMPLE_ROW);

        assert_eq!(laptops.len(), 1);
        let laptop = &laptops[0];
        assert_eq!(laptop.id, 1);
        assert_eq!(laptop.company, "Apple");
        assert_eq!(laptop.type_name, "Ultrabook");
        assert_eq!(laptop.inches, 13.3);
        assert_eq!(laptop.ram, 8.0);
        assert_eq!(laptop.memory, "128GB SSD");
        assert_eq!(laptop.op_sys, "macOS");
        assert_eq!(laptop.weight, 1.37);
        assert_eq!(laptop.price, 71378.6832);
    }

    #[test]
    fn test_empty_input() {
        let parser = DatasetParser::new();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("   \n  \n").is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(DatasetParser::new().parse("Company,Price").is_empty());
    }

    #[test]
    fn test_missing_mandatory_columns() {
        let parser = DatasetParser::new();
        // No company-like header.
        assert!(parser.parse("Type,Price\nNotebook,100").is_empty());
        // No price-like header.
        assert!(parser.parse("Company,Ram\nDell,8GB").is_empty());
    }

    #[test]
    fn test_rows_with_non_positive_price_are_dropped() {
        let input = "Company,Price\nDell,500\nHP,0\nAcer,-20\nAsus,n/a\nLenovo,700";
        let laptops = DatasetParser::new().parse(input);

        let companies: Vec<&str> = laptops.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(companies, vec!["Dell", "Lenovo"]);
        assert!(laptops.iter().all(|l| l.price > 0.0));
    }

    #[test]
    fn test_ids_are_line_indices_not_renumbered() {
        let input = "Company,Price\nDell,500\nHP,0\nLenovo,700";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops[0].id, 1);
        assert_eq!(laptops[1].id, 3);
    }

    #[test]
    fn test_quoted_comma_is_not_a_delimiter() {
        let input = "Company,Type,Price\n\"Dell, Inc.\",Notebook,500";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops[0].company, "Dell, Inc.");
        assert_eq!(laptops[0].type_name, "Notebook");
        assert_eq!(laptops[0].price, 500.0);
    }

    #[test]
    fn test_bom_is_stripped_from_header() {
        let input = "\u{feff}Company,Price\nDell,500";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].company, "Dell");
    }

    #[test]
    fn test_blank_header_cells_preserve_column_alignment() {
        // Leading unnamed index column, as in the sample dataset.
        let input = ",Company,Price\n0,Dell,500";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops[0].company, "Dell");
        assert_eq!(laptops[0].price, 500.0);
    }

    #[test]
    fn test_short_row_does_not_abort_parsing() {
        let input = "Company,Ram,Price\nDell\nHP,8GB,650";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].company, "HP");
        assert_eq!(laptops[0].id, 2);
    }

    #[test]
    fn test_missing_cells_default_per_field() {
        let input = "Company,Type,Ram,Gpu,Price\nDell,,,,500";
        let laptop = &DatasetParser::new().parse(input)[0];

        assert_eq!(laptop.type_name, "Unknown");
        assert_eq!(laptop.ram, 0.0);
        assert_eq!(laptop.gpu, "");
    }

    #[test]
    fn test_unit_and_currency_cleanup() {
        let input = "Company,Ram,Weight,Price\nDell,16GB,2.1kg,\"₹1,25,000\"";
        let laptop = &DatasetParser::new().parse(input)[0];

        assert_eq!(laptop.ram, 16.0);
        assert_eq!(laptop.weight, 2.1);
        assert_eq!(laptop.price, 125000.0);
    }

    #[test]
    fn test_mixed_storage_text_concatenates_digits() {
        // Inherent cleanNumber artifact, preserved on purpose.
        assert_eq!(clean_number("128GB SSD + 1TB HDD"), 1281.0);
        assert_eq!(clean_number("8GB"), 8.0);
        assert_eq!(clean_number(""), 0.0);
        assert_eq!(clean_number("n/a"), 0.0);
    }

    #[test]
    fn test_float_prefix_parse() {
        assert_eq!(parse_float_prefix("13.3"), 13.3);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("-4.5"), -4.5);
        assert_eq!(parse_float_prefix("abc"), 0.0);
        assert_eq!(parse_float_prefix(""), 0.0);
    }

    #[test]
    fn test_single_level_quote_stripping_only() {
        // No RFC4180 unescaping: inner doubled quotes stay.
        assert_eq!(strip_surrounding_quotes("\"a\"\"b\""), "a\"\"b");
        assert_eq!(strip_surrounding_quotes("\"open"), "open");
        assert_eq!(strip_surrounding_quotes("plain"), "plain");
    }

    #[test]
    fn test_whitespace_only_line_consumes_an_id() {
        let input = "Company,Price\nDell,500\n   \nHP,600";
        let laptops = DatasetParser::new().parse(input);

        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[1].id, 3);
    }

    #[test]
    fn test_decode_bytes_utf8_and_lossy() {
        assert_eq!(DatasetParser::decode_bytes(b"Company,Price"), "Company,Price");
        let decoded = DatasetParser::decode_bytes(&[0x43, 0xFF, 0x44]);
        assert!(decoded.contains('\u{fffd}'));
    }
}

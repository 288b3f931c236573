// File: crates/ascii-chart-cli/src/input.rs
// Summary: Splits the comma-separated command-line arguments into samples and labels.

use anyhow::{Context, Result};

/// Split one argument on commas. No quoting or escaping; an empty
/// argument still yields a single empty field.
pub fn split_fields(raw: &str) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut fields = Vec::new();
    for rec in rdr.records() {
        let rec = rec.context("splitting comma-separated input")?;
        fields.extend(rec.iter().map(str::to_string));
    }
    if fields.is_empty() {
        fields.push(String::new());
    }
    Ok(fields)
}

/// Parse every field as a number; the first bad token fails the whole input.
pub fn parse_prices(raw: &str) -> Result<Vec<f64>> {
    split_fields(raw)?
        .iter()
        .enumerate()
        .map(|(i, tok)| {
            tok.trim()
                .parse::<f64>()
                .with_context(|| format!("price #{} ({:?}) is not a number", i + 1, tok))
        })
        .collect()
}

/// Labels are kept verbatim.
pub fn parse_times(raw: &str) -> Result<Vec<String>> {
    split_fields(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prices() {
        assert_eq!(parse_prices("1,2.5, -3 ,4e2").unwrap(), vec![1.0, 2.5, -3.0, 400.0]);
    }

    #[test]
    fn bad_price_names_token() {
        let err = parse_prices("1,abc,3").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("price #2"), "{msg}");
        assert!(msg.contains("abc"), "{msg}");
    }

    #[test]
    fn empty_prices_are_an_error() {
        assert!(parse_prices("").is_err());
        assert!(parse_prices("1,,2").is_err());
    }

    #[test]
    fn times_are_split_verbatim() {
        assert_eq!(
            parse_times("2024-01-01 09:30:00,2024-01-01 09:31:00").unwrap(),
            vec!["2024-01-01 09:30:00", "2024-01-01 09:31:00"]
        );
        assert_eq!(parse_times(r#""a,b",c"#).unwrap(), vec![r#""a"#, r#"b""#, "c"]);
        assert_eq!(parse_times(" x , y").unwrap(), vec![" x ", " y"]);
    }

    #[test]
    fn empty_times_give_one_empty_label() {
        assert_eq!(parse_times("").unwrap(), vec![String::new()]);
    }
}

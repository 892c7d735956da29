use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::{map, opt};
use nom::sequence::preceded;
use nom::Parser;

use crate::PhoneticError;

/// One line of a word/keys fixture file : a word and its expected primary and
/// secondary keys under the four encoder configurations, in the column order
/// produced by the reference data (plain, vowels + exact, exact, vowels).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixtureRecord {
    /// Word to encode.
    pub word: String,
    /// `(primary, secondary)` for each configuration.
    pub keys: [(String, String); 4],
}

/// Recognize one comma-separated field. An empty field is a valid field.
fn field<'a>() -> impl nom::Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    map(opt(is_not(",\r\n")), |value: Option<&str>| {
        value.unwrap_or("")
    })
}

/// Recognize a `,primary,secondary` key pair.
fn key_pair<'a>(
) -> impl nom::Parser<&'a str, Output = (String, String), Error = nom::error::Error<&'a str>> {
    map(
        (
            preceded(char(','), field()),
            preceded(char(','), field()),
        ),
        |(primary, secondary): (&str, &str)| (primary.to_string(), secondary.to_string()),
    )
}

/// Recognize a full record line : a word followed by four key pairs.
fn record<'a>(
) -> impl nom::Parser<&'a str, Output = FixtureRecord, Error = nom::error::Error<&'a str>> {
    map(
        (field(), key_pair(), key_pair(), key_pair(), key_pair()),
        |(word, k1, k2, k3, k4): (&str, _, _, _, _)| FixtureRecord {
            word: word.to_string(),
            keys: [k1, k2, k3, k4],
        },
    )
}

/// Parse a word/keys fixture file. Blank lines and lines starting with `#`
/// are skipped.
///
/// # Parameter
///
/// * `content` : fixture file content.
///
/// # Return
///
/// The records in file order, or a [PhoneticError::ParseFixtureError] for the
/// first malformed line.
pub fn parse_fixture(content: &str) -> Result<Vec<FixtureRecord>, PhoneticError> {
    let mut records = Vec::new();

    for mut line in content.split('\n') {
        line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match record().parse(line) {
            Ok(("", parsed)) => records.push(parsed),
            Ok((remains, _)) => {
                return Err(PhoneticError::ParseFixtureError(format!(
                    "Line has more than 9 fields. Got : {} (unparsed : {})",
                    line, remains
                )))
            }
            Err(_) => {
                return Err(PhoneticError::ParseFixtureError(format!(
                    "Line doesn't follow format word followed by 4 key pairs. Got : {}",
                    line
                )))
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Metaphone3;

    #[test]
    fn test_parse_record() -> Result<(), PhoneticError> {
        let content = "SMITH,SM0,XMT,SMA0,XMAT,SM0,XMT,SMA0,XMAT";

        let records = parse_fixture(content)?;

        assert_eq!(
            records,
            vec![FixtureRecord {
                word: "SMITH".to_string(),
                keys: [
                    ("SM0".to_string(), "XMT".to_string()),
                    ("SMA0".to_string(), "XMAT".to_string()),
                    ("SM0".to_string(), "XMT".to_string()),
                    ("SMA0".to_string(), "XMAT".to_string()),
                ],
            }]
        );
        Ok(())
    }

    #[test]
    fn test_parse_empty_fields() -> Result<(), PhoneticError> {
        let content = "ACK,AK,,AK,,AK,,AK,";

        let records = parse_fixture(content)?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "ACK");
        assert_eq!(records[0].keys[0], ("AK".to_string(), String::new()));
        assert_eq!(records[0].keys[3], ("AK".to_string(), String::new()));
        Ok(())
    }

    #[test]
    fn test_skip_comments_and_blank_lines() -> Result<(), PhoneticError> {
        let content = "# word,keys...\n\nA,A,,A,,A,,A,\n   \n# trailing comment";

        let records = parse_fixture(content)?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "A");
        Ok(())
    }

    #[test]
    fn test_crlf_line_endings() -> Result<(), PhoneticError> {
        let content = "A,A,,A,,A,,A,\r\nACK,AK,,AK,,AK,,AK,\r\n";

        let records = parse_fixture(content)?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].word, "ACK");
        Ok(())
    }

    #[test]
    fn test_too_few_fields() {
        let result = parse_fixture("SMITH,SM0,XMT");

        assert!(matches!(result, Err(PhoneticError::ParseFixtureError(_))));
    }

    #[test]
    fn test_too_many_fields() {
        let result = parse_fixture("SMITH,SM0,XMT,SMA0,XMAT,SM0,XMT,SMA0,XMAT,EXTRA");

        assert!(matches!(result, Err(PhoneticError::ParseFixtureError(_))));
    }

    #[test]
    fn test_word_keys_regression() -> Result<(), PhoneticError> {
        let records = parse_fixture(include_str!("../test_assets/word_keys.csv"))?;
        assert!(!records.is_empty());

        let configs = [
            Metaphone3::default(),
            Metaphone3::default()
                .with_encode_vowels(true)
                .with_encode_exact(true),
            Metaphone3::default().with_encode_exact(true),
            Metaphone3::default().with_encode_vowels(true),
        ];

        for record in records {
            for (encoder, expected) in configs.iter().zip(record.keys.iter()) {
                let result = encoder.metaphone3(&record.word);
                assert_eq!(
                    (result.primary(), result.secondary()),
                    (expected.0.as_str(), expected.1.as_str()),
                    "keys of {} with {:?}",
                    record.word,
                    encoder,
                );
            }
        }
        Ok(())
    }
}

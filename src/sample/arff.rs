//! A reader for the nominal subset of the ARFF format.
//!
//! ```txt
//! @relation weather
//! @attribute Weather {Sunny, Rainy}
//! @attribute Humid   {Yes, No}
//! @attribute Play    {Yes, No}
//! @data
//! Sunny,Yes,No
//! Rainy,No,No
//! ```
//! The last declared attribute is the class attribute.
//! Lines starting with `%` are comments.
use std::io::BufRead;

use crate::error::{Id3Error, Result};
use super::{
    domain::AttributeDomain,
    example::Example,
    sample_struct::Sample,
};


const MISSING_VALUE: &str = "?";


/// Parses an ARFF stream into a [`Sample`].
pub(crate) fn parse<R: BufRead>(reader: R) -> Result<Sample> {
    let mut attributes: Vec<(String, Vec<String>)> = Vec::new();
    let mut examples = Vec::new();
    let mut in_data = false;
    let mut n_lines = 0;

    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        n_lines = lineno;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') { continue; }

        if in_data {
            let example = parse_row(line, lineno, &attributes)?;
            examples.push(example);
            continue;
        }

        let (keyword, rest) = split_keyword(line)
            .ok_or_else(|| Id3Error::parse(lineno, "expected a `@` declaration"))?;
        match keyword.to_ascii_lowercase().as_str() {
            "@relation" => {},
            "@attribute" => {
                let (name, values) = parse_attribute(rest, lineno)?;
                if attributes.iter().any(|(n, _)| *n == name) {
                    return Err(Id3Error::parse(
                        lineno, format!("attribute `{name}` is declared twice")
                    ));
                }
                attributes.push((name, values));
            },
            "@data" => {
                if attributes.is_empty() {
                    return Err(Id3Error::parse(
                        lineno, "no class attribute is declared"
                    ));
                }
                in_data = true;
            },
            other => {
                return Err(Id3Error::parse(
                    lineno, format!("unknown declaration `{other}`")
                ));
            },
        }
    }

    if !in_data {
        return Err(Id3Error::parse(n_lines, "missing `@data` section"));
    }

    // `in_data` guarantees at least one attribute.
    let (target_name, classes) = attributes.pop()
        .ok_or_else(|| Id3Error::parse(n_lines, "no class attribute"))?;
    let domain = attributes.into_iter().collect::<AttributeDomain>();

    Ok(Sample::new(domain, target_name, classes, examples))
}


/// Splits `@keyword rest` into its two parts.
fn split_keyword(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('@') { return None; }
    match line.find(char::is_whitespace) {
        Some(pos) => Some((&line[..pos], line[pos..].trim())),
        None => Some((line, "")),
    }
}


/// Parses `name {v1, v2, ...}`.
fn parse_attribute(decl: &str, lineno: usize)
    -> Result<(String, Vec<String>)>
{
    let (name, rest) = match decl.chars().next() {
        Some(q @ ('\'' | '"')) => {
            let end = decl[1..].find(q)
                .ok_or_else(|| Id3Error::parse(lineno, "unterminated quote"))?;
            (&decl[1..end + 1], decl[end + 2..].trim())
        },
        Some(_) => {
            let end = decl.find(|c: char| c.is_whitespace() || c == '{')
                .unwrap_or(decl.len());
            (&decl[..end], decl[end..].trim())
        },
        None => {
            return Err(Id3Error::parse(lineno, "attribute name is missing"));
        },
    };

    if !(rest.starts_with('{') && rest.ends_with('}')) {
        return Err(Id3Error::parse(
            lineno,
            format!("attribute `{name}` is not nominal ({rest})"),
        ));
    }

    let values = rest[1..rest.len() - 1]
        .split(',')
        .map(|v| unquote(v.trim()).to_string())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>();
    if values.is_empty() {
        return Err(Id3Error::parse(
            lineno, format!("attribute `{name}` declares no value")
        ));
    }

    Ok((name.to_string(), values))
}


/// Parses a data row against the declared attributes.
/// The last field is the target label.
fn parse_row(
    line: &str,
    lineno: usize,
    attributes: &[(String, Vec<String>)],
) -> Result<Example>
{
    if line.starts_with('{') {
        return Err(Id3Error::parse(lineno, "sparse rows are not supported"));
    }

    let fields = line.split(',')
        .map(|v| unquote(v.trim()))
        .collect::<Vec<_>>();
    if fields.len() != attributes.len() {
        return Err(Id3Error::parse(
            lineno,
            format!(
                "expected {} fields, got {}", attributes.len(), fields.len()
            ),
        ));
    }

    for ((name, values), &field) in attributes.iter().zip(&fields) {
        if field == MISSING_VALUE {
            return Err(Id3Error::parse(
                lineno, format!("missing value for `{name}`")
            ));
        }
        if !values.iter().any(|v| v == field) {
            return Err(Id3Error::UnknownValue {
                line: lineno,
                attribute: name.clone(),
                value: field.to_string(),
            });
        }
    }

    let n_attributes = attributes.len() - 1;
    let names = attributes[..n_attributes].iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();
    Example::new(&names[..], &fields[..n_attributes], fields[n_attributes])
}


fn unquote(s: &str) -> &str {
    let quoted = s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('"') && s.ends_with('"')));
    if quoted { &s[1..s.len() - 1] } else { s }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WEATHER: &str = "\
% toy data
@relation weather

@attribute Weather {Sunny, Rainy}
@attribute 'Humid' {Yes,No}
@ATTRIBUTE Play {Yes, No}

@data
Sunny,Yes,No
Sunny,No,Yes
Rainy,Yes,No
Rainy,No,No
";

    #[test]
    fn test_parse_weather() {
        let sample = parse(Cursor::new(WEATHER)).unwrap();
        assert_eq!(sample.shape(), (4, 2));
        assert_eq!(sample.target_name(), "Play");
        assert_eq!(sample.classes(), ["Yes", "No"]);
        assert_eq!(sample.domain().values("Humid").unwrap(), ["Yes", "No"]);

        let ex = &sample.examples()[1];
        assert_eq!(ex.value_of("Weather").unwrap(), "Sunny");
        assert_eq!(ex.value_of("Humid").unwrap(), "No");
        assert_eq!(ex.target(), Some("Yes"));
    }

    #[test]
    fn test_numeric_attribute() {
        let text = "@relation r\n@attribute temp numeric\n@data\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Id3Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_data_section() {
        let text = "@relation r\n@attribute a {x, y}\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Id3Error::Parse { .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let text = "@attribute a {x, y}\n@attribute c {p, n}\n@data\nx\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Id3Error::Parse { line: 4, .. }));
    }

    #[test]
    fn test_undeclared_value() {
        let text = "@attribute a {x, y}\n@attribute c {p, n}\n@data\nz,p\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::UnknownValue { line: 4, ref value, .. } if value == "z"
        ));
    }

    #[test]
    fn test_missing_value() {
        let text = "@attribute a {x, y}\n@attribute c {p, n}\n@data\n?,p\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Id3Error::Parse { line: 4, .. }));
    }

    #[test]
    fn test_empty_data() {
        let text = "@attribute a {x, y}\n@attribute c {p, n}\n@data\n";
        let sample = parse(Cursor::new(text)).unwrap();
        assert!(sample.is_empty());
    }
}

//! ECB CompactData XML decode.
//!
//! The ECB reference-rate export is an SDMX "compact data" document: the
//! observations live as attribute-only elements on the path
//! `CompactData / DataSet / Series / Obs`, each carrying a `TIME_PERIOD`
//! and an `OBS_VALUE` attribute.
//!
//! The decoder hands back `(date string, value string)` pairs untouched;
//! year filtering and rate parsing happen in the extractor. Element and
//! attribute names are matched by local name, so the document's namespace
//! prefixes don't matter.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::domain::RawObservation;
use crate::error::AppError;

const OBS_PATH: [&str; 3] = ["CompactData", "DataSet", "Series"];

fn path_matches(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

/// Decode an ECB CompactData document into raw observations.
///
/// An empty `Series` yields an empty list (the extractor turns that into an
/// explicit empty-series failure); a document without the expected path is
/// malformed input.
pub fn parse_ecb_xml(xml: &str) -> Result<Vec<RawObservation>, AppError> {
    let mut reader = Reader::from_str(xml);

    let mut observations = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut series_seen = false;

    loop {
        match reader.read_event() {
            Err(err) => {
                return Err(AppError::input(format!("Malformed XML input: {err}")));
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) => {
                if at_obs(&path, &element) {
                    observations.push(decode_obs(&element)?);
                }
                path.push(local_name(&element));
                if path_matches(&path, &OBS_PATH) {
                    series_seen = true;
                }
            }
            Ok(Event::Empty(element)) => {
                if at_obs(&path, &element) {
                    observations.push(decode_obs(&element)?);
                } else if local_name(&element) == "Series"
                    && path_matches(&path, &OBS_PATH[..2])
                {
                    series_seen = true;
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(_) => {}
        }
    }

    if !series_seen {
        return Err(AppError::input(
            "Unexpected XML structure: no CompactData/DataSet/Series found.",
        ));
    }

    Ok(observations)
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn at_obs(path: &[String], element: &BytesStart<'_>) -> bool {
    path_matches(path, &OBS_PATH) && local_name(element) == "Obs"
}

fn decode_obs(element: &BytesStart<'_>) -> Result<RawObservation, AppError> {
    let mut date = None;
    let mut value = None;

    for attr in element.attributes() {
        let attr = attr
            .map_err(|err| AppError::input(format!("Malformed XML attribute: {err}")))?;
        let text = attr
            .unescape_value()
            .map_err(|err| AppError::input(format!("Malformed XML attribute value: {err}")))?
            .into_owned();
        match attr.key.local_name().as_ref() {
            b"TIME_PERIOD" => date = Some(text),
            b"OBS_VALUE" => value = Some(text),
            _ => {}
        }
    }

    match (date, value) {
        (Some(date), Some(value)) => Ok(RawObservation { date, value }),
        _ => Err(AppError::input(
            "Observation is missing a TIME_PERIOD or OBS_VALUE attribute.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CompactData xmlns="http://www.ecb.europa.eu/vocabulary/stats/exr/1"
    xmlns:exr="http://www.ecb.europa.eu/vocabulary/stats/exr/1">
  <Header>
    <ID>EXR</ID>
  </Header>
  <DataSet>
    <exr:Series FREQ="D" CURRENCY="USD" CURRENCY_DENOM="EUR">
      <exr:Obs TIME_PERIOD="2023-01-02" OBS_VALUE="1.0678"/>
      <exr:Obs TIME_PERIOD="2023-01-03" OBS_VALUE="1.0545"/>
      <exr:Obs TIME_PERIOD="2023-01-04" OBS_VALUE="1.0599"/>
    </exr:Series>
  </DataSet>
</CompactData>"#;

    #[test]
    fn decodes_namespaced_observations() {
        let observations = parse_ecb_xml(SAMPLE).unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].date, "2023-01-02");
        assert_eq!(observations[0].value, "1.0678");
        assert_eq!(observations[2].date, "2023-01-04");
    }

    #[test]
    fn empty_series_yields_no_observations() {
        let xml = r#"<CompactData><DataSet><Series FREQ="D"/></DataSet></CompactData>"#;
        let observations = parse_ecb_xml(xml).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn missing_series_path_is_malformed() {
        let xml = r#"<root><child attr="1"/></root>"#;
        let err = parse_ecb_xml(xml).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn truncated_document_is_malformed() {
        let xml = r#"<CompactData><DataSet><Series><Obs TIME_PERIOD="2023-01-02""#;
        let err = parse_ecb_xml(xml).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn observation_missing_attributes_is_malformed() {
        let xml = r#"<CompactData><DataSet><Series>
            <Obs TIME_PERIOD="2023-01-02"/>
        </Series></DataSet></CompactData>"#;
        let err = parse_ecb_xml(xml).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn obs_outside_series_path_is_ignored() {
        let xml = r#"<CompactData>
          <Header><Obs TIME_PERIOD="1999-01-01" OBS_VALUE="9.9"/></Header>
          <DataSet><Series>
            <Obs TIME_PERIOD="2023-01-02" OBS_VALUE="1.07"/>
          </Series></DataSet>
        </CompactData>"#;
        let observations = parse_ecb_xml(xml).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].date, "2023-01-02");
    }
}

//! Flat-file persistence for scenario inputs and score outputs.
//!
//! Both tables are plain CSV with a header row. A record missing a column or
//! holding an unparsable value fails the whole read; scenarios are assumed
//! well-formed, so nothing is skipped silently.

use crate::scenario::ScenarioRecord;
use crate::scoring::ScoreRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unable to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub fn read_scenarios(path: impl AsRef<Path>) -> Result<Vec<ScenarioRecord>, DatasetError> {
    read_records(path.as_ref())
}

pub fn read_scores(path: impl AsRef<Path>) -> Result<Vec<ScoreRecord>, DatasetError> {
    read_records(path.as_ref())
}

/// Parse scenarios from any reader, preserving record order.
pub fn scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, csv::Error> {
    records_from_reader(reader)
}

pub fn scores_from_reader<R: Read>(reader: R) -> Result<Vec<ScoreRecord>, csv::Error> {
    records_from_reader(reader)
}

pub fn write_scenarios(
    path: impl AsRef<Path>,
    scenarios: &[ScenarioRecord],
) -> Result<(), DatasetError> {
    write_records(path.as_ref(), scenarios)
}

pub fn write_scores(path: impl AsRef<Path>, scores: &[ScoreRecord]) -> Result<(), DatasetError> {
    write_records(path.as_ref(), scores)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    records_from_reader(file).map_err(|source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn records_from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.deserialize().collect()
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record).map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{generate_scenarios, AdoptionStage, Domain};

    const SCENARIO_HEADER: &str = "scenario_id,domain,governance_model,stakeholders_count,\
trust_asymmetry_level,data_sensitivity,dispute_frequency_per_month,regulatory_pressure,\
incident_response_present,upgrade_policy_present,dispute_process_present,\
decision_rights_clarity,key_management_maturity,observability_level,\
data_governance_maturity,change_readiness,cost_baseline,cost_blockchain_est,\
time_baseline,time_blockchain_est,adoption_stage";

    #[test]
    fn parses_scenario_rows() {
        let csv = format!(
            "{SCENARIO_HEADER}\n\
             S001,health_record_access,consortium_bft,12,4,5,3,4,1,1,1,2,4,3,4,3,120,110,100,90,pilot\n"
        );
        let scenarios = scenarios_from_reader(csv.as_bytes()).expect("rows parse");
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].scenario_id, "S001");
        assert_eq!(scenarios[0].domain, Domain::HealthRecordAccess);
        assert_eq!(scenarios[0].adoption_stage, AdoptionStage::Pilot);
        assert_eq!(scenarios[0].cost_blockchain_est, 110.0);
    }

    #[test]
    fn rejects_row_with_unparsable_value() {
        let csv = format!(
            "{SCENARIO_HEADER}\n\
             S001,health_record_access,consortium_bft,many,4,5,3,4,1,1,1,2,4,3,4,3,120,110,100,90,pilot\n"
        );
        assert!(scenarios_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_row_with_missing_column() {
        let truncated_header = SCENARIO_HEADER
            .strip_suffix(",adoption_stage")
            .expect("header ends with adoption_stage");
        let csv = format!(
            "{truncated_header}\n\
             S001,health_record_access,consortium_bft,12,4,5,3,4,1,1,1,2,4,3,4,3,120,110,100,90\n"
        );
        assert!(scenarios_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let csv = format!(
            "{SCENARIO_HEADER}\n\
             S001,quantum_ledger,consortium_bft,12,4,5,3,4,1,1,1,2,4,3,4,3,120,110,100,90,pilot\n"
        );
        assert!(scenarios_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn scenario_header_matches_generated_records() {
        let scenarios = generate_scenarios(2, 7);
        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            for scenario in &scenarios {
                writer.serialize(scenario).expect("serializes");
            }
            writer.flush().expect("flushes");
        }
        let text = String::from_utf8(buffer).expect("utf-8 output");
        let header = text.lines().next().expect("header row");
        assert_eq!(header, SCENARIO_HEADER);
    }

    #[test]
    fn read_reports_missing_file_with_path() {
        let err = read_scenarios("no/such/scenarios.csv").expect_err("missing file");
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}

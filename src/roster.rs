use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::RosterError;
use crate::models::InputRow;

pub const NAME_COLUMN: &str = "NAME";
pub const USERNAME_COLUMN: &str = "USER NAME";

pub fn read_roster(path: &Path) -> Result<Vec<InputRow>, RosterError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    parse_roster(file)
}

/// Reads roster rows, failing before any row is read if a required column is absent.
pub fn parse_roster<R: Read>(input: R) -> Result<Vec<InputRow>, RosterError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();
    let column = |required: &'static str| {
        headers
            .iter()
            .position(|h| h == required)
            .ok_or(RosterError::MissingColumn(required))
    };
    // A repeated header resolves to its first occurrence.
    let name_col = column(NAME_COLUMN)?;
    let username_col = column(USERNAME_COLUMN)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cell = |col: usize| record.get(col).unwrap_or_default().to_string();
        rows.push(InputRow {
            name: cell(name_col),
            username: cell(username_col),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_required_columns_and_ignores_extras() {
        let data = "ID,NAME,USER NAME,BATCH\n1,Alice, alice_lc ,A\n2,Bob,bobnotreal,B\n";
        let rows = parse_roster(data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                InputRow {
                    name: "Alice".to_string(),
                    username: " alice_lc ".to_string(),
                },
                InputRow {
                    name: "Bob".to_string(),
                    username: "bobnotreal".to_string(),
                },
            ]
        );
    }

    #[test]
    fn rejects_username_without_space() {
        let data = "NAME,USERNAME\nAlice,alice_lc\n";
        let err = parse_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(err, RosterError::MissingColumn("USER NAME")));
    }

    #[test]
    fn rejects_missing_name_column() {
        let data = "FULL NAME,USER NAME\nAlice,alice_lc\n";
        let err = parse_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(err, RosterError::MissingColumn("NAME")));
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let data = "NAME,USER NAME\nA,same\nB,same\nC,other\n";
        let rows = parse_roster(data.as_bytes()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(rows[0].username, rows[1].username);
    }

    #[test]
    fn repeated_header_uses_first_column() {
        let data = "NAME,USER NAME,NAME\nAlice,alice_lc,Alias\n";
        let rows = parse_roster(data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![InputRow {
                name: "Alice".to_string(),
                username: "alice_lc".to_string(),
            }]
        );
    }

    #[test]
    fn short_record_yields_empty_cells() {
        let data = "NAME,BATCH,USER NAME\nAlice,A\n";
        let rows = parse_roster(data.as_bytes()).unwrap();
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].username, "");
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        let rows = parse_roster("NAME,USER NAME\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "NAME,USER NAME\nAlice,alice_lc\n").unwrap();
        let rows = read_roster(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "alice_lc");
    }
}

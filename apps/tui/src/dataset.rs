use crate::domain::SightingRow;
use crate::error::Result;
use crate::radar::{RadarSession, SessionSettings};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decoded rows plus the number of rows that could not be decoded.
#[derive(Debug, Default)]
pub struct RowBatch {
    pub rows: Vec<SightingRow>,
    pub undecodable: usize,
}

/// Reads sightings CSV with a header row. Short rows are padded with empty
/// fields and long rows cut to the header width. Undecodable rows are skipped
/// and counted; only I/O failures abort the read.
pub fn read_rows<R: Read>(reader: R) -> Result<RowBatch> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut batch = RowBatch::default();

    for (index, record) in csv_reader.records().enumerate() {
        let decoded = record.and_then(|mut record| {
            fit_to_headers(&mut record, headers.len());
            record.deserialize::<SightingRow>(Some(&headers))
        });

        match decoded {
            Ok(row) => batch.rows.push(row),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                log::debug!("skipping undecodable row {}: {e}", index + 1);
                batch.undecodable += 1;
            }
        }
    }

    Ok(batch)
}

fn fit_to_headers(record: &mut csv::StringRecord, width: usize) {
    record.truncate(width);
    while record.len() < width {
        record.push_field("");
    }
}

/// Opens the dataset at `path` and builds a session from it.
pub fn load_session(path: impl AsRef<Path>, settings: SessionSettings) -> Result<RadarSession> {
    let path = path.as_ref();
    log::info!("loading sightings from {}", path.display());

    let file = File::open(path)?;
    let batch = read_rows(file)?;

    let mut session = RadarSession::new(settings, batch.rows);
    session.record_undecodable(batch.undecodable);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
datetime,city,state,country,shape,duration (seconds),duration (hours/min),comments,date posted,latitude,longitude
10/10/1949 20:30,san marcos,tx,us,cylinder,2700,45 minutes,This event took place in early fall,4/27/2004,29.8830556,-97.9411111
10/10/1956 21:00,edna,tx,us,circle,20,1/2 hour,My older brother and twin sister,1/17/2004,28.9783333,-96.6458333
10/10/1960 20:00,hawaii,,us,light,900,,,1/22/2004,21.4180556,-157.8036111
";

    #[test]
    fn reads_named_columns_and_trims_headers() -> Result<(), Box<dyn std::error::Error>> {
        let batch = read_rows(SAMPLE.as_bytes())?;

        assert_eq!(batch.undecodable, 0);
        assert_eq!(batch.rows.len(), 3);
        let first = &batch.rows[0];
        assert_eq!(first.city, "san marcos");
        assert_eq!(first.duration_hours_min, "45 minutes");
        assert_eq!(first.date_posted, "4/27/2004");
        assert_eq!(first.longitude, "-97.9411111");
        assert_eq!(batch.rows[2].duration_hours_min, "");
        Ok(())
    }

    #[test]
    fn short_rows_fall_back_to_empty_fields() -> Result<(), Box<dyn std::error::Error>> {
        let input = "city,latitude,longitude\nalbany,42.65\n";
        let batch = read_rows(input.as_bytes())?;

        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rows[0].latitude, "42.65");
        assert_eq!(batch.rows[0].longitude, "");
        Ok(())
    }

    #[test]
    fn long_rows_drop_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
        let input = "city,latitude,longitude\nalbany,42.65,-73.75,extra,fields\n";
        let batch = read_rows(input.as_bytes())?;

        assert_eq!(batch.undecodable, 0);
        assert_eq!(batch.rows[0].city, "albany");
        assert_eq!(batch.rows[0].longitude, "-73.75");
        Ok(())
    }

    #[test]
    fn short_rows_still_reach_the_projector() -> Result<(), Box<dyn std::error::Error>> {
        let input = "city,latitude,longitude,comments\nalbany,42.65,-73.75\nnowhere,12\n";
        let batch = read_rows(input.as_bytes())?;
        let session = RadarSession::new(SessionSettings::default(), batch.rows);

        let report = session.load_report();
        assert_eq!(report.rows, 2);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.malformed, 1);
        Ok(())
    }

    #[test]
    fn invalid_utf8_rows_are_counted_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let mut input = b"city,latitude,longitude\nok,1,2\n".to_vec();
        input.extend_from_slice(b"bad\xff,3,4\n");
        input.extend_from_slice(b"fine,5,6\n");

        let batch = read_rows(input.as_slice())?;
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.undecodable, 1);
        Ok(())
    }

    #[test]
    fn session_report_includes_undecodable_rows() -> Result<(), Box<dyn std::error::Error>> {
        let batch = read_rows(SAMPLE.as_bytes())?;
        let mut session = RadarSession::new(SessionSettings::default(), batch.rows);
        session.record_undecodable(2);

        let report = session.load_report();
        assert_eq!(report.rows, 5);
        assert_eq!(report.malformed, 2);
        assert_eq!(report.accepted + report.outside_radar, 3);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_session("does/not/exist.csv", SessionSettings::default());
        assert!(matches!(result, Err(crate::error::RadarError::Io(_))));
    }
}

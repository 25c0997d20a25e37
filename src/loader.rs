use crate::model::{Catalog, Subject};
use eyre::{Error, WrapErr};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, trace};

const HEADER: [&str; 5] = ["Program", "Semester", "Subject", "Credits", "Description"];

#[derive(Debug, Deserialize, Serialize)]
struct Record<'a> {
    #[serde(rename = "Program")]
    program: &'a str,
    #[serde(rename = "Semester", deserialize_with = "trimmed")]
    semester: u32,
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "Credits", deserialize_with = "trimmed")]
    credits: i64,
    #[serde(rename = "Description")]
    description: &'a str,
}

// Numeric cells may carry padding such as `CS, 1,Intro, 3,Basics`.
fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let field = <&str>::deserialize(deserializer)?;
    field.trim().parse().map_err(serde::de::Error::custom)
}

/// Result of loading the catalog file.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Catalog),
    /// The file does not exist yet.
    Missing,
}

impl LoadOutcome {
    pub fn into_catalog(self) -> Catalog {
        match self {
            LoadOutcome::Loaded(catalog) => catalog,
            LoadOutcome::Missing => Catalog::new(),
        }
    }
}

pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<LoadOutcome, Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no catalog file, starting empty");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("cannot open {}", self.path.display()));
            }
        };
        let catalog = read_catalog(file)
            .wrap_err_with(|| format!("cannot load catalog from {}", self.path.display()))?;
        info!(
            path = %self.path.display(),
            programs = catalog.programs().len(),
            subjects = catalog.subject_count(),
            "catalog loaded",
        );
        Ok(LoadOutcome::Loaded(catalog))
    }

    /// Overwrite the file with the whole catalog.
    pub fn save(&self, catalog: &Catalog) -> Result<(), Error> {
        let file = File::create(&self.path)
            .wrap_err_with(|| format!("cannot create {}", self.path.display()))?;
        write_catalog(catalog, file)
            .wrap_err_with(|| format!("cannot save catalog to {}", self.path.display()))?;
        info!(
            path = %self.path.display(),
            subjects = catalog.subject_count(),
            "catalog saved",
        );
        Ok(())
    }
}

pub fn read_catalog<R: Read>(source: R) -> Result<Catalog, Error> {
    let mut reader = csv::Reader::from_reader(source);
    let mut row = csv::StringRecord::new();
    let headers = reader.headers()?.clone();
    let mut catalog = Catalog::new();
    while reader.read_record(&mut row)? {
        let record: Record = row
            .deserialize(Some(&headers))
            .wrap_err_with(|| match row.position() {
                Some(pos) => format!("invalid record at line {}", pos.line()),
                None => "invalid record".to_owned(),
            })?;
        trace!(?record, "read record");
        catalog.push_subject(
            record.program,
            record.semester,
            Subject::new(record.subject, record.credits, record.description),
        );
    }
    Ok(catalog)
}

pub fn write_catalog<W: Write>(catalog: &Catalog, target: W) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(target);
    writer.write_record(HEADER)?;
    for (program, semester, subject) in catalog.records() {
        writer.serialize(Record {
            program,
            semester,
            subject: &subject.name,
            credits: subject.credits,
            description: &subject.description,
        })?;
    }
    writer.flush()?;
    Ok(())
}

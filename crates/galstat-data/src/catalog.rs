//! Galaxy catalog loading for SkyServer DR18 exports
//!
//! Each catalog file carries a one-line preamble (the SkyServer table tag),
//! then a header row and fixed columns. Headers may contain incidental
//! surrounding whitespace, so lookup happens on trimmed names.

use galstat_core::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Morphological type of a population
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Morphology {
    Spiral,
    Elliptical,
}

impl Morphology {
    pub fn name(&self) -> &'static str {
        match self {
            Morphology::Spiral => "spiral",
            Morphology::Elliptical => "elliptical",
        }
    }
}

/// Column names of one catalog export
///
/// The radius estimator is morphology-specific: SkyServer reports the
/// exponential fit radius for disks and the de Vaucouleurs fit radius for
/// ellipticals. Everything else is shared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub id: String,
    pub ra_deg: String,
    pub dec_deg: String,
    pub redshift: String,
    pub log_mass: String,
    pub radius_arcsec: String,
}

impl CatalogSchema {
    /// Spiral catalog: exponential disk radius
    pub fn spiral() -> Self {
        Self {
            id: "objID".to_string(),
            ra_deg: "RA_deg".to_string(),
            dec_deg: "DEC_deg".to_string(),
            redshift: "redshift".to_string(),
            log_mass: "logMass".to_string(),
            radius_arcsec: "expRad_r".to_string(),
        }
    }

    /// Elliptical catalog: de Vaucouleurs radius
    pub fn elliptical() -> Self {
        Self {
            id: "objID".to_string(),
            ra_deg: "RA_deg".to_string(),
            dec_deg: "DEC_deg".to_string(),
            redshift: "redshift".to_string(),
            log_mass: "logMass".to_string(),
            radius_arcsec: "deVRad_r".to_string(),
        }
    }

    pub fn for_morphology(morphology: Morphology) -> Self {
        match morphology {
            Morphology::Spiral => Self::spiral(),
            Morphology::Elliptical => Self::elliptical(),
        }
    }
}

/// One catalog row, immutable once loaded
///
/// RA/DEC and the identifier are part of the catalog contract and kept on
/// the record, but no derived metric reads them.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GalaxyRecord {
    pub id: u64,
    /// Right ascension in degrees [0, 360)
    pub ra_deg: f64,
    /// Declination in degrees [-90, 90]
    pub dec_deg: f64,
    /// Dimensionless redshift, >= 0 for cosmological use
    pub redshift: f64,
    /// Base-10 log of stellar mass in solar masses
    pub log_mass_dex: f64,
    /// Morphology-specific angular radius estimator, arcseconds
    pub radius_arcsec: f64,
}

/// Named, ordered collection of records sharing one morphology
#[derive(Debug)]
pub struct Population {
    morphology: Morphology,
    records: Vec<GalaxyRecord>,
}

impl Population {
    /// Load one catalog export, skipping the preamble line and trimming
    /// header whitespace before column lookup.
    pub fn load_csv(path: &Path, morphology: Morphology, schema: &CatalogSchema) -> AnalysisResult<Self> {
        tracing::info!("Loading {} catalog from {:?}", morphology.name(), path);
        let file_label = path.display().to_string();

        let mut reader = BufReader::new(File::open(path)?);

        // Line 1 is the SkyServer table tag, not CSV.
        let mut preamble = String::new();
        reader.read_line(&mut preamble)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| malformed(&file_label, e.to_string()))?
            .clone();

        let column = |name: &str| -> AnalysisResult<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                malformed(&file_label, format!("missing column '{name}'"))
            })
        };

        let id_col = column(&schema.id)?;
        let ra_col = column(&schema.ra_deg)?;
        let dec_col = column(&schema.dec_deg)?;
        let z_col = column(&schema.redshift)?;
        let mass_col = column(&schema.log_mass)?;
        let radius_col = column(&schema.radius_arcsec)?;

        let mut records = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            // Preamble and header occupy lines 1-2.
            let line = row + 3;
            let record = result.map_err(|e| malformed(&file_label, e.to_string()))?;

            let field = |col: usize, name: &str| -> AnalysisResult<String> {
                record.get(col).map(str::to_string).ok_or_else(|| {
                    malformed(&file_label, format!("line {line}: missing field '{name}'"))
                })
            };
            let parse_f64 = |col: usize, name: &str| -> AnalysisResult<f64> {
                let raw = field(col, name)?;
                raw.parse().map_err(|_| {
                    malformed(
                        &file_label,
                        format!("line {line}: unparseable value '{raw}' in column '{name}'"),
                    )
                })
            };

            let raw_id = field(id_col, &schema.id)?;
            let id = raw_id.parse().map_err(|_| {
                malformed(
                    &file_label,
                    format!("line {line}: unparseable value '{raw_id}' in column '{}'", schema.id),
                )
            })?;

            records.push(GalaxyRecord {
                id,
                ra_deg: parse_f64(ra_col, &schema.ra_deg)?,
                dec_deg: parse_f64(dec_col, &schema.dec_deg)?,
                redshift: parse_f64(z_col, &schema.redshift)?,
                log_mass_dex: parse_f64(mass_col, &schema.log_mass)?,
                radius_arcsec: parse_f64(radius_col, &schema.radius_arcsec)?,
            });
        }

        tracing::info!("Loaded {} {} galaxies", records.len(), morphology.name());
        Ok(Self { morphology, records })
    }

    pub fn from_records(morphology: Morphology, records: Vec<GalaxyRecord>) -> Self {
        Self { morphology, records }
    }

    pub fn morphology(&self) -> Morphology {
        self.morphology
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalaxyRecord> {
        self.records.iter()
    }

    /// Redshift column
    pub fn redshifts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.redshift).collect()
    }

    /// Log-stellar-mass column (dex)
    pub fn log_masses(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.log_mass_dex).collect()
    }

    /// Angular radius column (arcseconds)
    pub fn radii_arcsec(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.radius_arcsec).collect()
    }
}

fn malformed(file: &str, detail: String) -> AnalysisError {
    AnalysisError::MalformedInput {
        file: file.to_string(),
        detail,
    }
}

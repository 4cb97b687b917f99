//! Loading of level tables from transition catalogs.
//!
//! Catalogs are whitespace-delimited text files with one transition per row, as
//! exported from Splatalogue or CDMS. Only the columns holding the frequency, the
//! base-10 logarithm of the Einstein A-coefficient, the upper level energy [K] and
//! the upper level degeneracy are read.

use super::{EnergyLevel, Line, SpeciesTable, Transitions};
use crate::{
    constants::fcn,
    error::{ColumnError, Result},
    units::{Frequency, Quantity, Rate, Temperature, Unit},
};
use log::debug;
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the directory searched by [`CatalogDirectory::from_env`].
pub const DATA_DIR_ENV_VAR: &str = "MOLECULAR_COLUMNS_DATA_DIR";

/// One transition as read from a catalog row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogRow {
    pub frequency: Frequency,
    pub log10_einstein_a: fcn,
    pub upper_energy: Temperature,
    pub upper_degeneracy: fcn,
}

/// Column positions and frequency unit of a catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogFormat {
    pub frequency_column: usize,
    pub log10_einstein_a_column: usize,
    pub upper_energy_column: usize,
    pub upper_degeneracy_column: usize,
    pub frequency_unit: Unit,
}

impl CatalogFormat {
    pub fn with_frequency_unit(mut self, unit: Unit) -> Self {
        self.frequency_unit = unit;
        self
    }

    fn max_column(&self) -> usize {
        self.frequency_column
            .max(self.log10_einstein_a_column)
            .max(self.upper_energy_column)
            .max(self.upper_degeneracy_column)
    }
}

impl Default for CatalogFormat {
    fn default() -> Self {
        Self {
            frequency_column: 0,
            log10_einstein_a_column: 2,
            upper_energy_column: 3,
            upper_degeneracy_column: 4,
            frequency_unit: Unit::Megahertz,
        }
    }
}

/// Something that can provide catalog rows for a named species.
pub trait LevelTableSource {
    fn load_level_table(&self, species: &str) -> Result<Vec<CatalogRow>>;
}

/// Parses the rows of a catalog, skipping blank lines and comments starting with
/// `#` or `!`.
pub fn parse_catalog(species: &str, text: &str, format: &CatalogFormat) -> Result<Vec<CatalogRow>> {
    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() <= format.max_column() {
            return Err(ColumnError::data_unavailable(
                species,
                format!(
                    "Row {} has {} columns, expected at least {}",
                    line_idx + 1,
                    columns.len(),
                    format.max_column() + 1
                ),
            ));
        }
        let value = |column: usize| -> Result<fcn> {
            columns[column].parse::<fcn>().map_err(|err| {
                ColumnError::data_unavailable(
                    species,
                    format!(
                        "Failed parsing {} in row {}: {}",
                        columns[column],
                        line_idx + 1,
                        err
                    ),
                )
            })
        };
        rows.push(CatalogRow {
            frequency: Frequency::try_from(Quantity::new(
                value(format.frequency_column)?,
                format.frequency_unit,
            ))?,
            log10_einstein_a: value(format.log10_einstein_a_column)?,
            upper_energy: Temperature::from_kelvin(value(format.upper_energy_column)?),
            upper_degeneracy: value(format.upper_degeneracy_column)?,
        });
    }
    Ok(rows)
}

/// Directory holding one `<species>.dat` catalog per species.
#[derive(Clone, Debug)]
pub struct CatalogDirectory {
    root: PathBuf,
    formats: HashMap<String, CatalogFormat>,
}

impl CatalogDirectory {
    /// Creates a source reading catalogs from the given directory.
    ///
    /// DCN catalogs are assumed to list frequencies in GHz, all others in MHz.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let mut formats = HashMap::new();
        formats.insert(
            "dcn".to_string(),
            CatalogFormat::default().with_frequency_unit(Unit::Gigahertz),
        );
        Self {
            root: root.as_ref().to_path_buf(),
            formats,
        }
    }

    /// Creates a source reading catalogs from the directory given by the
    /// `MOLECULAR_COLUMNS_DATA_DIR` environment variable.
    pub fn from_env() -> Result<Self> {
        env::var_os(DATA_DIR_ENV_VAR)
            .map(Self::new)
            .ok_or_else(|| {
                ColumnError::data_unavailable(
                    "all catalog species",
                    format!("environment variable {} is not set", DATA_DIR_ENV_VAR),
                )
            })
    }

    /// Overrides the catalog format used for the given species.
    pub fn with_format<S: Into<String>>(mut self, species: S, format: CatalogFormat) -> Self {
        self.formats.insert(species.into(), format);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self, species: &str) -> PathBuf {
        self.root.join(format!("{}.dat", species))
    }

    pub fn format(&self, species: &str) -> CatalogFormat {
        self.formats.get(species).copied().unwrap_or_default()
    }
}

impl LevelTableSource for CatalogDirectory {
    fn load_level_table(&self, species: &str) -> Result<Vec<CatalogRow>> {
        let path = self.catalog_path(species);
        debug!("Reading catalog for {} from {}", species, path.display());
        let text = fs::read_to_string(&path).map_err(|err| {
            ColumnError::data_unavailable(species, format!("{}: {}", path.display(), err))
        })?;
        parse_catalog(species, &text, &self.format(species))
    }
}

/// Catalogs held in memory, keyed by species name.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalogs {
    catalogs: HashMap<String, (String, CatalogFormat)>,
}

impl InMemoryCatalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>, T: Into<String>>(&mut self, species: S, text: T) {
        self.insert_with_format(species, text, CatalogFormat::default());
    }

    pub fn insert_with_format<S: Into<String>, T: Into<String>>(
        &mut self,
        species: S,
        text: T,
        format: CatalogFormat,
    ) {
        self.catalogs.insert(species.into(), (text.into(), format));
    }
}

impl LevelTableSource for InMemoryCatalogs {
    fn load_level_table(&self, species: &str) -> Result<Vec<CatalogRow>> {
        let (text, format) = self
            .catalogs
            .get(species)
            .ok_or_else(|| ColumnError::data_unavailable(species, "no catalog provided"))?;
        parse_catalog(species, text, format)
    }
}

/// Builds a rotational ladder table from the catalog rows provided for a species.
///
/// Transition catalogs do not list the ground level, so it is added with zero
/// energy and a degeneracy of one third of that of the first excited level. Rows
/// are ordered by upper level energy, and row `i` becomes the line `J = i+1 -> i`.
pub fn load_ladder_table<S: LevelTableSource + ?Sized>(source: &S, species: &str) -> Result<SpeciesTable> {
    let mut rows = source.load_level_table(species)?;
    if rows.is_empty() {
        return Err(ColumnError::data_unavailable(species, "catalog has no rows"));
    }
    rows.sort_by(|a, b| a.upper_energy.to_kelvin().total_cmp(&b.upper_energy.to_kelvin()));

    for row in &rows {
        let einstein_a = Rate::from_log10_per_second(row.log10_einstein_a).to_per_second();
        let is_valid = row.upper_degeneracy.is_finite()
            && row.upper_degeneracy > 0.0
            && row.upper_energy.is_finite()
            && row.upper_energy.to_kelvin() > 0.0
            && row.frequency.is_finite()
            && row.frequency.to_hz() > 0.0
            && einstein_a.is_finite()
            && einstein_a > 0.0;
        if !is_valid {
            return Err(ColumnError::data_unavailable(
                species,
                format!("non-physical catalog row {:?}", row),
            ));
        }
    }

    let ground = EnergyLevel::new(rows[0].upper_degeneracy / 3.0, Temperature::from_kelvin(0.0));
    let levels = std::iter::once(ground)
        .chain(
            rows.iter()
                .map(|row| EnergyLevel::new(row.upper_degeneracy, row.upper_energy)),
        )
        .collect();
    let lines = rows.iter().enumerate().map(|(idx, row)| {
        Line::new(
            idx + 1,
            idx,
            row.frequency,
            Rate::from_log10_per_second(row.log10_einstein_a),
        )
    });
    debug!(
        "Built ladder for {} with {} levels from catalog",
        species,
        rows.len() + 1
    );
    Ok(SpeciesTable::new(species, levels, Transitions::ladder(lines)))
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const C18O_CATALOG: &str = "\
# freq [MHz]   err     log10(A)  E_u [K]   g_u
109782.1734  0.0001  -7.2030   5.26868   3
219560.3541  0.0001  -6.2211  15.80580   5

329330.5525  0.0001  -5.6631  31.61120   7
";

    #[test]
    fn catalog_rows_are_parsed() {
        let rows = parse_catalog("c18o", C18O_CATALOG, &CatalogFormat::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_relative_eq!(rows[0].frequency.to_ghz(), 109.782_173_4, max_relative = 1e-14);
        assert_relative_eq!(rows[1].log10_einstein_a, -6.2211);
        assert_relative_eq!(rows[2].upper_energy.to_kelvin(), 31.6112);
        assert_relative_eq!(rows[2].upper_degeneracy, 7.0);
    }

    #[test]
    fn gigahertz_catalogs_convert_transparently() {
        let text = "72.4146 0.0 -4.8848 3.4753 9";
        let rows = parse_catalog(
            "dcn",
            text,
            &CatalogFormat::default().with_frequency_unit(Unit::Gigahertz),
        )
        .unwrap();
        assert_relative_eq!(rows[0].frequency.to_mhz(), 72_414.6, max_relative = 1e-14);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        for text in ["109782.1734 0.0001 -7.2030 5.26868", "109782.1734 0.0001 x 5.26868 3"] {
            assert!(matches!(
                parse_catalog("c18o", text, &CatalogFormat::default()),
                Err(ColumnError::DataUnavailable { .. })
            ));
        }
        let format = CatalogFormat::default().with_frequency_unit(Unit::Kelvin);
        assert!(matches!(
            parse_catalog("c18o", C18O_CATALOG, &format),
            Err(ColumnError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn non_physical_rows_are_unavailable() {
        for text in [
            "109782.1734 0.0001 -400.0 5.26868 3",
            "109782.1734 0.0001 400.0 5.26868 3",
            "109782.1734 0.0001 -7.2030 inf 3",
            "inf 0.0001 -7.2030 5.26868 3",
            "109782.1734 0.0001 -7.2030 5.26868 0",
            "-109782.1734 0.0001 -7.2030 5.26868 3",
        ] {
            let mut catalogs = InMemoryCatalogs::new();
            catalogs.insert("c18o", text);
            assert!(
                matches!(
                    load_ladder_table(&catalogs, "c18o"),
                    Err(ColumnError::DataUnavailable { .. })
                ),
                "Row {} was accepted",
                text
            );
        }
    }

    #[test]
    fn ladder_gets_ground_level_prepended() {
        let mut catalogs = InMemoryCatalogs::new();
        catalogs.insert("c18o", C18O_CATALOG);
        let table = load_ladder_table(&catalogs, "c18o").unwrap();
        assert_eq!(table.truncation_depth(), 4);
        assert_eq!(table.transitions().len(), 3);
        assert_relative_eq!(table.levels()[0].degeneracy(), 1.0);
        assert_relative_eq!(table.levels()[0].energy().to_kelvin(), 0.0);
        let line = table
            .resolve(&crate::species::TransitionSelector::Upper(2))
            .unwrap();
        assert_eq!(line.lower(), 1);
        assert_relative_eq!(line.frequency().to_mhz(), 219_560.3541, max_relative = 1e-14);
    }

    #[test]
    fn missing_catalogs_are_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = CatalogDirectory::new(dir.path());
        match load_ladder_table(&catalogs, "c18o") {
            Err(ColumnError::DataUnavailable { species, reason }) => {
                assert_eq!(species, "c18o");
                assert!(reason.contains("c18o.dat"));
            }
            other => panic!("Expected unavailable data, got {:?}", other),
        }
        assert!(load_ladder_table(&InMemoryCatalogs::new(), "c18o").is_err());
    }

    #[test]
    fn catalog_directory_reads_species_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("c18o.dat")).unwrap();
        file.write_all(C18O_CATALOG.as_bytes()).unwrap();

        let catalogs = CatalogDirectory::new(dir.path());
        assert_eq!(catalogs.format("dcn").frequency_unit, Unit::Gigahertz);
        assert_eq!(catalogs.format("c18o"), CatalogFormat::default());
        let rows = catalogs.load_level_table("c18o").unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn empty_catalogs_are_unavailable() {
        let mut catalogs = InMemoryCatalogs::new();
        catalogs.insert("c18o", "# only a header\n");
        assert!(matches!(
            load_ladder_table(&catalogs, "c18o"),
            Err(ColumnError::DataUnavailable { .. })
        ));
    }
}

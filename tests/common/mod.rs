#![allow(dead_code)]

use molecular_columns::{
    constants::fcn,
    species::catalog::{CatalogDirectory, InMemoryCatalogs},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// C18O transitions J = 1-0 to 5-4 in the Splatalogue export layout
/// (frequency [MHz], uncertainty, log10(A_ul), E_u [K], g_u).
pub const C18O_CATALOG: &str = "\
! C18O, CDMS entry 030502
109782.1734  0.0001  -7.2030   5.26868   3
219560.3541  0.0001  -6.2211  15.80580   5
329330.5525  0.0001  -5.6631  31.61120   7
439088.7653  0.0001  -5.2696  52.68390   9
548830.9780  0.0001  -4.9663  79.02040  11
";

/// DCN transitions J = 1-0 to 3-2 with frequencies in GHz.
pub const DCN_CATALOG: &str = "\
# freq [GHz] err   log10(A)  E_u [K]  g_u
72.414694   0.0   -4.8790   3.4754   3
144.828001  0.0   -3.8965  10.4261   5
217.238538  0.0   -3.3383  20.8520   7
";

/// Same DCN transitions as `DCN_CATALOG`, with frequencies in MHz.
pub const DCN_CATALOG_MHZ: &str = "\
72414.694   0.0   -4.8790   3.4754   3
144828.001  0.0   -3.8965  10.4261   5
217238.538  0.0   -3.3383  20.8520   7
";

/// Installs a test logger so that warnings show up in failing test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Catalog directory populated with fixture catalogs for the duration of a test.
#[derive(Debug)]
pub struct Test {
    data_dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        init_logging();
        let data_dir = tempfile::tempdir().expect("Could not create temporary directory");
        Self { data_dir }
    }

    /// Creates a test whose directory holds the C18O and DCN fixture catalogs.
    pub fn with_fixture_catalogs() -> Self {
        let test = Self::new();
        test.write_catalog("c18o", C18O_CATALOG);
        test.write_catalog("dcn", DCN_CATALOG);
        test
    }

    pub fn write_catalog<S: AsRef<str>>(&self, species: &str, text: S) -> PathBuf {
        let path = self.data_dir().join(format!("{}.dat", species));
        fs::write(&path, text.as_ref()).expect("Could not write catalog");
        path
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    pub fn catalogs(&self) -> CatalogDirectory {
        CatalogDirectory::new(self.data_dir())
    }
}

pub fn in_memory_catalogs() -> InMemoryCatalogs {
    let mut catalogs = InMemoryCatalogs::new();
    catalogs.insert("c18o", C18O_CATALOG);
    catalogs.insert("dcn", DCN_CATALOG_MHZ);
    catalogs
}

pub fn assert_close(actual: fcn, expected: fcn, max_relative: fcn) {
    assert!(
        approx::relative_eq!(actual, expected, max_relative = max_relative),
        "{} differs from expected {} by more than a relative {}",
        actual,
        expected,
        max_relative
    );
}

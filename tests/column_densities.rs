mod common;

use common::{assert_close, in_memory_catalogs, Test};
use molecular_columns::{
    empirical::empirical_column_fit,
    radiative::{optical_depth_from_peak, peak_temperature},
    species::catalog::{CatalogDirectory, DATA_DIR_ENV_VAR},
    units::{IntegratedIntensity, Quantity, Temperature, Velocity},
    ColumnDensityCalculator, ColumnError, Species, TransitionSelector,
};

fn kelvin(value: f64) -> Temperature {
    Temperature::from_kelvin(value)
}

#[test]
fn c18o_columns_from_catalog_directory_are_correct() {
    let test = Test::with_fixture_catalogs();
    let table = Species::C18o.load_table(&test.catalogs()).unwrap();
    assert_eq!(table.truncation_depth(), 6);

    assert_close(table.partition_function(kelvin(5.0)), 2.270_593_038_519_742_4, 1e-9);
    assert_close(table.partition_function(kelvin(10.0)), 4.147_717_157_618_056, 1e-9);

    let calculator = ColumnDensityCalculator::new(&table);
    let intensity = IntegratedIntensity::from_kelvin_km_per_sec(1.0);
    assert_close(
        calculator
            .column_density_thin(&TransitionSelector::Upper(1), kelvin(5.0), intensity)
            .to_per_cm2(),
        1.188_677_776_418_833_2e15,
        1e-8,
    );
    assert_close(
        calculator
            .column_density_thin(&TransitionSelector::Upper(3), kelvin(10.0), intensity)
            .to_per_cm2(),
        1.373_121_938_657_090_8e15,
        1e-8,
    );
    assert!(calculator
        .column_density_thin(&TransitionSelector::Upper(6), kelvin(10.0), intensity)
        .is_nan());
}

#[test]
fn lte_c18o_column_is_comparable_to_empirical_fit() {
    let test = Test::with_fixture_catalogs();
    let table = Species::C18o.load_table(&test.catalogs()).unwrap();
    let intensity = IntegratedIntensity::from_kelvin_km_per_sec(2.5);
    let lte = ColumnDensityCalculator::new(&table).column_density_thin(
        &TransitionSelector::Upper(3),
        kelvin(10.0),
        intensity,
    );
    let ratio = lte / empirical_column_fit(kelvin(10.0), intensity);
    assert!((0.8..1.3).contains(&ratio), "Ratio {} out of range", ratio);
}

#[test]
fn dcn_gigahertz_catalog_matches_megahertz_catalog() {
    let test = Test::with_fixture_catalogs();
    let from_directory = Species::Dcn.load_table(&test.catalogs()).unwrap();
    let from_memory = Species::Dcn.load_table(&in_memory_catalogs()).unwrap();

    let selector = TransitionSelector::Upper(2);
    let line = from_directory.resolve(&selector).unwrap();
    assert_close(line.frequency().to_mhz(), 144_828.001, 1e-12);

    let intensity = IntegratedIntensity::from_kelvin_km_per_sec(0.7);
    assert_close(
        ColumnDensityCalculator::new(&from_directory)
            .column_density_thin(&selector, kelvin(8.0), intensity)
            .to_per_cm2(),
        ColumnDensityCalculator::new(&from_memory)
            .column_density_thin(&selector, kelvin(8.0), intensity)
            .to_per_cm2(),
        1e-12,
    );
}

#[test]
fn missing_catalog_is_reported() {
    let test = Test::new();
    test.write_catalog("c18o", common::C18O_CATALOG);
    let catalogs = test.catalogs();
    assert!(Species::C18o.load_table(&catalogs).is_ok());
    match Species::Dcn.load_table(&catalogs) {
        Err(ColumnError::DataUnavailable { species, .. }) => assert_eq!(species, "dcn"),
        other => panic!("Expected unavailable data, got {:?}", other),
    }
    // Built-in tables never touch the catalog source
    assert!(Species::DcoPlus.load_table(&catalogs).is_ok());
}

#[test]
fn catalog_directory_is_read_from_environment() {
    let test = Test::with_fixture_catalogs();
    std::env::set_var(DATA_DIR_ENV_VAR, test.data_dir());
    let catalogs = CatalogDirectory::from_env().unwrap();
    assert_eq!(catalogs.root(), test.data_dir());
    assert_eq!(
        Species::C18o
            .load_table(&catalogs)
            .unwrap()
            .truncation_depth(),
        6
    );
    std::env::remove_var(DATA_DIR_ENV_VAR);
    assert!(matches!(
        CatalogDirectory::from_env(),
        Err(ColumnError::DataUnavailable { .. })
    ));
}

#[test]
fn quantities_parsed_from_text_drive_calculation() {
    common::init_logging();
    let excitation_temperature: Temperature = "5 K".parse::<Quantity>().unwrap().try_into().unwrap();
    let intensity: IntegratedIntensity = "1 K km/s".parse::<Quantity>().unwrap().try_into().unwrap();
    let table = "dco+".parse::<Species>().unwrap().builtin_table().unwrap();
    let column = ColumnDensityCalculator::new(&table).column_density_thin(
        &"1".parse().unwrap(),
        excitation_temperature,
        intensity,
    );
    assert_close(column.to_per_cm2(), 1.610_910_866_440_423_3e12, 1e-8);

    let not_a_temperature = "110 GHz".parse::<Quantity>().unwrap();
    assert!(matches!(
        Temperature::try_from(not_a_temperature),
        Err(ColumnError::UnitMismatch { .. })
    ));
}

#[test]
fn optical_depth_from_observed_peak_feeds_thick_column() {
    common::init_logging();
    let table = Species::H13coPlus.builtin_table().unwrap();
    let selector = TransitionSelector::Upper(1);
    let frequency = table.resolve(&selector).unwrap().frequency();
    let excitation_temperature = kelvin(9.0);
    let background = kelvin(2.73);

    let tau = optical_depth_from_peak(excitation_temperature, background, frequency, kelvin(1.5))
        .unwrap();
    assert!(tau > 0.0);
    assert_close(
        peak_temperature(excitation_temperature, background, frequency, tau).to_kelvin(),
        1.5,
        1e-10,
    );

    let calculator = ColumnDensityCalculator::new(&table);
    let sigma = Velocity::from_km_per_sec(0.25);
    let thick = calculator.column_density_thick(&selector, excitation_temperature, sigma, tau);
    let thin = calculator.column_density_thin(
        &selector,
        excitation_temperature,
        kelvin(1.0) * sigma * ((2.0 * std::f64::consts::PI).sqrt() * tau),
    );
    assert_close(thick.to_per_cm2(), thin.to_per_cm2(), 1e-12);
}

#[test]
fn ortho_and_para_nh2d_are_separate_tables() {
    let para = Species::ParaNh2d.builtin_table().unwrap();
    let ortho = Species::OrthoNh2d.builtin_table().unwrap();
    let temperature = kelvin(5.0);
    assert_close(para.partition_function(temperature), 3.577_096_449_645_084_3, 1e-9);
    assert_close(ortho.partition_function(temperature), 9.693_442_712_970_38, 1e-9);

    let selector = TransitionSelector::labels("1_11", "1_01");
    assert_close(
        para.resolve(&selector).unwrap().frequency().to_ghz(),
        110.153_594,
        1e-12,
    );
    assert_close(
        ortho.resolve(&selector).unwrap().frequency().to_ghz(),
        85.926_27,
        1e-12,
    );
    assert!(para.resolve(&TransitionSelector::Upper(2)).is_none());
}

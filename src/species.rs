//! Energy levels and radiative transitions of molecular species.

pub mod catalog;
pub mod dcop;
pub mod h13cop;
pub mod nh2d;
pub mod so;

use crate::{
    constants::{fcn, WAVENUMBER_TO_K},
    error::{ColumnError, Result},
    units::{Frequency, Rate, Temperature},
};
use catalog::LevelTableSource;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

/// A rotational or fine-structure level of a species.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyLevel {
    degeneracy: fcn,
    energy: Temperature,
    label: Option<String>,
}

impl EnergyLevel {
    /// Creates a level with the given statistical weight and energy above the
    /// ground state (in temperature units, E/k_B).
    pub fn new(degeneracy: fcn, energy: Temperature) -> Self {
        assert!(degeneracy > 0.0, "Level degeneracy must be positive");
        assert!(
            energy.to_kelvin() >= 0.0,
            "Level energy must not be below the ground state"
        );
        Self {
            degeneracy,
            energy,
            label: None,
        }
    }

    /// Creates a level from an energy tabulated as a wavenumber [1/cm].
    pub fn from_wavenumber(degeneracy: fcn, wavenumber: fcn) -> Self {
        Self::new(degeneracy, Temperature::from_kelvin(wavenumber * WAVENUMBER_TO_K))
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn degeneracy(&self) -> fcn {
        self.degeneracy
    }

    pub fn energy(&self) -> Temperature {
        self.energy
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A radiative transition between two levels of the same table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    frequency: Frequency,
    einstein_a: Rate,
    upper: usize,
    lower: usize,
}

impl Line {
    pub fn new(upper: usize, lower: usize, frequency: Frequency, einstein_a: Rate) -> Self {
        assert!(upper != lower, "A line must connect two different levels");
        assert!(frequency.to_hz() > 0.0, "Line frequency must be positive");
        assert!(
            einstein_a.to_per_second() > 0.0,
            "Einstein A-coefficient must be positive"
        );
        Self {
            frequency,
            einstein_a,
            upper,
            lower,
        }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Spontaneous emission rate A_ul.
    pub fn einstein_a(&self) -> Rate {
        self.einstein_a
    }

    /// Index of the upper level in the owning table.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Index of the lower level in the owning table.
    pub fn lower(&self) -> usize {
        self.lower
    }
}

/// How the transitions of a species are keyed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Transitions {
    /// Rotational ladder: the line with upper level `J` always ends in level `J - 1`.
    /// Lines are keyed by `J`.
    Ladder(BTreeMap<usize, Line>),
    /// Arbitrary network of lines keyed by their (upper, lower) level indices.
    Network(HashMap<(usize, usize), Line>),
}

impl Transitions {
    pub fn ladder<I: IntoIterator<Item = Line>>(lines: I) -> Self {
        Self::Ladder(
            lines
                .into_iter()
                .map(|line| {
                    assert_eq!(
                        line.lower + 1,
                        line.upper,
                        "Ladder line must end in the level directly below"
                    );
                    (line.upper, line)
                })
                .collect(),
        )
    }

    pub fn network<I: IntoIterator<Item = Line>>(lines: I) -> Self {
        Self::Network(
            lines
                .into_iter()
                .map(|line| ((line.upper, line.lower), line))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ladder(lines) => lines.len(),
            Self::Network(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, upper: usize, lower: usize) -> Option<&Line> {
        match self {
            Self::Ladder(lines) => lines.get(&upper).filter(|line| line.lower == lower),
            Self::Network(lines) => lines.get(&(upper, lower)),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Line> + '_> {
        match self {
            Self::Ladder(lines) => Box::new(lines.values()),
            Self::Network(lines) => Box::new(lines.values()),
        }
    }
}

/// Reference to a level by index or by label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelRef<'a> {
    Index(usize),
    Label(&'a str),
}

impl From<usize> for LevelRef<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for LevelRef<'a> {
    fn from(label: &'a str) -> Self {
        Self::Label(label)
    }
}

/// Identifies the transition used for a column density calculation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionSelector {
    /// The `J -> J-1` line of a rotational ladder, given by the upper level `J`.
    Upper(usize),
    /// The line between two labeled levels.
    Labels { upper: String, lower: String },
}

impl TransitionSelector {
    pub fn labels<U: Into<String>, L: Into<String>>(upper: U, lower: L) -> Self {
        Self::Labels {
            upper: upper.into(),
            lower: lower.into(),
        }
    }
}

impl fmt::Display for TransitionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper(0) => write!(f, "J=0"),
            Self::Upper(upper) => write!(f, "J={}-{}", upper, upper - 1),
            Self::Labels { upper, lower } => write!(f, "{}-{}", upper, lower),
        }
    }
}

/// Parses either an upper level (`"3"`) or a label pair (`"2_1-1_1"`).
impl FromStr for TransitionSelector {
    type Err = ColumnError;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(upper) = text.parse::<usize>() {
            return Ok(Self::Upper(upper));
        }
        match text.split_once('-') {
            Some((upper, lower)) if !upper.trim().is_empty() && !lower.trim().is_empty() => {
                Ok(Self::labels(upper.trim(), lower.trim()))
            }
            _ => Err(ColumnError::InvalidInput(format!(
                "Could not interpret {} as a transition",
                text
            ))),
        }
    }
}

/// Immutable level and line data for one molecular (symmetry) species.
///
/// Levels are ordered by increasing energy, and the table is a truncation of the
/// full level ladder: the partition function only sums over the tabulated levels.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesTable {
    name: String,
    levels: Vec<EnergyLevel>,
    level_indices: HashMap<String, usize>,
    transitions: Transitions,
    validate_excitation: bool,
}

impl SpeciesTable {
    /// Creates a table from levels and the transitions between them.
    ///
    /// Excitation temperatures are validated by default, see
    /// [`without_excitation_validation`](Self::without_excitation_validation).
    pub fn new<S: Into<String>>(name: S, levels: Vec<EnergyLevel>, transitions: Transitions) -> Self {
        let name = name.into();
        assert!(!levels.is_empty(), "Species {} has no levels", name);
        for line in transitions.iter() {
            assert!(
                line.upper < levels.len() && line.lower < levels.len(),
                "Line of species {} refers to a level outside the table",
                name
            );
        }
        let level_indices = levels
            .iter()
            .enumerate()
            .filter_map(|(idx, level)| level.label().map(|label| (label.to_string(), idx)))
            .collect();
        Self {
            name,
            levels,
            level_indices,
            transitions,
            validate_excitation: true,
        }
    }

    /// Makes the partition function evaluate non-positive and non-finite excitation
    /// temperatures instead of returning NaN for them.
    pub fn without_excitation_validation(mut self) -> Self {
        self.validate_excitation = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> &[EnergyLevel] {
        &self.levels
    }

    /// Number of levels included in the partition function.
    pub fn truncation_depth(&self) -> usize {
        self.levels.len()
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.transitions.iter()
    }

    pub fn validates_excitation(&self) -> bool {
        self.validate_excitation
    }

    pub fn level_index(&self, level: LevelRef) -> Option<usize> {
        match level {
            LevelRef::Index(idx) => (idx < self.levels.len()).then_some(idx),
            LevelRef::Label(label) => self.level_indices.get(label).copied(),
        }
    }

    pub fn level(&self, level: LevelRef) -> Option<&EnergyLevel> {
        self.level_index(level).map(|idx| &self.levels[idx])
    }

    /// Looks up the line identified by the given selector.
    ///
    /// Ladder selectors only resolve in ladder tables. Label pairs resolve in any
    /// table whose levels carry labels.
    pub fn resolve(&self, selector: &TransitionSelector) -> Option<&Line> {
        match (selector, &self.transitions) {
            (TransitionSelector::Upper(upper), Transitions::Ladder(lines)) => lines.get(upper),
            (TransitionSelector::Upper(_), Transitions::Network(_)) => None,
            (TransitionSelector::Labels { upper, lower }, transitions) => {
                let upper = self.level_indices.get(upper.as_str())?;
                let lower = self.level_indices.get(lower.as_str())?;
                transitions.find(*upper, *lower)
            }
        }
    }
}

/// Builds a full rotational ladder from levels given as (wavenumber [1/cm],
/// degeneracy) and lines given as (frequency [GHz], A_ul [1/s]), where line `i`
/// is the transition `J = i+1 -> i`.
fn ladder_from_wavenumbers(name: &str, levels: &[(fcn, fcn)], lines: &[(fcn, fcn)]) -> SpeciesTable {
    SpeciesTable::new(
        name,
        levels
            .iter()
            .map(|&(wavenumber, degeneracy)| EnergyLevel::from_wavenumber(degeneracy, wavenumber))
            .collect(),
        Transitions::ladder(lines.iter().enumerate().map(|(idx, &(ghz, einstein_a))| {
            Line::new(
                idx + 1,
                idx,
                Frequency::from_ghz(ghz),
                Rate::per_second(einstein_a),
            )
        })),
    )
}

/// Species with built-in or catalog-provided level data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    DcoPlus,
    H13coPlus,
    ParaNh2d,
    OrthoNh2d,
    So,
    C18o,
    Dcn,
}

impl Species {
    pub const ALL: [Species; 7] = [
        Self::DcoPlus,
        Self::H13coPlus,
        Self::ParaNh2d,
        Self::OrthoNh2d,
        Self::So,
        Self::C18o,
        Self::Dcn,
    ];

    /// Name used for the species in catalogs and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DcoPlus => "dco+",
            Self::H13coPlus => "h13co+",
            Self::ParaNh2d => "p-nh2d",
            Self::OrthoNh2d => "o-nh2d",
            Self::So => "so",
            Self::C18o => "c18o",
            Self::Dcn => "dcn",
        }
    }

    /// Builds the compiled-in table of the species, if it has one.
    pub fn builtin_table(&self) -> Option<SpeciesTable> {
        match self {
            Self::DcoPlus => Some(dcop::table()),
            Self::H13coPlus => Some(h13cop::table()),
            Self::ParaNh2d => Some(nh2d::para_table()),
            Self::OrthoNh2d => Some(nh2d::ortho_table()),
            Self::So => Some(so::table()),
            Self::C18o | Self::Dcn => None,
        }
    }

    /// Builds the table of the species, loading it from the given source when there
    /// is no compiled-in table.
    pub fn load_table<S: LevelTableSource + ?Sized>(&self, source: &S) -> Result<SpeciesTable> {
        match self.builtin_table() {
            Some(table) => Ok(table),
            None => catalog::load_ladder_table(source, self.name()),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Species {
    type Err = ColumnError;

    fn from_str(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        let normalized = match normalized.as_str() {
            "dcop" => "dco+",
            "h13cop" => "h13co+",
            "para-nh2d" | "pnh2d" => "p-nh2d",
            "ortho-nh2d" | "onh2d" => "o-nh2d",
            other => other,
        };
        Self::ALL
            .iter()
            .find(|species| species.name() == normalized)
            .copied()
            .ok_or_else(|| ColumnError::data_unavailable(name, "unknown species"))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn toy_network() -> SpeciesTable {
        let levels = vec![
            EnergyLevel::new(1.0, Temperature::from_kelvin(0.0)).with_label("a"),
            EnergyLevel::new(3.0, Temperature::from_kelvin(2.0)).with_label("b"),
            EnergyLevel::new(5.0, Temperature::from_kelvin(7.0)).with_label("c"),
        ];
        let lines = vec![
            Line::new(2, 0, Frequency::from_ghz(145.0), Rate::per_second(1e-6)),
            Line::new(1, 0, Frequency::from_ghz(41.0), Rate::per_second(1e-7)),
        ];
        SpeciesTable::new("toy", levels, Transitions::network(lines))
    }

    #[test]
    fn label_pairs_resolve_in_networks() {
        let table = toy_network();
        let line = table
            .resolve(&TransitionSelector::labels("c", "a"))
            .unwrap();
        assert_eq!((line.upper(), line.lower()), (2, 0));
        assert!(table.resolve(&TransitionSelector::labels("c", "b")).is_none());
        assert!(table.resolve(&TransitionSelector::labels("d", "a")).is_none());
        assert!(table.resolve(&TransitionSelector::Upper(1)).is_none());
    }

    #[test]
    fn levels_resolve_by_index_and_label() {
        let table = toy_network();
        assert_eq!(table.level_index(LevelRef::from("b")), Some(1));
        assert_eq!(table.level_index(LevelRef::from(2usize)), Some(2));
        assert_eq!(table.level_index(LevelRef::from(3usize)), None);
        assert_eq!(table.level(LevelRef::Label("c")).unwrap().degeneracy(), 5.0);
        assert_eq!(table.truncation_depth(), 3);
    }

    #[test]
    fn selector_parsing_works() {
        assert_eq!(
            "3".parse::<TransitionSelector>().unwrap(),
            TransitionSelector::Upper(3)
        );
        assert_eq!(
            " 2_1-1_1 ".parse::<TransitionSelector>().unwrap(),
            TransitionSelector::labels("2_1", "1_1")
        );
        assert!("2_1".parse::<TransitionSelector>().is_err());
        assert!("-1_1".parse::<TransitionSelector>().is_err());
        assert_eq!(TransitionSelector::labels("2_1", "1_1").to_string(), "2_1-1_1");
        assert_eq!(TransitionSelector::Upper(3).to_string(), "J=3-2");
        assert_eq!(TransitionSelector::Upper(0).to_string(), "J=0");
    }

    #[test]
    fn species_names_parse() {
        for species in Species::ALL {
            assert_eq!(species.name().parse::<Species>().unwrap(), species);
        }
        assert_eq!("DCOp".parse::<Species>().unwrap(), Species::DcoPlus);
        assert_eq!("para_NH2D".parse::<Species>().unwrap(), Species::ParaNh2d);
        assert!(matches!(
            "h2o".parse::<Species>(),
            Err(ColumnError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn builtin_tables_have_documented_truncation_depths() {
        let depths: Vec<_> = Species::ALL
            .iter()
            .filter_map(|species| species.builtin_table())
            .map(|table| (table.name().to_string(), table.truncation_depth()))
            .collect();
        assert_eq!(
            depths,
            vec![
                ("dco+".to_string(), 31),
                ("h13co+".to_string(), 31),
                ("p-nh2d".to_string(), 30),
                ("o-nh2d".to_string(), 30),
                ("so".to_string(), 91),
            ]
        );
        assert!(Species::C18o.builtin_table().is_none());
    }

    #[test]
    #[should_panic]
    fn line_outside_table_is_rejected() {
        let levels = vec![EnergyLevel::new(1.0, Temperature::from_kelvin(0.0))];
        let lines = vec![Line::new(1, 0, Frequency::from_ghz(1.0), Rate::per_second(1.0))];
        SpeciesTable::new("broken", levels, Transitions::ladder(lines));
    }
}

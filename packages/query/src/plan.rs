//! Query-plan construction.
//!
//! Maps which of the five token slots are populated to one of a fixed set
//! of match strategies, and produces a backend-neutral [`QueryPlan`] plus
//! the [`SortSpec`] that orders equally relevant hits.
//!
//! Rules shared by every strategy:
//!
//! - Numeric fields (flat number, street number) always use prefix
//!   matching, so typing "4" and then "45" both narrow the results.
//! - Street type and suburb always use fuzzy matching.
//! - Street name uses prefix matching for fast type-ahead, except when the
//!   street type and suburb were also given, where it switches to fuzzy to
//!   tolerate misspellings in fuller queries.
//! - Street-name clauses are always boosted by [`STREET_NAME_BOOST`].

use address_lookup_models::ParsedAddressTokens;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Boost applied to every street-name clause.
pub const STREET_NAME_BOOST: f32 = 2.0;

/// Boost applied to the street-number clause when a flat number, or a
/// street type and suburb, are also present.
pub const STREET_NUMBER_BOOST: f32 = 2.0;

/// Boost of a clause that is not explicitly boosted.
pub const DEFAULT_BOOST: f32 = 1.0;

/// Searchable address fields, named as they are in the index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum FieldName {
    /// Flat/unit number.
    #[serde(rename = "flat_number")]
    #[strum(serialize = "flat_number")]
    FlatNumber,
    /// First street number.
    #[serde(rename = "number_first")]
    #[strum(serialize = "number_first")]
    StreetNumber,
    /// Street name.
    #[serde(rename = "street_name")]
    #[strum(serialize = "street_name")]
    StreetName,
    /// Street type code.
    #[serde(rename = "street_type_code")]
    #[strum(serialize = "street_type_code")]
    StreetType,
    /// Suburb/locality name.
    #[serde(rename = "locality_name")]
    #[strum(serialize = "locality_name")]
    Suburb,
}

/// Maximum edit distance of a fuzzy clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuzziness {
    /// Scales with term length: exact up to two characters, one edit up to
    /// five, two edits beyond.
    Auto,
    /// A fixed number of edits (capped at two).
    Edits(u8),
}

impl Fuzziness {
    /// Maximum number of edits allowed for `term`.
    #[must_use]
    pub fn max_edits(self, term: &str) -> u8 {
        match self {
            Self::Auto => match term.chars().count() {
                0..=2 => 0,
                3..=5 => 1,
                _ => 2,
            },
            Self::Edits(edits) => edits.min(2),
        }
    }
}

/// How a clause value is matched against its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every term of the value must start a term of the field.
    Prefix,
    /// Every term of the value must be within an edit distance of a term
    /// of the field.
    Fuzzy(Fuzziness),
    /// Every term of the value must equal a term of the field.
    Exact,
}

/// A single field predicate of a [`QueryPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldClause {
    /// Field to match.
    pub field: FieldName,
    /// Match mode.
    pub mode: MatchMode,
    /// Multiplicative relevance weight.
    pub boost: f32,
    /// Lowercase value to match.
    pub value: String,
}

impl FieldClause {
    /// A prefix clause with the default boost.
    #[must_use]
    pub fn prefix(field: FieldName, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Prefix, value)
    }

    /// A fuzzy clause with automatic fuzziness and the default boost.
    #[must_use]
    pub fn fuzzy(field: FieldName, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Fuzzy(Fuzziness::Auto), value)
    }

    /// An exact-term clause with the default boost.
    #[must_use]
    pub fn exact(field: FieldName, value: impl Into<String>) -> Self {
        Self::new(field, MatchMode::Exact, value)
    }

    fn new(field: FieldName, mode: MatchMode, value: impl Into<String>) -> Self {
        Self {
            field,
            mode,
            boost: DEFAULT_BOOST,
            value: value.into(),
        }
    }

    /// Returns this clause with `boost` applied.
    #[must_use]
    pub const fn boosted(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

/// A backend-neutral search plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "clauses", rename_all = "snake_case")]
pub enum QueryPlan {
    /// Match every address.
    MatchAll,
    /// A single field clause.
    Single(FieldClause),
    /// Boolean AND of two to five clauses.
    And(Vec<FieldClause>),
}

impl QueryPlan {
    /// Combines clauses with AND, collapsing trivial cases.
    #[must_use]
    pub fn and(mut clauses: Vec<FieldClause>) -> Self {
        match clauses.len() {
            0 => Self::MatchAll,
            1 => Self::Single(clauses.remove(0)),
            _ => Self::And(clauses),
        }
    }

    /// All clauses of the plan, in order.
    #[must_use]
    pub fn clauses(&self) -> &[FieldClause] {
        match self {
            Self::MatchAll => &[],
            Self::Single(clause) => std::slice::from_ref(clause),
            Self::And(clauses) => clauses,
        }
    }

    /// The clause on `field`, if any.
    #[must_use]
    pub fn clause(&self, field: FieldName) -> Option<&FieldClause> {
        self.clauses().iter().find(|c| c.field == field)
    }
}

/// Sortable keys, named as they are in the index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SortField {
    /// Numeric street number.
    #[serde(rename = "number_first_sort")]
    #[strum(serialize = "number_first_sort")]
    StreetNumber,
    /// Numeric flat number.
    #[serde(rename = "flat_number_sort")]
    #[strum(serialize = "flat_number_sort")]
    FlatNumber,
    /// Lowercase street name.
    #[serde(rename = "street_name_sort")]
    #[strum(serialize = "street_name_sort")]
    StreetName,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// One sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Field to sort on.
    pub field: SortField,
    /// Direction.
    pub direction: SortDirection,
}

impl SortKey {
    /// An ascending key on `field`.
    #[must_use]
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }
}

/// Ordered list of sort keys.
///
/// Always starts with the street number and ends with the street name;
/// the flat number sits between them when one was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    /// Builds the sort for the given tokens.
    #[must_use]
    pub fn for_tokens(tokens: &ParsedAddressTokens) -> Self {
        let mut keys = vec![SortKey::asc(SortField::StreetNumber)];
        if !tokens.flat_number.is_empty() {
            keys.push(SortKey::asc(SortField::FlatNumber));
        }
        keys.push(SortKey::asc(SortField::StreetName));
        Self(keys)
    }

    /// The keys, most significant first.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }
}

/// Which token slots are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPresence {
    /// Flat number present.
    pub flat: bool,
    /// Street number present.
    pub number: bool,
    /// Street name present.
    pub name: bool,
    /// Street type present.
    pub street_type: bool,
    /// Suburb present.
    pub suburb: bool,
}

impl SlotPresence {
    /// Reads slot presence off parsed tokens.
    #[must_use]
    pub fn of(tokens: &ParsedAddressTokens) -> Self {
        Self {
            flat: !tokens.flat_number.is_empty(),
            number: !tokens.street_number.is_empty(),
            name: !tokens.street_name.is_empty(),
            street_type: !tokens.street_type.is_empty(),
            suburb: !tokens.suburb.is_empty(),
        }
    }
}

/// The match strategy chosen for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Nothing typed: match every address.
    MatchAll,
    /// Prefix on street number.
    StreetNumber,
    /// Prefix on flat number.
    FlatNumber,
    /// Prefix on street name.
    StreetName,
    /// Fuzzy on street type.
    StreetType,
    /// Fuzzy on suburb.
    Suburb,
    /// Flat + number prefixes.
    FlatNumberStreetNumber,
    /// Number prefix + boosted name prefix.
    NumberName,
    /// Flat prefix + boosted name prefix.
    FlatName,
    /// Boosted name prefix + fuzzy type.
    NameType,
    /// Boosted fuzzy name + fuzzy type + fuzzy suburb.
    NameTypeSuburb,
    /// Flat prefix + boosted name prefix + fuzzy type.
    FlatNameType,
    /// Number prefix + boosted name prefix + fuzzy type.
    NumberNameType,
    /// Flat prefix + boosted number and name prefixes.
    FlatNumberName,
    /// Flat prefix + boosted number and name prefixes + fuzzy type.
    FlatNumberNameType,
    /// Boosted number and name prefixes + fuzzy type + fuzzy suburb.
    NumberNameTypeSuburb,
    /// Flat prefix + boosted name prefix + fuzzy type + fuzzy suburb.
    FlatNameTypeSuburb,
    /// All five slots.
    Full,
    /// Any other combination: the populated subset of [`Strategy::Full`].
    Composite,
}

impl Strategy {
    /// Selects the strategy for a slot-presence combination.
    ///
    /// Total over all 32 combinations.
    #[must_use]
    pub const fn select(presence: SlotPresence) -> Self {
        let SlotPresence {
            flat,
            number,
            name,
            street_type,
            suburb,
        } = presence;

        match (flat, number, name, street_type, suburb) {
            (true, true, true, true, true) => Self::Full,
            (true, true, true, true, false) => Self::FlatNumberNameType,
            (false, true, true, true, true) => Self::NumberNameTypeSuburb,
            (true, false, true, true, true) => Self::FlatNameTypeSuburb,
            (true, true, true, false, false) => Self::FlatNumberName,
            (true, false, true, true, false) => Self::FlatNameType,
            (false, true, true, true, false) => Self::NumberNameType,
            (false, false, true, true, true) => Self::NameTypeSuburb,
            (true, true, false, false, false) => Self::FlatNumberStreetNumber,
            (false, true, true, false, false) => Self::NumberName,
            (true, false, true, false, false) => Self::FlatName,
            (false, false, true, true, false) => Self::NameType,
            (false, true, false, false, false) => Self::StreetNumber,
            (true, false, false, false, false) => Self::FlatNumber,
            (false, false, true, false, false) => Self::StreetName,
            (false, false, false, true, false) => Self::StreetType,
            (false, false, false, false, true) => Self::Suburb,
            (false, false, false, false, false) => Self::MatchAll,
            _ => Self::Composite,
        }
    }

    /// Builds this strategy's plan from the token values.
    #[must_use]
    pub fn plan(self, tokens: &ParsedAddressTokens) -> QueryPlan {
        let flat = || FieldClause::prefix(FieldName::FlatNumber, &tokens.flat_number);
        let number = || FieldClause::prefix(FieldName::StreetNumber, &tokens.street_number);
        let name = || {
            FieldClause::prefix(FieldName::StreetName, &tokens.street_name)
                .boosted(STREET_NAME_BOOST)
        };
        let street_type = || FieldClause::fuzzy(FieldName::StreetType, &tokens.street_type);
        let suburb = || FieldClause::fuzzy(FieldName::Suburb, &tokens.suburb);

        match self {
            Self::MatchAll => QueryPlan::MatchAll,
            Self::StreetNumber => QueryPlan::Single(number()),
            Self::FlatNumber => QueryPlan::Single(flat()),
            Self::StreetName => QueryPlan::Single(name()),
            Self::StreetType => QueryPlan::Single(street_type()),
            Self::Suburb => QueryPlan::Single(suburb()),
            Self::FlatNumberStreetNumber => QueryPlan::and(vec![flat(), number()]),
            Self::NumberName => QueryPlan::and(vec![number(), name()]),
            Self::FlatName => QueryPlan::and(vec![flat(), name()]),
            Self::NameType => QueryPlan::and(vec![name(), street_type()]),
            Self::NameTypeSuburb => QueryPlan::and(vec![
                FieldClause::fuzzy(FieldName::StreetName, &tokens.street_name)
                    .boosted(STREET_NAME_BOOST),
                street_type(),
                suburb(),
            ]),
            Self::FlatNameType => QueryPlan::and(vec![flat(), name(), street_type()]),
            Self::NumberNameType => QueryPlan::and(vec![number(), name(), street_type()]),
            Self::FlatNumberName => QueryPlan::and(vec![
                flat(),
                number().boosted(STREET_NUMBER_BOOST),
                name(),
            ]),
            Self::FlatNumberNameType => QueryPlan::and(vec![
                flat(),
                number().boosted(STREET_NUMBER_BOOST),
                name(),
                street_type(),
            ]),
            Self::NumberNameTypeSuburb => QueryPlan::and(vec![
                number().boosted(STREET_NUMBER_BOOST),
                name(),
                street_type(),
                suburb(),
            ]),
            Self::FlatNameTypeSuburb => {
                QueryPlan::and(vec![flat(), name(), street_type(), suburb()])
            }
            Self::Full => QueryPlan::and(vec![
                flat(),
                number().boosted(STREET_NUMBER_BOOST),
                name(),
                street_type(),
                suburb(),
            ]),
            Self::Composite => {
                let presence = SlotPresence::of(tokens);
                let mut clauses = Vec::with_capacity(5);
                if presence.flat {
                    clauses.push(flat());
                }
                if presence.number {
                    clauses.push(number().boosted(STREET_NUMBER_BOOST));
                }
                if presence.name {
                    clauses.push(name());
                }
                if presence.street_type {
                    clauses.push(street_type());
                }
                if presence.suburb {
                    clauses.push(suburb());
                }
                QueryPlan::and(clauses)
            }
        }
    }
}

/// Everything the plan builder derives from one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedQuery {
    /// Chosen strategy.
    pub strategy: Strategy,
    /// Field clauses to dispatch.
    pub query: QueryPlan,
    /// Ordering for equally relevant hits.
    pub sort: SortSpec,
}

impl PlannedQuery {
    /// Plans a query for the given tokens.
    #[must_use]
    pub fn new(tokens: &ParsedAddressTokens) -> Self {
        let strategy = Strategy::select(SlotPresence::of(tokens));
        let query = strategy.plan(tokens);
        let sort = SortSpec::for_tokens(tokens);

        log::info!(
            "Final search words: num({}) flat({}) loc({}) street({}) suburb({}) -> {strategy}",
            tokens.street_number,
            tokens.flat_number,
            tokens.street_name,
            tokens.street_type,
            tokens.suburb,
        );

        Self {
            strategy,
            query,
            sort,
        }
    }
}

/// Builds the query plan and sort for parsed tokens.
///
/// Never fails; empty tokens produce [`QueryPlan::MatchAll`].
#[must_use]
pub fn build(tokens: &ParsedAddressTokens) -> (QueryPlan, SortSpec) {
    let planned = PlannedQuery::new(tokens);
    (planned.query, planned.sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(
        flat: &str,
        number: &str,
        name: &str,
        street_type: &str,
        suburb: &str,
    ) -> ParsedAddressTokens {
        ParsedAddressTokens {
            flat_number: flat.to_string(),
            street_number: number.to_string(),
            street_name: name.to_string(),
            street_type: street_type.to_string(),
            suburb: suburb.to_string(),
        }
    }

    fn tokens_from_bits(bits: u8) -> ParsedAddressTokens {
        let pick = |bit: u8, value: &str| {
            if bits & (1 << bit) == 0 {
                String::new()
            } else {
                value.to_string()
            }
        };
        ParsedAddressTokens {
            flat_number: pick(0, "45"),
            street_number: pick(1, "15"),
            street_name: pick(2, "breaker"),
            street_type: pick(3, "street"),
            suburb: pick(4, "main beach"),
        }
    }

    #[test]
    fn empty_tokens_match_all() {
        let (query, sort) = build(&ParsedAddressTokens::default());
        assert_eq!(query, QueryPlan::MatchAll);
        assert_eq!(
            sort.keys(),
            [
                SortKey::asc(SortField::StreetNumber),
                SortKey::asc(SortField::StreetName)
            ]
        );
    }

    #[test]
    fn street_name_only_is_boosted_prefix() {
        let (query, _) = build(&tokens("", "", "wondai", "", ""));
        assert_eq!(
            query,
            QueryPlan::Single(
                FieldClause::prefix(FieldName::StreetName, "wondai").boosted(STREET_NAME_BOOST)
            )
        );
    }

    #[test]
    fn single_slot_strategies() {
        let cases = [
            (tokens("", "4", "", "", ""), FieldName::StreetNumber, MatchMode::Prefix),
            (tokens("22", "", "", "", ""), FieldName::FlatNumber, MatchMode::Prefix),
            (
                tokens("", "", "", "road", ""),
                FieldName::StreetType,
                MatchMode::Fuzzy(Fuzziness::Auto),
            ),
            (
                tokens("", "", "", "", "wondai"),
                FieldName::Suburb,
                MatchMode::Fuzzy(Fuzziness::Auto),
            ),
        ];
        for (t, field, mode) in cases {
            let (query, _) = build(&t);
            let QueryPlan::Single(clause) = query else {
                panic!("expected single clause for {t:?}");
            };
            assert_eq!(clause.field, field);
            assert_eq!(clause.mode, mode);
            assert!((clause.boost - DEFAULT_BOOST).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn number_and_name_boosts_name_only() {
        let (query, _) = build(&tokens("", "15", "breaker", "", ""));
        assert_eq!(
            query,
            QueryPlan::And(vec![
                FieldClause::prefix(FieldName::StreetNumber, "15"),
                FieldClause::prefix(FieldName::StreetName, "breaker").boosted(2.0),
            ])
        );
    }

    #[test]
    fn flat_number_name_boosts_number() {
        let (query, sort) = build(&tokens("45", "15", "breaker", "", ""));
        assert_eq!(
            query,
            QueryPlan::And(vec![
                FieldClause::prefix(FieldName::FlatNumber, "45"),
                FieldClause::prefix(FieldName::StreetNumber, "15").boosted(2.0),
                FieldClause::prefix(FieldName::StreetName, "breaker").boosted(2.0),
            ])
        );
        assert_eq!(
            sort.keys(),
            [
                SortKey::asc(SortField::StreetNumber),
                SortKey::asc(SortField::FlatNumber),
                SortKey::asc(SortField::StreetName)
            ]
        );
    }

    #[test]
    fn number_name_type_keeps_number_unboosted() {
        let planned = PlannedQuery::new(&tokens("", "15", "breaker", "street", ""));
        assert_eq!(planned.strategy, Strategy::NumberNameType);
        let number = planned.query.clause(FieldName::StreetNumber).unwrap();
        assert!((number.boost - DEFAULT_BOOST).abs() < f32::EPSILON);
        assert_eq!(
            planned.query.clause(FieldName::StreetType).unwrap().mode,
            MatchMode::Fuzzy(Fuzziness::Auto)
        );
    }

    #[test]
    fn name_type_suburb_uses_fuzzy_name() {
        let planned = PlannedQuery::new(&tokens("", "", "lower red hill", "road", "wondai"));
        assert_eq!(planned.strategy, Strategy::NameTypeSuburb);
        assert_eq!(
            planned.query,
            QueryPlan::And(vec![
                FieldClause::fuzzy(FieldName::StreetName, "lower red hill").boosted(2.0),
                FieldClause::fuzzy(FieldName::StreetType, "road"),
                FieldClause::fuzzy(FieldName::Suburb, "wondai"),
            ])
        );
    }

    #[test]
    fn oyster_cove_plan_ands_four_clauses() {
        let planned = PlannedQuery::new(&tokens(
            "",
            "11",
            "oyster cove",
            "promenade",
            "helensvale",
        ));
        assert_eq!(planned.strategy, Strategy::NumberNameTypeSuburb);
        assert_eq!(
            planned.query,
            QueryPlan::And(vec![
                FieldClause::prefix(FieldName::StreetNumber, "11").boosted(2.0),
                FieldClause::prefix(FieldName::StreetName, "oyster cove").boosted(2.0),
                FieldClause::fuzzy(FieldName::StreetType, "promenade"),
                FieldClause::fuzzy(FieldName::Suburb, "helensvale"),
            ])
        );
    }

    #[test]
    fn flat_name_type_suburb_matches_flat_value() {
        let (query, _) = build(&tokens("45", "", "breaker", "street", "main beach"));
        assert_eq!(
            query.clause(FieldName::FlatNumber),
            Some(&FieldClause::prefix(FieldName::FlatNumber, "45"))
        );
        assert_eq!(query.clauses().len(), 4);
    }

    #[test]
    fn all_five_slots_are_anded() {
        let planned = PlannedQuery::new(&tokens_from_bits(0b1_1111));
        assert_eq!(planned.strategy, Strategy::Full);
        assert_eq!(planned.query.clauses().len(), 5);
        let number = planned.query.clause(FieldName::StreetNumber).unwrap();
        assert!((number.boost - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn every_combination_maps_to_one_strategy() {
        for bits in 0u8..32 {
            let t = tokens_from_bits(bits);
            let planned = PlannedQuery::new(&t);
            let populated = bits.count_ones() as usize;

            assert_eq!(planned.query.clauses().len(), populated, "bits {bits:05b}");
            assert!(planned.query.clauses().iter().all(|c| !c.value.is_empty()));
            assert_eq!(planned.query == QueryPlan::MatchAll, bits == 0);

            if let Some(name) = planned.query.clause(FieldName::StreetName) {
                assert!((name.boost - STREET_NAME_BOOST).abs() < f32::EPSILON);
            }
            for clause in planned.query.clauses() {
                match clause.field {
                    FieldName::FlatNumber | FieldName::StreetNumber => {
                        assert_eq!(clause.mode, MatchMode::Prefix);
                    }
                    FieldName::StreetType | FieldName::Suburb => {
                        assert_eq!(clause.mode, MatchMode::Fuzzy(Fuzziness::Auto));
                    }
                    FieldName::StreetName => {}
                }
            }
        }
    }

    #[test]
    fn unlisted_combination_is_composite() {
        let planned = PlannedQuery::new(&tokens("", "", "break", "", "foo"));
        assert_eq!(planned.strategy, Strategy::Composite);
        assert_eq!(
            planned.query,
            QueryPlan::And(vec![
                FieldClause::prefix(FieldName::StreetName, "break").boosted(2.0),
                FieldClause::fuzzy(FieldName::Suburb, "foo"),
            ])
        );
    }

    #[test]
    fn auto_fuzziness_scales_with_length() {
        assert_eq!(Fuzziness::Auto.max_edits("45"), 0);
        assert_eq!(Fuzziness::Auto.max_edits("road"), 1);
        assert_eq!(Fuzziness::Auto.max_edits("promenade"), 2);
        assert_eq!(Fuzziness::Edits(5).max_edits("a"), 2);
    }

    #[test]
    fn field_names_match_index_fields() {
        assert_eq!(FieldName::StreetNumber.as_ref(), "number_first");
        assert_eq!(FieldName::Suburb.to_string(), "locality_name");
        assert_eq!(SortField::StreetName.as_ref(), "street_name_sort");
        assert_eq!(Strategy::NumberNameTypeSuburb.as_ref(), "number_name_type_suburb");
    }
}

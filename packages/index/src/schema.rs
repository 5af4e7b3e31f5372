//! Tantivy index schema definition for address lookup.
//!
//! Searchable address parts are tokenized with the `address` analyzer
//! (split on non-alphanumeric, lowercase, ASCII folding). The one-line
//! address is indexed twice: tokenized for display and search, and as a
//! single raw lowercase term for prefix completion.

use address_lookup_query::plan::FieldName;
use tantivy::Index;
use tantivy::schema::{
    Field, IndexRecordOption, NumericOptions, STORED, STRING, Schema, TextFieldIndexing,
    TextOptions,
};
use tantivy::tokenizer::{AsciiFoldingFilter, LowerCaser, SimpleTokenizer, TextAnalyzer};

/// Name of the analyzer used by every tokenized field.
pub const ADDRESS_TOKENIZER: &str = "address";

/// Names of all fields in the address schema.
pub struct FieldNames;

impl FieldNames {
    /// Persisted address id, exact match.
    pub const ID: &'static str = "id";
    /// Building name (stored only).
    pub const BUILDING_NAME: &'static str = "building_name";
    /// Flat type (stored only).
    pub const FLAT_TYPE: &'static str = "flat_type";
    /// Flat/unit number.
    pub const FLAT_NUMBER: &'static str = "flat_number";
    /// First street number.
    pub const NUMBER_FIRST: &'static str = "number_first";
    /// Last street number of a range (stored only).
    pub const NUMBER_LAST: &'static str = "number_last";
    /// Street name.
    pub const STREET_NAME: &'static str = "street_name";
    /// Street type code (e.g., "street").
    pub const STREET_TYPE_CODE: &'static str = "street_type_code";
    /// Suburb/locality name.
    pub const LOCALITY_NAME: &'static str = "locality_name";
    /// State abbreviation, exact match.
    pub const STATE_ABBREVIATION: &'static str = "state_abbreviation";
    /// Postcode, exact match.
    pub const POSTCODE: &'static str = "postcode";
    /// Latitude (WGS84).
    pub const LATITUDE: &'static str = "latitude";
    /// Longitude (WGS84).
    pub const LONGITUDE: &'static str = "longitude";
    /// One-line address, tokenized.
    pub const ADDRESS: &'static str = "address";
    /// One-line address as a single lowercase term for completion.
    pub const ADDRESS_SUGGEST: &'static str = "address_suggest";
}

/// All resolved field handles for efficient document construction.
#[derive(Debug, Clone)]
pub struct AddressFields {
    /// Persisted id.
    pub id: Field,
    /// Building name.
    pub building_name: Field,
    /// Flat type.
    pub flat_type: Field,
    /// Flat number.
    pub flat_number: Field,
    /// First street number.
    pub number_first: Field,
    /// Last street number.
    pub number_last: Field,
    /// Street name.
    pub street_name: Field,
    /// Street type code.
    pub street_type_code: Field,
    /// Locality name.
    pub locality_name: Field,
    /// State abbreviation.
    pub state_abbreviation: Field,
    /// Postcode.
    pub postcode: Field,
    /// Latitude.
    pub latitude: Field,
    /// Longitude.
    pub longitude: Field,
    /// Tokenized one-line address.
    pub address: Field,
    /// Raw one-line address for completion.
    pub address_suggest: Field,
}

impl AddressFields {
    /// Resolves field handles from a schema.
    ///
    /// # Panics
    ///
    /// Panics if the schema does not contain the expected fields
    /// (should only happen if the schema was not built by [`build_schema`]).
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let field = |name: &str| {
            schema
                .get_field(name)
                .unwrap_or_else(|_| panic!("schema missing {name} field"))
        };

        Self {
            id: field(FieldNames::ID),
            building_name: field(FieldNames::BUILDING_NAME),
            flat_type: field(FieldNames::FLAT_TYPE),
            flat_number: field(FieldNames::FLAT_NUMBER),
            number_first: field(FieldNames::NUMBER_FIRST),
            number_last: field(FieldNames::NUMBER_LAST),
            street_name: field(FieldNames::STREET_NAME),
            street_type_code: field(FieldNames::STREET_TYPE_CODE),
            locality_name: field(FieldNames::LOCALITY_NAME),
            state_abbreviation: field(FieldNames::STATE_ABBREVIATION),
            postcode: field(FieldNames::POSTCODE),
            latitude: field(FieldNames::LATITUDE),
            longitude: field(FieldNames::LONGITUDE),
            address: field(FieldNames::ADDRESS),
            address_suggest: field(FieldNames::ADDRESS_SUGGEST),
        }
    }

    /// Field handle for a query-plan field.
    #[must_use]
    pub const fn for_plan_field(&self, field: FieldName) -> Field {
        match field {
            FieldName::FlatNumber => self.flat_number,
            FieldName::StreetNumber => self.number_first,
            FieldName::StreetName => self.street_name,
            FieldName::StreetType => self.street_type_code,
            FieldName::Suburb => self.locality_name,
        }
    }
}

/// Builds the Tantivy schema for the address index.
///
/// Fields:
/// - `flat_number`, `number_first`, `street_name`, `street_type_code`,
///   `locality_name`, `address`: TEXT (`address` analyzer + stored)
/// - `id`, `state_abbreviation`, `postcode`: STRING (exact match + stored)
/// - `building_name`, `flat_type`, `number_last`: stored only
/// - `latitude`, `longitude`: f64 (stored)
/// - `address_suggest`: STRING (raw lowercase, not stored)
#[must_use]
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    let address_indexing = TextFieldIndexing::default()
        .set_tokenizer(ADDRESS_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqs);

    let text_stored = TextOptions::default()
        .set_indexing_options(address_indexing)
        .set_stored();

    builder.add_text_field(FieldNames::FLAT_NUMBER, text_stored.clone());
    builder.add_text_field(FieldNames::NUMBER_FIRST, text_stored.clone());
    builder.add_text_field(FieldNames::STREET_NAME, text_stored.clone());
    builder.add_text_field(FieldNames::STREET_TYPE_CODE, text_stored.clone());
    builder.add_text_field(FieldNames::LOCALITY_NAME, text_stored.clone());
    builder.add_text_field(FieldNames::ADDRESS, text_stored);

    builder.add_text_field(FieldNames::ID, STRING | STORED);
    builder.add_text_field(FieldNames::STATE_ABBREVIATION, STRING | STORED);
    builder.add_text_field(FieldNames::POSTCODE, STRING | STORED);

    builder.add_text_field(FieldNames::BUILDING_NAME, STORED);
    builder.add_text_field(FieldNames::FLAT_TYPE, STORED);
    builder.add_text_field(FieldNames::NUMBER_LAST, STORED);

    let f64_options = NumericOptions::default().set_stored();
    builder.add_f64_field(FieldNames::LATITUDE, f64_options.clone());
    builder.add_f64_field(FieldNames::LONGITUDE, f64_options);

    builder.add_text_field(FieldNames::ADDRESS_SUGGEST, STRING);

    builder.build()
}

/// Builds the analyzer shared by indexing and query-term extraction.
#[must_use]
pub fn address_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .build()
}

/// Registers the `address` analyzer on the given index.
pub fn register_tokenizers(index: &Index) {
    index
        .tokenizers()
        .register(ADDRESS_TOKENIZER, address_analyzer());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_expected_fields() {
        let schema = build_schema();
        for name in [
            FieldNames::ID,
            FieldNames::FLAT_NUMBER,
            FieldNames::NUMBER_FIRST,
            FieldNames::STREET_NAME,
            FieldNames::STREET_TYPE_CODE,
            FieldNames::LOCALITY_NAME,
            FieldNames::ADDRESS,
            FieldNames::ADDRESS_SUGGEST,
            FieldNames::LATITUDE,
        ] {
            assert!(schema.get_field(name).is_ok(), "missing {name}");
        }
    }

    #[test]
    fn plan_fields_use_index_field_names() {
        let schema = build_schema();
        let fields = AddressFields::from_schema(&schema);
        for plan_field in [
            FieldName::FlatNumber,
            FieldName::StreetNumber,
            FieldName::StreetName,
            FieldName::StreetType,
            FieldName::Suburb,
        ] {
            let field = fields.for_plan_field(plan_field);
            assert_eq!(schema.get_field_name(field), plan_field.as_ref());
        }
    }
}

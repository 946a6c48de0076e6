//! Basic company details extraction

use crate::error::ExtractorError;
use crate::fields::{is_truthy, opt_string, parse_number, value_to_text};
use crate::translation::{Taxonomy, TranslationTable};
use firmgraph_domain::{BasicCompanyDetails, Coordinates, RawCompanyRecord};
use serde_json::{Map, Value};
use tracing::warn;

/// Build the profile row of one company
///
/// `file_stem` is the input file name without extension and becomes
/// `business_id_raw`. Phone number and email are never read.
pub fn extract_basic_details(
    record: &RawCompanyRecord,
    file_stem: &str,
    business_id: &str,
    translations: &TranslationTable,
) -> Result<BasicCompanyDetails, ExtractorError> {
    let empty = Map::new();
    let address = record.get_object("address").unwrap_or(&empty);
    let fields = record.as_map();

    let main_line_of_business_category =
        resolve_category(record, Taxonomy::Category, translations)?;
    let main_line_of_business_subcategory =
        resolve_category(record, Taxonomy::SubCategory, translations)?;

    Ok(BasicCompanyDetails {
        business_id: business_id.to_string(),
        business_id_raw: file_stem.to_string(),
        name: opt_string(fields, "name"),
        province: opt_string(fields, "provinceName"),
        city: opt_string(fields, "cityName"),
        street_address: opt_string(address, "streetAddress"),
        postal_code: opt_string(address, "postalCode"),
        post_office: opt_string(address, "postOffice"),
        coordinates: extract_coordinates(record, business_id),
        postal_address: opt_string(fields, "postalAddressBox"),
        postal_address_code: opt_string(fields, "postalAddressPostalCode"),
        postal_address_post_office: opt_string(fields, "postalAddressPostOffice"),
        postal_address_country: opt_string(fields, "postalAddressCountryName"),
        postal_address_country_code: opt_string(fields, "postalAddressCountryCode"),
        company_form: opt_string(fields, "companyForm"),
        established_date: opt_string(fields, "established"),
        main_line_of_business_code: opt_string(fields, "tolMainLineofBusinessCode"),
        main_line_of_business_subcategory,
        main_line_of_business_category,
    })
}

/// Raw label of one taxonomy, `None` when falsy
pub fn raw_label(record: &RawCompanyRecord, taxonomy: Taxonomy) -> Option<String> {
    let raw = record.get(taxonomy.source_key());
    if !is_truthy(raw) {
        return None;
    }
    raw.and_then(value_to_text)
}

/// Translate the raw label of one taxonomy
///
/// An absent label is `None` without consulting the table; a present label
/// must translate.
pub fn resolve_category(
    record: &RawCompanyRecord,
    taxonomy: Taxonomy,
    translations: &TranslationTable,
) -> Result<Option<String>, ExtractorError> {
    match raw_label(record, taxonomy) {
        None => Ok(None),
        Some(label) => translations
            .translate(taxonomy, &label)
            .map(|translated| Some(translated.to_string())),
    }
}

/// Ordered pair from the coordinate object, in document order
fn extract_coordinates(record: &RawCompanyRecord, business_id: &str) -> Option<Coordinates> {
    let raw = record.get("coordinates");
    if !is_truthy(raw) {
        return None;
    }

    let values: Vec<&Value> = match raw {
        Some(Value::Object(map)) => map.values().collect(),
        _ => {
            warn!("Coordinates of {} are not an object, ignoring", business_id);
            return None;
        }
    };

    match values.as_slice() {
        [first, second] => match (parse_number(first), parse_number(second)) {
            (Ok(a), Ok(b)) => Some(Coordinates(a, b)),
            _ => {
                warn!("Coordinates of {} are not numeric, ignoring", business_id);
                None
            }
        },
        _ => {
            warn!(
                "Coordinates of {} have {} components, expected 2",
                business_id,
                values.len()
            );
            None
        }
    }
}

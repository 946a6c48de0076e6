//! Company module - the per-company profile row

use crate::table::{text_cell, TableRow};
use serde::Serialize;
use std::fmt;

/// An ordered geocoordinate pair
///
/// The pair keeps the order in which the source listed its values
/// (latitude first for the registry this data comes from).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    /// First component (latitude)
    pub fn lat(&self) -> f64 {
        self.0
    }

    /// Second component (longitude)
    pub fn lon(&self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((a, b): (f64, f64)) -> Self {
        Self(a, b)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// One profile row per company
///
/// Contact details present in the source (phone number, email) are never
/// carried into this row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicCompanyDetails {
    /// Canonical business identifier (join key)
    pub business_id: String,

    /// Identifier as given by the input file name
    pub business_id_raw: String,

    /// Registered company name
    pub name: Option<String>,

    /// Province of the registered address
    pub province: Option<String>,

    /// City of the registered address
    pub city: Option<String>,

    /// Street address
    pub street_address: Option<String>,

    /// Postal code of the registered address
    pub postal_code: Option<String>,

    /// Post office of the registered address
    pub post_office: Option<String>,

    /// Geocoordinates of the registered address
    pub coordinates: Option<Coordinates>,

    /// Postal (mailing) address box
    pub postal_address: Option<String>,

    /// Postal code of the mailing address
    pub postal_address_code: Option<String>,

    /// Post office of the mailing address
    pub postal_address_post_office: Option<String>,

    /// Country of the mailing address (may differ from the registered one)
    pub postal_address_country: Option<String>,

    /// Country code of the mailing address
    pub postal_address_country_code: Option<String>,

    /// Legal form of the company
    pub company_form: Option<String>,

    /// Establishment date as given by the source
    pub established_date: Option<String>,

    /// Main line of business code
    pub main_line_of_business_code: Option<String>,

    /// Translated main line of business (sub-category taxonomy)
    pub main_line_of_business_subcategory: Option<String>,

    /// Translated main line of business category
    pub main_line_of_business_category: Option<String>,
}

impl TableRow for BasicCompanyDetails {
    const TABLE: &'static str = "basic_details";

    const COLUMNS: &'static [&'static str] = &[
        "business_id",
        "business_id_raw",
        "name",
        "province",
        "city",
        "street_address",
        "postal_code",
        "post_office",
        "coordinates",
        "postal_address",
        "postal_address_code",
        "postal_address_post_office",
        "postal_address_country",
        "postal_address_country_code",
        "company_form",
        "established_date",
        "main_line_of_business_code",
        "main_line_of_business_subcategory",
        "main_line_of_business_category",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.business_id.clone(),
            self.business_id_raw.clone(),
            text_cell(&self.name),
            text_cell(&self.province),
            text_cell(&self.city),
            text_cell(&self.street_address),
            text_cell(&self.postal_code),
            text_cell(&self.post_office),
            self.coordinates.map(|c| c.to_string()).unwrap_or_default(),
            text_cell(&self.postal_address),
            text_cell(&self.postal_address_code),
            text_cell(&self.postal_address_post_office),
            text_cell(&self.postal_address_country),
            text_cell(&self.postal_address_country_code),
            text_cell(&self.company_form),
            text_cell(&self.established_date),
            text_cell(&self.main_line_of_business_code),
            text_cell(&self.main_line_of_business_subcategory),
            text_cell(&self.main_line_of_business_category),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BasicCompanyDetails {
        BasicCompanyDetails {
            business_id: "1234567-8".to_string(),
            business_id_raw: "1234567-8".to_string(),
            name: Some("Example Oy".to_string()),
            province: None,
            city: Some("Helsinki".to_string()),
            street_address: None,
            postal_code: None,
            post_office: None,
            coordinates: Some(Coordinates(60.17, 24.94)),
            postal_address: None,
            postal_address_code: None,
            postal_address_post_office: None,
            postal_address_country: None,
            postal_address_country_code: None,
            company_form: Some("Osakeyhtiö".to_string()),
            established_date: None,
            main_line_of_business_code: None,
            main_line_of_business_subcategory: None,
            main_line_of_business_category: Some("Software".to_string()),
        }
    }

    #[test]
    fn test_cells_match_columns() {
        let row = sample();
        assert_eq!(row.cells().len(), BasicCompanyDetails::COLUMNS.len());
    }

    #[test]
    fn test_coordinates_render_as_pair() {
        let row = sample();
        let cells = row.cells();
        assert_eq!(cells[8], "(60.17, 24.94)");
        assert_eq!(cells[3], "");
    }

    #[test]
    fn test_coordinates_accessors() {
        let c = Coordinates::from((60.17, 24.94));
        assert_eq!(c.lat(), 60.17);
        assert_eq!(c.lon(), 24.94);
    }
}

//! Associated decision-maker extraction
//!
//! `finderDecisionPersons` groups persons under intermediary entities. Every
//! person of every group is flattened into its own row. Numeric fields here
//! come from a less curated source, so unparseable values become `None`.

use crate::decision::person_objects;
use crate::error::ExtractorError;
use crate::fields::{coerce_numeric, opt_string, NumericErrorPolicy};
use firmgraph_domain::{AssociatedDecisionPersonRecord, RawCompanyRecord};

/// Key of the associated group list in the company record
pub const ASSOCIATED_GROUPS_KEY: &str = "finderDecisionPersons";

const NUMERIC_POLICY: NumericErrorPolicy = NumericErrorPolicy::Null;

/// One row per person across all associated groups
pub fn extract_associated_persons(
    record: &RawCompanyRecord,
    business_id: &str,
) -> Result<Vec<AssociatedDecisionPersonRecord>, ExtractorError> {
    let groups = record.get_array(ASSOCIATED_GROUPS_KEY).unwrap_or(&[]);
    let mut rows = Vec::new();

    for (group_idx, group) in person_objects(groups, ASSOCIATED_GROUPS_KEY)?
        .into_iter()
        .enumerate()
    {
        let persons = group
            .get("decisionPersons")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let path = format!("{}[{}].decisionPersons", ASSOCIATED_GROUPS_KEY, group_idx);

        for person in person_objects(persons, &path)? {
            // Null policy never yields Err
            let company_turnover =
                coerce_numeric(person.get("companyTurnover"), NUMERIC_POLICY).unwrap_or(None);
            let company_operating_margin =
                coerce_numeric(person.get("companyOperatingMargin"), NUMERIC_POLICY)
                    .unwrap_or(None);

            rows.push(AssociatedDecisionPersonRecord {
                business_id: business_id.to_string(),
                finder_decision_person_id: opt_string(person, "decisionPersonId"),
                first_name: opt_string(person, "firstName"),
                last_name: opt_string(person, "lastName"),
                full_name: opt_string(person, "companyName"),
                position_text: opt_string(person, "positionText"),
                position_id: opt_string(person, "positionId"),
                status_id: opt_string(person, "statusId"),
                office_id: opt_string(person, "officeId"),
                person_reg_date: opt_string(person, "personRegDate"),
                prh_id: opt_string(person, "prhId"),
                company_turnover,
                company_operating_margin,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> RawCompanyRecord {
        RawCompanyRecord::new(value.as_object().cloned().unwrap())
    }

    fn turnover_of(raw: Value) -> Option<f64> {
        let rec = record(json!({
            "finderDecisionPersons": [{"decisionPersons": [{"companyTurnover": raw}]}]
        }));
        extract_associated_persons(&rec, "id").unwrap()[0].company_turnover
    }

    #[test]
    fn test_flattens_groups() {
        let rec = record(json!({
            "finderDecisionPersons": [
                {"decisionPersons": [{"firstName": "A"}, {"firstName": "B"}]},
                {"decisionPersons": []},
                {},
                {"decisionPersons": [{"firstName": "C"}]}
            ]
        }));
        let rows = extract_associated_persons(&rec, "1234567-8").unwrap();
        let names: Vec<&str> = rows.iter().filter_map(|r| r.first_name.as_deref()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(rows.iter().all(|r| r.business_id == "1234567-8"));
    }

    #[test]
    fn test_numeric_coercion_is_tolerant() {
        assert_eq!(turnover_of(json!("not-a-number")), None);
        assert_eq!(turnover_of(json!("")), None);
        assert_eq!(turnover_of(json!(null)), None);
        assert_eq!(turnover_of(json!("4200.5")), Some(4200.5));
        assert_eq!(turnover_of(json!(17)), Some(17.0));
    }

    #[test]
    fn test_field_mapping() {
        let rec = record(json!({
            "finderDecisionPersons": [{
                "decisionPersons": [{
                    "decisionPersonId": "55",
                    "companyName": "Holding Oy",
                    "positionText": "Hallituksen jäsen",
                    "personRegDate": "2020-01-01",
                    "companyOperatingMargin": "-3.2"
                }]
            }]
        }));
        let row = &extract_associated_persons(&rec, "id").unwrap()[0];
        assert_eq!(row.finder_decision_person_id.as_deref(), Some("55"));
        assert_eq!(row.full_name.as_deref(), Some("Holding Oy"));
        assert_eq!(row.person_reg_date.as_deref(), Some("2020-01-01"));
        assert_eq!(row.company_operating_margin, Some(-3.2));
        assert_eq!(row.company_turnover, None);
    }

    #[test]
    fn test_no_groups() {
        assert!(extract_associated_persons(&record(json!({})), "id").unwrap().is_empty());
    }
}

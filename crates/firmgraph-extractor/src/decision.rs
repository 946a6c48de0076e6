//! Primary decision-maker extraction

use crate::error::ExtractorError;
use crate::fields::{join_list, opt_string};
use firmgraph_domain::{DecisionPersonRecord, RawCompanyRecord};
use serde_json::{Map, Value};

/// Key of the decision person list in the company record
pub const DECISION_PERSONS_KEY: &str = "decisionPersons";

/// Borrow each entry of a list as an object
///
/// `path` names the list in error messages.
pub(crate) fn person_objects<'a>(
    persons: &'a [Value],
    path: &str,
) -> Result<Vec<&'a Map<String, Value>>, ExtractorError> {
    persons
        .iter()
        .enumerate()
        .map(|(idx, person)| {
            person.as_object().ok_or_else(|| ExtractorError::MalformedInput {
                path: format!("{}[{}]", path, idx),
                reason: "expected an object".to_string(),
            })
        })
        .collect()
}

/// One row per person directly listed as a decision-maker
pub fn extract_decision_persons(
    record: &RawCompanyRecord,
    business_id: &str,
) -> Result<Vec<DecisionPersonRecord>, ExtractorError> {
    let persons = record.get_array(DECISION_PERSONS_KEY).unwrap_or(&[]);

    let rows = person_objects(persons, DECISION_PERSONS_KEY)?
        .into_iter()
        .map(|person| DecisionPersonRecord {
            business_id: business_id.to_string(),
            decision_person_id: opt_string(person, "decisionPersonId"),
            office_id: opt_string(person, "officeId"),
            position_id: opt_string(person, "positionId"),
            position_text: opt_string(person, "positionText"),
            first_name: opt_string(person, "firstName"),
            last_name: opt_string(person, "lastName"),
            gender: opt_string(person, "gender"),
            status_id: opt_string(person, "statusId"),
            prh_id: opt_string(person, "prhId"),
            mbs_id: opt_string(person, "mbsId"),
            responsibilities: join_list(person, "responsibilities"),
            responsibilities_text: join_list(person, "responsibilitiesText"),
        })
        .collect();

    Ok(rows)
}

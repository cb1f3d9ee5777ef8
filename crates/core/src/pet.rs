//! Pet field rules: enumerations, normalization, validation and merge.
//!
//! A [`PetFields`] value is whatever a client submitted (every field
//! optional). [`PetFields::validate`] turns it into a [`PetData`] or a
//! [`CoreError::Validation`] naming every offending field. Updates are
//! merged with [`PetFields::overlay`] before validating, so required-ness is
//! enforced against the merged record and never against the delta.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Wire format for birthdates.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Leads every message produced by [`PetFields::validate`].
pub const VALIDATION_PREFIX: &str = "Pet validation failed: ";

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Kind of animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Other,
}

impl PetType {
    pub const ALL: [PetType; 4] = [PetType::Dog, PetType::Cat, PetType::Bird, PetType::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::Other => "other",
        }
    }
}

impl FromStr for PetType {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PetType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "type '{s}' is not one of {}",
                    joined(PetType::ALL.map(PetType::as_str))
                ))
            })
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "gender '{s}' is not one of {}",
                    joined(Gender::ALL.map(Gender::as_str))
                ))
            })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn joined<const N: usize>(names: [&str; N]) -> String {
    names.join(", ")
}

// ---------------------------------------------------------------------------
// Submitted fields
// ---------------------------------------------------------------------------

/// Pet fields as submitted by a client: a create payload or an update delta.
///
/// Unknown keys (`id`, `createdAt`, ...) are ignored. An absent key means
/// "not submitted"; an explicit `null` is submitted as blank, so it fails the
/// required check instead of keeping the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetFields {
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthdate: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,
}

/// A validated, normalized pet body ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetData {
    pub name: String,
    pub pet_type: PetType,
    pub birthdate: NaiveDate,
    pub gender: Gender,
    pub description: String,
    pub photo: String,
}

impl PetFields {
    /// Merge `delta` onto `self`: every field present in `delta` wins.
    pub fn overlay(self, delta: PetFields) -> PetFields {
        PetFields {
            name: delta.name.or(self.name),
            pet_type: delta.pet_type.or(self.pet_type),
            birthdate: delta.birthdate.or(self.birthdate),
            gender: delta.gender.or(self.gender),
            description: delta.description.or(self.description),
            photo: delta.photo.or(self.photo),
        }
    }

    /// Check presence and enum membership, then normalize.
    ///
    /// All problems are reported together, in field order, after
    /// [`VALIDATION_PREFIX`].
    pub fn validate(&self) -> Result<PetData, CoreError> {
        let mut problems: Vec<String> = Vec::new();

        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            problems.push("name is required".into());
        }

        let pet_type = match non_empty(&self.pet_type) {
            None => {
                problems.push("type is required".into());
                None
            }
            Some(raw) => raw.parse::<PetType>().map_err(|e| push(&mut problems, e)).ok(),
        };

        let birthdate = match non_empty(&self.birthdate) {
            None => {
                problems.push("birthdate is required".into());
                None
            }
            Some(raw) => parse_birthdate(raw)
                .map_err(|e| push(&mut problems, e))
                .ok(),
        };

        let gender = match non_empty(&self.gender) {
            None => {
                problems.push("gender is required".into());
                None
            }
            Some(raw) => raw.parse::<Gender>().map_err(|e| push(&mut problems, e)).ok(),
        };

        let description = self.description.as_deref().unwrap_or_default();
        if description.is_empty() {
            problems.push("description is required".into());
        }

        let photo = self.photo.as_deref().unwrap_or_default();
        if photo.is_empty() {
            problems.push("photo is required".into());
        }

        match (pet_type, birthdate, gender) {
            (Some(pet_type), Some(birthdate), Some(gender)) if problems.is_empty() => Ok(PetData {
                name: name.to_string(),
                pet_type,
                birthdate,
                gender,
                description: description.to_string(),
                photo: photo.to_string(),
            }),
            _ => Err(CoreError::Validation(format!(
                "{VALIDATION_PREFIX}{}",
                problems.join("; ")
            ))),
        }
    }
}

impl From<&PetData> for PetFields {
    fn from(data: &PetData) -> Self {
        PetFields {
            name: Some(data.name.clone()),
            pet_type: Some(data.pet_type.as_str().to_string()),
            birthdate: Some(data.birthdate.format(BIRTHDATE_FORMAT).to_string()),
            gender: Some(data.gender.as_str().to_string()),
            description: Some(data.description.clone()),
            photo: Some(data.photo.clone()),
        }
    }
}

/// Only called for keys present in the body; `null` becomes an empty value.
fn null_as_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn push(problems: &mut Vec<String>, err: CoreError) {
    match err {
        CoreError::Validation(msg) => problems.push(msg),
        other => problems.push(other.to_string()),
    }
}

/// Parse a birthdate given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp (the date part, in UTC, is kept).
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, BIRTHDATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| CoreError::Validation(format!("birthdate '{raw}' is not a valid date")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn rex() -> PetFields {
        PetFields {
            name: Some("  Rex ".into()),
            pet_type: Some("DOG".into()),
            birthdate: Some("2020-01-01".into()),
            gender: Some("Male".into()),
            description: Some("Friendly".into()),
            photo: Some("http://x/y.jpg".into()),
        }
    }

    /// The problem list of a failed validation, without the prefix.
    fn validation_message(fields: &PetFields) -> String {
        match fields.validate() {
            Err(CoreError::Validation(msg)) => msg
                .strip_prefix(VALIDATION_PREFIX)
                .unwrap_or_else(|| panic!("missing prefix: {msg}"))
                .to_string(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn message_names_the_record() {
        let fields = PetFields {
            name: None,
            pet_type: Some("fish".into()),
            ..rex()
        };
        assert_matches!(
            fields.validate(),
            Err(CoreError::Validation(msg))
                if msg == "Pet validation failed: name is required; type 'fish' is not one of dog, cat, bird, other"
        );
    }

    #[test]
    fn valid_fields_are_normalized() {
        let data = rex().validate().unwrap();
        assert_eq!(data.name, "Rex");
        assert_eq!(data.pet_type, PetType::Dog);
        assert_eq!(data.gender, Gender::Male);
        assert_eq!(data.birthdate, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(data.description, "Friendly");
        assert_eq!(data.photo, "http://x/y.jpg");
    }

    #[test]
    fn rfc3339_birthdate_keeps_utc_date() {
        let fields = PetFields {
            birthdate: Some("2020-01-01T00:00:00.000Z".into()),
            ..rex()
        };
        assert_eq!(
            fields.validate().unwrap().birthdate,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn every_missing_field_is_named() {
        let msg = validation_message(&PetFields::default());
        for field in ["name", "type", "birthdate", "gender", "description", "photo"] {
            assert!(msg.contains(&format!("{field} is required")), "{msg}");
        }
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let fields = PetFields {
            name: Some("   ".into()),
            ..rex()
        };
        assert_eq!(validation_message(&fields), "name is required");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let fields = PetFields {
            pet_type: Some("fish".into()),
            ..rex()
        };
        assert_eq!(
            validation_message(&fields),
            "type 'fish' is not one of dog, cat, bird, other"
        );
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let fields = PetFields {
            gender: Some("unknown".into()),
            ..rex()
        };
        assert!(validation_message(&fields).starts_with("gender 'unknown'"));
    }

    #[test]
    fn bad_birthdate_is_rejected() {
        let fields = PetFields {
            birthdate: Some("yesterday".into()),
            ..rex()
        };
        assert_eq!(
            validation_message(&fields),
            "birthdate 'yesterday' is not a valid date"
        );
    }

    #[test]
    fn overlay_keeps_omitted_fields() {
        let base = PetFields::from(&rex().validate().unwrap());
        let merged = base.overlay(PetFields {
            name: Some("Max".into()),
            ..PetFields::default()
        });

        let data = merged.validate().unwrap();
        assert_eq!(data.name, "Max");
        assert_eq!(data.pet_type, PetType::Dog);
        assert_eq!(data.description, "Friendly");
    }

    #[test]
    fn overlay_validates_submitted_values() {
        let base = PetFields::from(&rex().validate().unwrap());
        let merged = base.overlay(PetFields {
            gender: Some("robot".into()),
            ..PetFields::default()
        });
        assert_matches!(merged.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn enum_parsing_is_case_insensitive() {
        assert_eq!("CaT".parse::<PetType>().unwrap(), PetType::Cat);
        assert_eq!(" FEMALE ".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn fields_ignore_unknown_keys() {
        let fields: PetFields = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "createdAt": "2024-01-01T00:00:00Z",
            "type": "bird",
        }))
        .unwrap();
        assert_eq!(fields.pet_type.as_deref(), Some("bird"));
        assert_eq!(fields.photo, None);
    }

    #[test]
    fn explicit_null_blanks_the_stored_value() {
        let delta: PetFields =
            serde_json::from_value(serde_json::json!({ "name": null })).unwrap();
        assert_eq!(delta.name.as_deref(), Some(""));
        assert_eq!(delta.gender, None);

        let base = PetFields::from(&rex().validate().unwrap());
        assert_eq!(validation_message(&base.overlay(delta)), "name is required");
    }

    #[test]
    fn free_text_fields_only_reject_empty() {
        let fields = PetFields {
            description: Some("  ".into()),
            photo: Some(" ".into()),
            ..rex()
        };
        let data = fields.validate().unwrap();
        assert_eq!(data.description, "  ");
        assert_eq!(data.photo, " ");

        let empty = PetFields {
            description: Some(String::new()),
            photo: Some(String::new()),
            ..rex()
        };
        assert_eq!(
            validation_message(&empty),
            "description is required; photo is required"
        );
    }
}

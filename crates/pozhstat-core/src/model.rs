use crate::error::PozhstatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute dimension of a victim record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VictimField {
    SocialStatus,
    Condition,
    DeathCause,
    DeathPlace,
}

impl VictimField {
    pub const ALL: [VictimField; 4] = [
        VictimField::SocialStatus,
        VictimField::Condition,
        VictimField::DeathCause,
        VictimField::DeathPlace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VictimField::SocialStatus => "socialStatus",
            VictimField::Condition => "condition",
            VictimField::DeathCause => "deathCause",
            VictimField::DeathPlace => "deathPlace",
        }
    }
}

impl fmt::Display for VictimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VictimField {
    type Err = PozhstatError;

    /// Accepts the camelCase wire name as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "socialstatus" => Ok(VictimField::SocialStatus),
            "condition" => Ok(VictimField::Condition),
            "deathcause" => Ok(VictimField::DeathCause),
            "deathplace" => Ok(VictimField::DeathPlace),
            _ => Err(PozhstatError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VictimOutcome {
    Dead,
    Injured,
}

impl fmt::Display for VictimOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VictimOutcome::Dead => write!(f, "dead"),
            VictimOutcome::Injured => write!(f, "injured"),
        }
    }
}

/// A victim as stored on an incident record. Attribute values may be legacy aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VictimRecord {
    pub outcome: VictimOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,
}

impl VictimRecord {
    pub fn new(outcome: VictimOutcome) -> Self {
        Self {
            outcome,
            social_status: None,
            condition: None,
            death_cause: None,
            death_place: None,
        }
    }

    /// Raw stored value for one attribute dimension.
    pub fn value(&self, field: VictimField) -> Option<&str> {
        match field {
            VictimField::SocialStatus => self.social_status.as_deref(),
            VictimField::Condition => self.condition.as_deref(),
            VictimField::DeathCause => self.death_cause.as_deref(),
            VictimField::DeathPlace => self.death_place.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Form-4 object-of-origin code, e.g. "14.1.2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_code: Option<String>,
    #[serde(default)]
    pub victims: Vec<VictimRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    /// 1-СПЖС, residential-sector fires.
    Form5,
    /// 7-CO, carbon-monoxide poisoning without fire.
    Form7,
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormId::Form5 => write!(f, "form5"),
            FormId::Form7 => write!(f, "form7"),
        }
    }
}

impl FromStr for FormId {
    type Err = PozhstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "form5" | "5" | "spzhs" => Ok(FormId::Form5),
            "form7" | "7" | "co" => Ok(FormId::Form7),
            _ => Err(PozhstatError::UnknownForm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str_variants() {
        assert_eq!(
            "socialStatus".parse::<VictimField>().unwrap(),
            VictimField::SocialStatus
        );
        assert_eq!(
            "death_cause".parse::<VictimField>().unwrap(),
            VictimField::DeathCause
        );
        assert_eq!(
            "death-place".parse::<VictimField>().unwrap(),
            VictimField::DeathPlace
        );
        assert!("age".parse::<VictimField>().is_err());
    }

    #[test]
    fn test_form_from_str() {
        assert_eq!("form5".parse::<FormId>().unwrap(), FormId::Form5);
        assert_eq!("CO".parse::<FormId>().unwrap(), FormId::Form7);
        assert!("form9".parse::<FormId>().is_err());
    }

    #[test]
    fn test_victim_record_camel_case_json() {
        let json = r#"{ "outcome": "dead", "socialStatus": "worker", "deathCause": "psych" }"#;
        let v: VictimRecord = serde_json::from_str(json).unwrap();
        assert_eq!(v.outcome, VictimOutcome::Dead);
        assert_eq!(v.value(VictimField::SocialStatus), Some("worker"));
        assert_eq!(v.value(VictimField::DeathCause), Some("psych"));
        assert_eq!(v.value(VictimField::Condition), None);
    }
}

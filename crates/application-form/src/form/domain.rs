use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format produced by `datetime-local` style inputs.
pub const INTERVIEW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Position the applicant is applying for. `Unselected` is the initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    #[serde(rename = "")]
    Unselected,
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unselected => "Select",
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Developers and designers are asked for years of relevant experience.
    pub const fn requires_relevant_experience(self) -> bool {
        matches!(self, Self::Developer | Self::Designer)
    }

    pub const fn requires_portfolio(self) -> bool {
        matches!(self, Self::Designer)
    }

    pub const fn requires_management_experience(self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" => Ok(Self::Unselected),
            "Developer" => Ok(Self::Developer),
            "Designer" => Ok(Self::Designer),
            "Manager" => Ok(Self::Manager),
            other => Err(FormError::UnknownPosition(other.to_string())),
        }
    }
}

/// Skills offered as checkboxes on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const fn ordered() -> [Self; 3] {
        [Self::JavaScript, Self::Css, Self::Python]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Skill {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|skill| skill.label() == value)
            .ok_or_else(|| FormError::UnknownSkill(value.to_string()))
    }
}

/// Raw text of the relevant-experience input.
///
/// The editor is a number input, so the wire accepts either a JSON number or a string.
/// Interpretation happens at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experience(String);

impl Experience {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Years of experience when the text is a finite number.
    pub fn years(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|years| years.is_finite())
    }
}

impl From<&str> for Experience {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for Experience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Experience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
            Decimal(f64),
            Empty,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Integer(years) => Self(years.to_string()),
            Raw::Decimal(years) => Self(years.to_string()),
            Raw::Empty => Self::default(),
        })
    }
}

/// The single record edited during one form session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub relevant_experience: Experience,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: BTreeSet<Skill>,
    pub preferred_interview_time: String,
}

impl ApplicationForm {
    /// Interview slot when the stored text is a well-formed local timestamp.
    pub fn interview_slot(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.preferred_interview_time, INTERVIEW_TIME_FORMAT).ok()
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }
}

/// Field identifiers, serialized with the form's camelCase input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl FieldName {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::FullName,
            Self::Email,
            Self::PhoneNumber,
            Self::Position,
            Self::RelevantExperience,
            Self::PortfolioUrl,
            Self::ManagementExperience,
            Self::AdditionalSkills,
            Self::PreferredInterviewTime,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioURL",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::PreferredInterviewTime => "Preferred Interview Time",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|field| field.key() == value)
            .ok_or_else(|| FormError::UnknownField(value.to_string()))
    }
}

/// A typed overwrite of one scalar field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    FullName(String),
    Email(String),
    PhoneNumber(String),
    Position(Position),
    RelevantExperience(Experience),
    PortfolioUrl(String),
    ManagementExperience(String),
    PreferredInterviewTime(String),
}

impl FieldEdit {
    /// Build an edit from a wire field name and the editor's text.
    pub fn parse(name: &str, value: &str) -> Result<Self, FormError> {
        let field: FieldName = name.parse()?;
        let value = value.to_string();
        Ok(match field {
            FieldName::FullName => Self::FullName(value),
            FieldName::Email => Self::Email(value),
            FieldName::PhoneNumber => Self::PhoneNumber(value),
            FieldName::Position => Self::Position(value.parse()?),
            FieldName::RelevantExperience => Self::RelevantExperience(Experience::new(value)),
            FieldName::PortfolioUrl => Self::PortfolioUrl(value),
            FieldName::ManagementExperience => Self::ManagementExperience(value),
            FieldName::PreferredInterviewTime => Self::PreferredInterviewTime(value),
            FieldName::AdditionalSkills => return Err(FormError::NotAScalarField(field)),
        })
    }

    pub fn field(&self) -> FieldName {
        match self {
            Self::FullName(_) => FieldName::FullName,
            Self::Email(_) => FieldName::Email,
            Self::PhoneNumber(_) => FieldName::PhoneNumber,
            Self::Position(_) => FieldName::Position,
            Self::RelevantExperience(_) => FieldName::RelevantExperience,
            Self::PortfolioUrl(_) => FieldName::PortfolioUrl,
            Self::ManagementExperience(_) => FieldName::ManagementExperience,
            Self::PreferredInterviewTime(_) => FieldName::PreferredInterviewTime,
        }
    }

    pub(crate) fn apply(self, form: &mut ApplicationForm) {
        match self {
            Self::FullName(value) => form.full_name = value,
            Self::Email(value) => form.email = value,
            Self::PhoneNumber(value) => form.phone_number = value,
            Self::Position(value) => form.position = value,
            Self::RelevantExperience(value) => form.relevant_experience = value,
            Self::PortfolioUrl(value) => form.portfolio_url = value,
            Self::ManagementExperience(value) => form.management_experience = value,
            Self::PreferredInterviewTime(value) => form.preferred_interview_time = value,
        }
    }
}

/// One message per failing field. Absence of a field means it currently passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Failures turning string-keyed input into typed form edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("unknown position '{0}' (expected Developer, Designer, or Manager)")]
    UnknownPosition(String),
    #[error("unknown skill '{0}' (expected JavaScript, CSS, or Python)")]
    UnknownSkill(String),
    #[error("field '{0}' is edited by toggling skills, not by value")]
    NotAScalarField(FieldName),
    #[error("field '{0}' expects a string or number value")]
    UnsupportedValue(String),
}

//! Employee directory data model.
//!
//! Direct reports are held as identifier references only. Any descriptive data
//! about a subordinate must be fetched from the directory by identifier.

use std::fmt;

use uuid::Uuid;

/// Validation errors returned when parsing an [`EmployeeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyId,
    SurroundingWhitespace,
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "employee id must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "employee id must not start or end with whitespace")
            }
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

/// Opaque employee identifier.
///
/// Identifiers minted by the directory are UUID v4 strings, but any non-empty
/// value without surrounding whitespace is accepted so existing keys resolve.
///
/// # Examples
/// ```
/// use org_directory::domain::EmployeeId;
///
/// let id = EmployeeId::new("16a596ae-edd3-4847-99fe-c4518e82c86f").expect("valid id");
/// assert_eq!(id.as_ref(), "16a596ae-edd3-4847-99fe-c4518e82c86f");
/// assert!(EmployeeId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an identifier from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Mint a fresh identifier for a newly created employee.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, EmployeeValidationError> {
        if id.is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(EmployeeValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Employee attributes without an identifier.
///
/// Used as the create and update payload; the directory decides the
/// identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<EmployeeId>,
}

/// Authoritative employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    employee_id: EmployeeId,
    first_name: String,
    last_name: String,
    position: String,
    department: String,
    direct_reports: Vec<EmployeeId>,
}

impl Employee {
    /// Bind a draft to an identifier.
    pub fn new(employee_id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft {
            first_name,
            last_name,
            position,
            department,
            direct_reports,
        } = draft;
        Self {
            employee_id,
            first_name,
            last_name,
            position,
            department,
            direct_reports,
        }
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn position(&self) -> &str {
        self.position.as_str()
    }

    pub fn department(&self) -> &str {
        self.department.as_str()
    }

    /// Identifiers of the employees reporting directly to this one, in stored
    /// order.
    pub fn direct_reports(&self) -> &[EmployeeId] {
        self.direct_reports.as_slice()
    }

    /// Split the record back into its identifier and attributes.
    pub fn into_parts(self) -> (EmployeeId, EmployeeDraft) {
        (
            self.employee_id,
            EmployeeDraft {
                first_name: self.first_name,
                last_name: self.last_name,
                position: self.position,
                department: self.department,
                direct_reports: self.direct_reports,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", EmployeeValidationError::EmptyId)]
    #[case(" abc", EmployeeValidationError::SurroundingWhitespace)]
    #[case("abc\n", EmployeeValidationError::SurroundingWhitespace)]
    fn rejects_malformed_identifiers(#[case] raw: &str, #[case] expected: EmployeeValidationError) {
        assert_eq!(EmployeeId::new(raw), Err(expected));
    }

    #[rstest]
    #[case("16a596ae-edd3-4847-99fe-c4518e82c86f")]
    #[case("legacy-key-7")]
    fn accepts_opaque_identifiers(#[case] raw: &str) {
        let id = EmployeeId::new(raw).expect("identifier is valid");
        assert_eq!(String::from(id), raw);
    }

    #[rstest]
    fn random_identifiers_are_uuids() {
        let id = EmployeeId::random();
        assert!(Uuid::parse_str(id.as_ref()).is_ok());
        assert_ne!(id, EmployeeId::random());
    }

    #[rstest]
    fn into_parts_returns_the_draft() {
        let report = EmployeeId::new("b").expect("valid id");
        let draft = EmployeeDraft {
            first_name: "John".into(),
            last_name: "Lennon".into(),
            position: "Development Manager".into(),
            department: "Engineering".into(),
            direct_reports: vec![report],
        };
        let id = EmployeeId::new("a").expect("valid id");
        let employee = Employee::new(id.clone(), draft.clone());

        assert_eq!(employee.direct_reports().len(), 1);
        assert_eq!(employee.into_parts(), (id, draft));
    }
}

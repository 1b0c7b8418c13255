//! Building aggregate and its value objects.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::BuildingId;

/// Short human-readable building identifier, distinct from the persisted id.
/// Up to 5 alphanumeric characters or spaces, not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingCode(String);

impl BuildingCode {
    pub const MAX_LEN: usize = 5;

    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::Blank {
                field: "building code",
            });
        }
        if raw.chars().count() > Self::MAX_LEN {
            return Err(DomainError::TooLong {
                field: "building code",
                max: Self::MAX_LEN,
                len: raw.chars().count(),
            });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
            return Err(DomainError::InvalidCharacters {
                field: "building code",
                value: raw,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Optional building name, up to 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingName(String);

impl BuildingName {
    pub const MAX_LEN: usize = 50;

    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::Blank {
                field: "building name",
            });
        }
        if raw.chars().count() > Self::MAX_LEN {
            return Err(DomainError::TooLong {
                field: "building name",
                max: Self::MAX_LEN,
                len: raw.chars().count(),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text description shared by several aggregates, up to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description(String);

impl Description {
    pub const MAX_LEN: usize = 255;

    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.chars().count() > Self::MAX_LEN {
            return Err(DomainError::TooLong {
                field: "description",
                max: Self::MAX_LEN,
                len: raw.chars().count(),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Interior grid dimensions of a building. The rendered map adds one outer
/// border ring on top of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingDimensions {
    width: i32,
    length: i32,
}

impl BuildingDimensions {
    pub fn new(width: i32, length: i32) -> Result<Self, DomainError> {
        if width < 1 {
            return Err(DomainError::BelowMinimum {
                field: "building width",
                min: 1,
                value: width,
            });
        }
        if length < 1 {
            return Err(DomainError::BelowMinimum {
                field: "building length",
                min: 1,
                value: length,
            });
        }
        Ok(Self { width, length })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }
}

/// Building aggregate. Floors reference their building by owned copy; the
/// service layer keeps copies in sync on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    id: BuildingId,
    code: BuildingCode,
    name: Option<BuildingName>,
    description: Option<Description>,
    dimensions: BuildingDimensions,
}

impl Building {
    pub fn new(id: BuildingId, code: BuildingCode, dimensions: BuildingDimensions) -> Self {
        Self {
            id,
            code,
            name: None,
            description: None,
            dimensions,
        }
    }

    pub fn with_name(mut self, name: BuildingName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn code(&self) -> &BuildingCode {
        &self.code
    }

    pub fn name(&self) -> Option<&BuildingName> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn dimensions(&self) -> BuildingDimensions {
        self.dimensions
    }

    pub fn set_name(&mut self, name: Option<BuildingName>) {
        self.name = name;
    }

    pub fn set_description(&mut self, description: Option<Description>) {
        self.description = description;
    }

    pub fn set_dimensions(&mut self, dimensions: BuildingDimensions) {
        self.dimensions = dimensions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_accepts_short_alphanumeric() {
        assert!(BuildingCode::new("B").is_ok());
        assert!(BuildingCode::new("B 1").is_ok());
        assert!(BuildingCode::new("LAB05").is_ok());
    }

    #[test]
    fn code_rejects_blank_long_and_symbols() {
        assert!(BuildingCode::new("").is_err());
        assert!(BuildingCode::new("   ").is_err());
        assert!(BuildingCode::new("BUILD1").is_err());
        assert!(BuildingCode::new("B-1").is_err());
    }

    #[test]
    fn name_length_is_bounded() {
        assert!(BuildingName::new("Engineering").is_ok());
        assert!(BuildingName::new("x".repeat(51)).is_err());
    }

    #[test]
    fn dimensions_must_be_positive() {
        assert!(BuildingDimensions::new(10, 10).is_ok());
        assert!(BuildingDimensions::new(0, 10).is_err());
        assert!(BuildingDimensions::new(10, -2).is_err());
    }

    #[test]
    fn building_builder_sets_optionals() {
        let b = Building::new(
            BuildingId(1),
            BuildingCode::new("B1").unwrap(),
            BuildingDimensions::new(10, 8).unwrap(),
        )
        .with_name(BuildingName::new("Main").unwrap());
        assert_eq!(b.name().unwrap().as_str(), "Main");
        assert!(b.description().is_none());
    }
}

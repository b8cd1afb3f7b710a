//! Type-safe enumerations for OED column metadata.
//!
//! These enums give compile-time names to concepts that appear as short
//! strings in the OED column definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pseudo file type naming the union of every entity schema.
///
/// Only the column query and header checks use it; single-column lookups
/// reject it.
pub const MASTER_SCHEMA: &str = "master";

/// OED file type owning a column schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Account file.
    Acc,
    /// Location file.
    Loc,
    /// Reinsurance info file.
    ReinsInfo,
    /// Reinsurance scope file.
    ReinsScope,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Acc,
        EntityType::Loc,
        EntityType::ReinsInfo,
        EntityType::ReinsScope,
    ];

    /// Returns the lowercase file type name used on the command line and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Acc => "acc",
            EntityType::Loc => "loc",
            EntityType::ReinsInfo => "reinsinfo",
            EntityType::ReinsScope => "reinsscope",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    /// Parse a file type name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acc" => Ok(EntityType::Acc),
            "loc" => Ok(EntityType::Loc),
            "reinsinfo" => Ok(EntityType::ReinsInfo),
            "reinsscope" => Ok(EntityType::ReinsScope),
            _ => Err(format!("Unknown OED file type: {s}")),
        }
    }
}

/// Required-ness of a column within its file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequiredFlag {
    /// Must always be present in the file.
    #[serde(rename = "R")]
    Required,
    /// Required when related columns are present.
    #[serde(rename = "CR")]
    ConditionallyRequired,
    #[serde(rename = "O")]
    Optional,
}

impl RequiredFlag {
    /// Returns the short code used in the column definitions.
    pub fn as_code(&self) -> &'static str {
        match self {
            RequiredFlag::Required => "R",
            RequiredFlag::ConditionallyRequired => "CR",
            RequiredFlag::Optional => "O",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, RequiredFlag::Required)
    }
}

impl fmt::Display for RequiredFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for RequiredFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" | "REQUIRED" => Ok(RequiredFlag::Required),
            "CR" | "CONDITIONALLY REQUIRED" => Ok(RequiredFlag::ConditionallyRequired),
            "O" | "OPTIONAL" => Ok(RequiredFlag::Optional),
            _ => Err(format!("Unknown required flag: {s}")),
        }
    }
}

/// Declared value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "int")]
    Integer,
    #[serde(rename = "float")]
    Real,
    #[serde(rename = "str")]
    String,
}

impl DataType {
    /// Returns the short type name reported in data type errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "int",
            DataType::Real => "float",
            DataType::String => "str",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(DataType::Integer),
            "float" | "real" => Ok(DataType::Real),
            "str" | "string" => Ok(DataType::String),
            _ => Err(format!("Unknown data type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_from_str() {
        assert_eq!("LOC".parse::<EntityType>().unwrap(), EntityType::Loc);
        assert_eq!(" acc ".parse::<EntityType>().unwrap(), EntityType::Acc);
        assert_eq!(
            "ReinsInfo".parse::<EntityType>().unwrap(),
            EntityType::ReinsInfo
        );
        assert!(MASTER_SCHEMA.parse::<EntityType>().is_err());
        assert!("".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_required_flag_from_str() {
        assert_eq!(
            "cr".parse::<RequiredFlag>().unwrap(),
            RequiredFlag::ConditionallyRequired
        );
        assert_eq!("R".parse::<RequiredFlag>().unwrap(), RequiredFlag::Required);
        assert!("X".parse::<RequiredFlag>().is_err());
    }

    #[test]
    fn test_data_type_names() {
        assert_eq!("float".parse::<DataType>().unwrap(), DataType::Real);
        assert_eq!(DataType::Integer.to_string(), "int");
        assert_eq!(DataType::String.as_str(), "str");
    }
}

pub mod column;
pub mod enums;
pub mod issue;
pub mod lookup;
pub mod range;
pub mod value;

pub use column::{ColumnSchema, SamplingSpec};
pub use enums::{DataType, EntityType, MASTER_SCHEMA, RequiredFlag};
pub use issue::{ErrorKind, RowError, ValidationError};
pub use lookup::CaseInsensitiveSet;
pub use range::{RangeMember, ValueRange};
pub use value::Value;

pub mod fields;
pub mod metadata;
pub mod scalars;
pub mod schedule;

pub use fields::{extract_fields, FieldLabel, FieldMap};
pub use metadata::resolve_metadata;
pub use schedule::interpret_schedule;

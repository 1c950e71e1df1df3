pub mod identifier;
pub mod locus;
pub mod row;

// re-export for cleaner imports
pub use self::identifier::VariantIdentifier;
pub use self::locus::{NormalizedLocus, Span, VariantKind};
pub use self::row::{RawRow, RowHeader};

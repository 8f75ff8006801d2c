/// Color-difference green keying with spill suppression.
pub mod chroma;

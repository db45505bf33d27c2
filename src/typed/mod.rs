//! Typed key-value expression: keys bind a string identity to the type of
//! value they address, values are stored type-erased.

pub mod typedkey;
pub mod typedvalue;

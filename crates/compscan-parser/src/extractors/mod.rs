pub mod component;
pub mod helpers;
pub mod imports;
pub mod locator;
pub mod patterns;
pub mod type_index;

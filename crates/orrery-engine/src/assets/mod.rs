pub mod builtin;
pub mod catalogue;

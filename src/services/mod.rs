pub mod completion;
pub mod validation;

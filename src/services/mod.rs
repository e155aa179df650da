pub mod matcher;
pub mod selection;

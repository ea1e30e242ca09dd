pub mod groups;
pub mod print;

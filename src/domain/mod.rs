pub mod title;
pub mod track;

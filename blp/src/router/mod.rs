pub mod history;
pub mod reference;

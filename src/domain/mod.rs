pub mod input;
pub mod wellness;

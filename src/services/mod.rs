pub mod energy;
pub mod recommend;

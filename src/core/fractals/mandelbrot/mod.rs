pub mod algorithm;
pub mod banding;

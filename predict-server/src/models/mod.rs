//! Request / response models

pub mod vitals;
pub mod model_info;

pub use vitals::*;
pub use model_info::*;

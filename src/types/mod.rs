pub mod color;
pub mod domain;
pub mod record;
pub mod region;
pub mod traits;

pub mod locate;
pub mod resolver;

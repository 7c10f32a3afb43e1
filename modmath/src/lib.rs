pub(crate) mod error;
pub(crate) mod euclid;
pub(crate) mod pow;
pub mod prelude;

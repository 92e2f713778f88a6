pub mod catalog;
pub(crate) mod compose;
pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod overlay;

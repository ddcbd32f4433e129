pub mod dsl;
pub(crate) mod edit;
pub(crate) mod model;
pub(crate) mod tree;
pub(crate) mod value;

pub(crate) mod document;
pub(crate) mod literal;
pub(crate) mod scalar;

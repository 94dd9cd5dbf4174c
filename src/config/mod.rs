//! Avatar configuration model.

pub(crate) mod model;

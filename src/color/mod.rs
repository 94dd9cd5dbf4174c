//! Color derivation and color parsing.

pub(crate) mod derive;
pub(crate) mod parse;

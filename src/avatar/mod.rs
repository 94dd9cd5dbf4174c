//! Public avatar facade: drawing with caching, render events and encoded output.

pub(crate) mod facade;
pub(crate) mod observer;
pub(crate) mod output;

//! Inline/block layout of expression trees and the geometry derived from it.

pub(crate) mod area;
pub(crate) mod cache;
pub(crate) mod engine;
pub(crate) mod fingerprint;
pub(crate) mod fragment;
pub(crate) mod overlay;
pub(crate) mod text;
pub(crate) mod theme;

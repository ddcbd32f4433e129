//! Editor controller and the collaborators it is wired to.

pub(crate) mod actions;
pub(crate) mod builtins;
pub(crate) mod clipboard;
pub(crate) mod controller;
pub(crate) mod inline;
pub(crate) mod keys;
pub(crate) mod repair;
pub(crate) mod stack;
pub(crate) mod suggest;
pub(crate) mod workspace;

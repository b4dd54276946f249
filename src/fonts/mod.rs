pub(crate) mod catalog;
pub(crate) mod options;
pub(crate) mod rewrite;
pub(crate) mod selector;

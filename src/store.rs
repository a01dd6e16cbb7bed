pub(crate) mod export;
pub(crate) mod paths;
pub(crate) mod project_store;

pub(crate) mod json_store;

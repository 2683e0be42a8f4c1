pub(crate) mod constant;

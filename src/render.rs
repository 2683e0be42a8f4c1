pub(crate) mod plane;

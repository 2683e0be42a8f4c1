pub(crate) mod formats;
pub(crate) mod knobs;
pub(crate) mod legacy;

pub(crate) mod config;
pub(crate) mod pipeline;
pub(crate) mod row;
pub(crate) mod wave;

pub(crate) mod contrast;
pub(crate) mod decode;
pub(crate) mod grid;

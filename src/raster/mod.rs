pub(crate) mod accessor;
pub(crate) mod float;
pub(crate) mod image_buffer;

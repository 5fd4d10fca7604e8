mod category;
mod naming;
mod sizefmt;
mod validate;

pub use category::{classify, extension, MediaCategory};
pub use naming::unique_filename;
pub use sizefmt::format_size;
pub use validate::{validate, ClassifiedFile, FileContent, IncomingFile, UploadError};

mod info;
mod system;
mod upload;

pub use info::upload_info;
pub use system::{api_index, health, route_not_found};
pub use upload::{upload_multiple, upload_single, MAX_BATCH_SIZE};

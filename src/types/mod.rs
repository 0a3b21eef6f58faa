mod details;
mod workshop_id;

pub use details::{FileDetail, FileDetailsResponse, Tag};
pub use workshop_id::{find_workshop_id, InvalidWorkshopId, WorkshopId};

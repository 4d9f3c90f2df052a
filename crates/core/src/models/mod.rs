use serde::{Deserialize, Serialize};

pub mod availability;
pub mod instructor;
pub mod lesson;
pub mod swimming;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

use crate::model::id::DeskId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desk {
    pub desk_id: DeskId,
    pub description: String,
}

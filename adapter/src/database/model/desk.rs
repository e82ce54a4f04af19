use kernel::model::{desk::Desk, id::DeskId};

#[derive(sqlx::FromRow)]
pub struct DeskRow {
    pub desk_id: DeskId,
    pub description: String,
}

impl From<DeskRow> for Desk {
    fn from(value: DeskRow) -> Self {
        let DeskRow {
            desk_id,
            description,
        } = value;
        Desk {
            desk_id,
            description,
        }
    }
}

use derive_new::new;

#[derive(Debug, new)]
pub struct CreateDesk {
    pub description: String,
}

//! Newsletter contact entity.

/// A contact to be added to the mailing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub email: String,
    pub list_ids: Vec<i64>,
    /// Update the existing contact instead of failing when it already exists.
    pub update_enabled: bool,
}

impl NewContact {
    /// Creates a contact subscribed to a single list with updates enabled.
    pub fn for_list(email: impl Into<String>, list_id: i64) -> Self {
        Self {
            email: email.into(),
            list_ids: vec![list_id],
            update_enabled: true,
        }
    }
}

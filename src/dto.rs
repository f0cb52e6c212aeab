use serde::{Deserialize, Serialize};

/// A to-do entry as the items API reports it. The API identifies an item by
/// its `what_to_do` text; there is no separate id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Item {
    pub what_to_do: String,
    pub due_date: String,
    /// The API may report a completion status; anything other than "done"
    /// renders as still pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Item {
    pub fn is_done(&self) -> bool {
        self.status.as_deref() == Some("done")
    }
}

/// Form payload for `/add`, forwarded verbatim as the JSON body of the
/// outbound POST.
#[derive(Serialize, Deserialize, Debug)]
pub struct NewItem {
    pub what_to_do: String,
    pub due_date: String,
}

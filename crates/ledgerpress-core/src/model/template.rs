use serde::{Deserialize, Serialize};

/// Template - layout, stylesheet and optional script bundle for sites
///
/// Created once; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Content id of the layout markup
    pub layout_id: String,
    /// Content id of the stylesheet
    pub style_id: String,
    /// Content id of the script, empty when the template has none
    pub script_id: String,
    pub author: String,
    pub is_public: bool,
    pub created_at: i64,
}

impl Template {
    pub fn has_script(&self) -> bool {
        !self.script_id.is_empty()
    }

    /// Content ids this template references, script last when present
    pub fn content_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.layout_id.as_str(), self.style_id.as_str()];
        if self.has_script() {
            ids.push(self.script_id.as_str());
        }
        ids
    }
}

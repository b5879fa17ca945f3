/// Where the page lives in the document and what the button says.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PageConfig {
    pub container_id: String,
    pub button_id: String,
    pub text_id: String,
    pub button_label: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            container_id: "dasharrow_container".to_string(),
            button_id: "dasharrow_button".to_string(),
            text_id: "dasharrow_text".to_string(),
            button_label: "+1".to_string(),
        }
    }
}

impl PageConfig {
    /// Same layout with every id prefixed, so several pages can share a document.
    pub fn prefixed(prefix: &str) -> Self {
        let base = PageConfig::default();
        PageConfig {
            container_id: format!("{prefix}_{}", base.container_id),
            button_id: format!("{prefix}_{}", base.button_id),
            text_id: format!("{prefix}_{}", base.text_id),
            button_label: base.button_label,
        }
    }
}

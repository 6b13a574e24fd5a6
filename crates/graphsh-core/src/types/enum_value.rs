use crate::types::DeprecationState;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
    #[serde(default)]
    pub(crate) deprecation_reason: Option<String>,
}
impl EnumValue {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from_flags(
            self.is_deprecated,
            self.deprecation_reason.as_deref(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(Option<&'a str>),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub(crate) fn from_flags(
        is_deprecated: bool,
        deprecation_reason: Option<&'a str>,
    ) -> Self {
        if is_deprecated {
            Self::Deprecated(deprecation_reason)
        } else {
            Self::NotDeprecated
        }
    }
}

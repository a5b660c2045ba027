/// Display texts shared by every node of the settings tree.
///
/// Each text has a literal form and an optional lookup key. The literal is
/// used whenever no localizer is configured or the key cannot be resolved.
pub trait Named {
    fn display_name(&self) -> Option<&str>;
    fn display_name_key(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    fn description_key(&self) -> Option<&str>;
}

macro_rules! impl_named {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Named for $ty {
                fn display_name(&self) -> Option<&str> {
                    self.display_name.as_deref()
                }

                fn display_name_key(&self) -> Option<&str> {
                    self.display_name_key.as_deref()
                }

                fn description(&self) -> Option<&str> {
                    self.description.as_deref()
                }

                fn description_key(&self) -> Option<&str> {
                    self.description_key.as_deref()
                }
            }
        )+
    };
}

pub(crate) use impl_named;

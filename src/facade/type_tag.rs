use std::fmt;

/// Marker for the code unit that issued a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    full_name: &'static str,
}

impl TypeTag {
    pub fn of<T: ?Sized>() -> Self {
        Self {
            full_name: std::any::type_name::<T>(),
        }
    }

    /// Tag with an explicit path, e.g. for components that are not a single type.
    pub const fn named(full_name: &'static str) -> Self {
        Self { full_name }
    }

    /// Complete path, e.g. `alloc::vec::Vec<u8>`.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Last path segment without generic arguments, e.g. `Vec`.
    pub fn name(&self) -> &'static str {
        let base = match self.full_name.find('<') {
            Some(idx) => &self.full_name[..idx],
            None => self.full_name,
        };
        match base.rfind("::") {
            Some(idx) => &base[idx + 2..],
            None => base,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn test_name_strips_module_path() {
        let tag = TypeTag::of::<Foo>();
        assert_eq!(tag.name(), "Foo");
        assert!(tag.full_name().ends_with("type_tag::tests::Foo"));
    }

    #[test]
    fn test_name_strips_generic_arguments() {
        let tag = TypeTag::of::<Vec<std::string::String>>();
        assert_eq!(tag.name(), "Vec");
        assert!(tag.full_name().contains("Vec<"));
    }

    #[test]
    fn test_named_tag_without_path() {
        let tag = TypeTag::named("Scheduler");
        assert_eq!(tag.name(), "Scheduler");
        assert_eq!(tag.to_string(), "Scheduler");
    }
}

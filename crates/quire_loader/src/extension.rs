//! The ordered suffix list tried for every logical name.

/// Suffixes appended to a logical name, tried in declaration order.
///
/// Extensions are configured without the leading dot (`"html.twig"`); an
/// empty extension stands for the bare name and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList(Vec<String>);

impl ExtensionList {
    /// Builds the list, turning each non-empty `ext` into the suffix `.ext`.
    ///
    /// Values that already start with a dot are kept as they are.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| normalize(ext.as_ref()))
                .collect(),
        )
    }

    /// Returns the suffixes in the order they are tried.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of suffixes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no suffixes, in which case nothing resolves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_added_and_order_kept() {
        let list = ExtensionList::new(["", "twig", "html.twig"]);
        let suffixes: Vec<&str> = list.suffixes().collect();
        assert_eq!(suffixes, vec!["", ".twig", ".html.twig"]);
    }

    #[test]
    fn leading_dot_kept() {
        let list = ExtensionList::new([".md", "md"]);
        let suffixes: Vec<&str> = list.suffixes().collect();
        assert_eq!(suffixes, vec![".md", ".md"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list() {
        let list = ExtensionList::new(Vec::<String>::new());
        assert!(list.is_empty());
    }
}

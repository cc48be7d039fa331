/// Tokens paired with caller-supplied names, kept in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedTokens {
    entries: Vec<(String, String)>,
}

impl KeyedTokens {
    pub(crate) fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Token stored under `key`. With duplicate keys the first one wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }
}

/// Result of `tokenize`: a plain list, or a keyed mapping when keys were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens {
    List(Vec<String>),
    Keyed(KeyedTokens),
}

impl Tokens {
    pub fn len(&self) -> usize {
        match self {
            Tokens::List(list) => list.len(),
            Tokens::Keyed(keyed) => keyed.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Tokens::List(list) => Some(list),
            Tokens::Keyed(_) => None,
        }
    }

    pub fn as_keyed(&self) -> Option<&KeyedTokens> {
        match self {
            Tokens::List(_) => None,
            Tokens::Keyed(keyed) => Some(keyed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyedTokens {
        KeyedTokens::new(vec![
            ("code".to_string(), "200".to_string()),
            ("bytes".to_string(), "1024".to_string()),
        ])
    }

    #[test]
    fn test_keyed_get() {
        let keyed = sample();
        assert_eq!(keyed.get("code"), Some("200"));
        assert_eq!(keyed.get("bytes"), Some("1024"));
        assert_eq!(keyed.get("missing"), None);
    }

    #[test]
    fn test_keyed_preserves_key_order() {
        let keyed = sample();
        assert_eq!(keyed.keys().collect::<Vec<_>>(), vec!["code", "bytes"]);
        assert_eq!(
            keyed.iter().collect::<Vec<_>>(),
            vec![("code", "200"), ("bytes", "1024")]
        );
    }

    #[test]
    fn test_keyed_into_vec() {
        assert_eq!(
            sample().into_vec(),
            vec![
                ("code".to_string(), "200".to_string()),
                ("bytes".to_string(), "1024".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokens_accessors() {
        let list = Tokens::List(vec!["a".to_string()]);
        assert_eq!(list.len(), 1);
        assert!(list.as_keyed().is_none());
        assert_eq!(list.as_list(), Some(&["a".to_string()][..]));

        let keyed = Tokens::Keyed(KeyedTokens::default());
        assert!(keyed.is_empty());
        assert!(keyed.as_list().is_none());
    }
}

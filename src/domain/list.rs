/// Separator the gateway uses between recipients and between bulk messages.
pub const SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An ordered list of recipients or messages in its canonical wire form.
///
/// Callers may pass either a sequence (`vec!["a", "b"]`, `["a", "b"]`) or an
/// already pipe-delimited string (`"a|b"`); both normalize to `"a|b"`.
/// Entries are joined positionally, so empty entries survive the join.
/// An empty sequence and an empty string both hold zero entries.
pub struct PipeList {
    joined: String,
    count: usize,
}

impl PipeList {
    /// Borrow the pipe-joined form.
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Number of positional entries (`"a||b"` has three, `""` has none).
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate the entries in order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.joined.split(SEPARATOR).take(self.count)
    }

    pub fn into_string(self) -> String {
        self.joined
    }

    fn parse(joined: String) -> Self {
        let count = if joined.is_empty() {
            0
        } else {
            joined.split(SEPARATOR).count()
        };
        Self { joined, count }
    }

    fn join<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        let mut count = 0;
        for item in items {
            if count > 0 {
                joined.push(SEPARATOR);
            }
            joined.push_str(item.as_ref());
            count += 1;
        }
        Self { joined, count }
    }
}

impl From<&str> for PipeList {
    fn from(value: &str) -> Self {
        Self::parse(value.to_owned())
    }
}

impl From<String> for PipeList {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for PipeList {
    fn from(value: &String) -> Self {
        Self::parse(value.clone())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for PipeList {
    fn from(value: Vec<S>) -> Self {
        Self::join(value)
    }
}

impl<S: AsRef<str>> From<&[S]> for PipeList {
    fn from(value: &[S]) -> Self {
        Self::join(value)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for PipeList {
    fn from(value: [S; N]) -> Self {
        Self::join(value)
    }
}

/// Canonicalize a recipient or message list to its pipe-joined string.
///
/// Sequences are joined with `|`; strings pass through untouched.
pub fn normalize_list(input: impl Into<PipeList>) -> String {
    input.into().into_string()
}

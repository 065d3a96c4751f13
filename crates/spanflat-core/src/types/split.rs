use std::fmt;

use serde::{Deserialize, Serialize};

/// Output partition of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// All splits, in output order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// The split's marker name, as searched for in document keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Dev => "dev",
            Self::Test => "test",
        }
    }

    /// Returns `true` if `doc_key` contains this split's name anywhere.
    ///
    /// Splits are not exclusive: a key may match none, one or several.
    #[must_use]
    pub fn matches(self, doc_key: &str) -> bool {
        doc_key.contains(self.as_str())
    }

    /// Every split whose name occurs in `doc_key`, in output order.
    pub fn routes(doc_key: &str) -> impl Iterator<Item = Split> + '_ {
        Self::ALL.into_iter().filter(move |split| split.matches(doc_key))
    }

    /// Name of the JSON file this split is written to.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Train => 0,
            Self::Dev => 1,
            Self::Test => 2,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Ordered, deduplicated remote URLs

/// Remote URLs in the order git reports them, without duplicates.
///
/// A remote usually lists the same URL for fetch and push; it appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteSet {
    urls: Vec<String>,
}

impl RemoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url` unless it is already present or blank.
    pub fn push(&mut self, url: impl Into<String>) {
        let url = url.into();
        let url = url.trim();
        if url.is_empty() || self.urls.iter().any(|u| u == url) {
            return;
        }
        self.urls.push(url.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.urls.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for RemoteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = RemoteSet::new();
        for url in iter {
            set.push(url);
        }
        set
    }
}

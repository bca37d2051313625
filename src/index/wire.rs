use serde::Deserialize;

// Atom feed as served by `browse-edgar?output=atom`. Header elements
// (author, company-info, ...) are ignored.
#[derive(Deserialize, Default)]
pub(crate) struct Feed {
    #[serde(default)]
    pub(crate) entry: Vec<Entry>,
}

#[derive(Deserialize, Default)]
pub(crate) struct Entry {
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) link: Vec<Link>,
    pub(crate) updated: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct Link {
    #[serde(rename = "@rel")]
    pub(crate) rel: Option<String>,
    #[serde(rename = "@href")]
    pub(crate) href: Option<String>,
}

impl Entry {
    /// The `alternate` link; Atom treats a link without `rel` as alternate.
    pub(crate) fn alternate_href(&self) -> Option<&str> {
        self.link
            .iter()
            .find(|l| l.rel.as_deref().is_none_or(|r| r == "alternate"))
            .and_then(|l| l.href.as_deref())
    }
}

//! Resolution of link targets against the document's location.

use boxpaint_types::Href;
use url::Url;

/// Where the document being rendered lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContext {
    /// Scheme such as `file` or `https`. `file://` is accepted too.
    pub protocol: String,
    pub base_host: String,
    /// Directory of the document, e.g. `/docs/`.
    pub base_path: String,
}

impl DocumentContext {
    pub fn new(
        protocol: impl Into<String>,
        base_host: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            base_host: base_host.into(),
            base_path: base_path.into(),
        }
    }

    fn scheme(&self) -> &str {
        self.protocol.trim().trim_end_matches("://").trim_end_matches(':')
    }

    fn base_url(&self) -> Option<Url> {
        let scheme = self.scheme();
        if scheme.is_empty() {
            return None;
        }
        let mut path = self.base_path.trim().to_string();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if !path.ends_with('/') {
            path.push('/');
        }
        Url::parse(&format!("{}://{}{}", scheme, self.base_host.trim(), path)).ok()
    }
}

/// Turns a raw `href` into an absolute link target.
pub trait UrlResolver {
    /// `None` when the reference cannot be resolved; callers then fall back
    /// to the raw value.
    fn resolve(&self, context: &DocumentContext, href: &str) -> Option<Href>;
}

/// Joins relative references onto `protocol://host/base_path/`.
///
/// Absolute URLs and `#fragment` references come back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseUrlResolver;

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, context: &DocumentContext, href: &str) -> Option<Href> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        if href.starts_with('#') || Url::parse(href).is_ok() {
            return Some(Href::from(href));
        }
        let base = context.base_url()?;
        match base.join(href) {
            Ok(url) => Some(Href::from(String::from(url))),
            Err(err) => {
                log::debug!("Could not join '{}' onto '{}': {}", href, base, err);
                None
            }
        }
    }
}

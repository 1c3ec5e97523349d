//! Content document loading.
//!
//! Every page shares one JSON document (`data/content.json` by default)
//! holding site branding and legal text. Every field is optional and every
//! consumer degrades to the page's own defaults, so loading is fail-open: a
//! missing file, a non-2xx response, a transport error or a malformed body
//! all produce [`ContentDocument::default()`] plus a logged warning.
//!
//! ```json
//! {
//!   "site": {
//!     "logo": "img/logo.svg",
//!     "name": "Riverside Growers",
//!     "brand": { "primary": "#6B3F18", "accent": "#22C55E", "bg": "#EAF7F1" }
//!   },
//!   "legal": { "scio": "SC012345", "oscr_badge": "img/oscr.png" }
//! }
//! ```
//!
//! Fetching goes through the [`ContentSource`] trait: [`HttpSource`] for a
//! deployed site (always bypassing caches) and [`FileSource`] for a site
//! directory on disk.

use log::{debug, warn};
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default location of the content document, relative to the page.
pub const CONTENT_RESOURCE: &str = "data/content.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content document must be a JSON object")]
    NotAnObject,
}

/// The shared content document. Unknown fields are ignored, and a field of
/// the wrong shape reads as absent without affecting its siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    #[serde(deserialize_with = "lenient")]
    pub site: Option<SiteInfo>,
    #[serde(deserialize_with = "lenient")]
    pub legal: Option<Legal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Logo image source.
    #[serde(deserialize_with = "lenient_text")]
    pub logo: Option<String>,
    /// Display name, used in the header and footer.
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub brand: Option<Brand>,
}

/// Brand colors as `#rrggbb` strings. Values are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "lenient_text")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub accent: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub bg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legal {
    /// Registered charity number text.
    #[serde(deserialize_with = "lenient_text")]
    pub scio: Option<String>,
    /// Regulator badge image source.
    #[serde(deserialize_with = "lenient_text")]
    pub oscr_badge: Option<String>,
}

/// A nested object, or `None` when the value has some other shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A text field. Numbers and booleans keep their JSON text (`42`, `true`);
/// arrays, objects and `null` read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        _ => None,
    })
}

impl ContentDocument {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn site_name(&self) -> Option<&str> {
        non_empty(self.site.as_ref()?.name.as_deref())
    }

    pub fn logo(&self) -> Option<&str> {
        non_empty(self.site.as_ref()?.logo.as_deref())
    }

    pub fn brand(&self) -> Option<&Brand> {
        self.site.as_ref()?.brand.as_ref()
    }

    pub fn scio(&self) -> Option<&str> {
        non_empty(self.legal.as_ref()?.scio.as_deref())
    }

    pub fn oscr_badge(&self) -> Option<&str> {
        non_empty(self.legal.as_ref()?.oscr_badge.as_deref())
    }

    /// Parse a response body. Anything but a JSON object is rejected; inside
    /// one, every field is taken on its own.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(LoadError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }
}

// An empty string leaves the page default in place, same as a missing field.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

/// A raw response: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the content document comes from.
pub trait ContentSource {
    /// Fetch `resource` (a page-relative path), bypassing any cache.
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError>;
}

/// Fetches over HTTP relative to a page URL.
pub struct HttpSource {
    page_url: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(page_url: &str, timeout: Duration) -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            page_url: Url::parse(page_url)?,
            client,
        })
    }

    pub fn resolve(&self, resource: &str) -> Result<Url, LoadError> {
        Ok(self.page_url.join(resource)?)
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError> {
        let url = self.resolve(resource)?;
        debug!("fetching {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(Fetched { status, body })
    }
}

/// Reads from a site directory on disk. A missing file reads as 404.
///
/// Relative resources resolve against the directory of the page being
/// hydrated, the way [`HttpSource`] resolves them against the page URL;
/// a leading `/` anchors them at the site root.
pub struct FileSource {
    root: PathBuf,
    page_dir: PathBuf,
}

impl FileSource {
    /// A source for pages at the top of the site.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            page_dir: PathBuf::new(),
        }
    }

    /// A source for `page` (e.g. `about/team.html`) under `root`.
    pub fn for_page(root: impl Into<PathBuf>, page: &str) -> Self {
        let path = page.split(['?', '#']).next().unwrap_or_default();
        let page_dir = path
            .trim_start_matches('/')
            .rsplit_once('/')
            .map(|(dir, _)| PathBuf::from(dir))
            .unwrap_or_default();
        Self {
            root: root.into(),
            page_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path of `resource`.
    pub fn resolve(&self, resource: &str) -> PathBuf {
        match resource.strip_prefix('/') {
            Some(absolute) => self.root.join(absolute),
            None => self.root.join(&self.page_dir).join(resource),
        }
    }
}

impl ContentSource for FileSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError> {
        let path = self.resolve(resource);
        debug!("reading {}", path.display());
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Fetched { status: 200, body }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Fetched {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetch and parse `resource`, or an empty document on any failure.
pub fn load_content(source: &dyn ContentSource, resource: &str) -> ContentDocument {
    match try_load(source, resource) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("content unavailable ({resource}): {e}");
            ContentDocument::default()
        }
    }
}

fn try_load(source: &dyn ContentSource, resource: &str) -> Result<ContentDocument, LoadError> {
    let fetched = source.fetch(resource)?;
    if !fetched.is_success() {
        return Err(LoadError::Status(fetched.status));
    }
    ContentDocument::from_json(&fetched.body)
}

//! Origin context derived from a request path.
//!
//! Content is addressed as `/{tier}/{org}/{site}/{content-path…}`. The tier
//! selects the delivery domain and the rest identifies the page:
//!
//! ```rust
//! use dasc_core::context::{OriginContext, Tier};
//!
//! let ctx = OriginContext::from_url("https://converter.example/preview/acme/shop/forms/offer.json")?;
//! assert_eq!(ctx.tier, Tier::Preview);
//! assert_eq!(ctx.origin_url, "https://main--shop--acme.aem.page");
//! assert_eq!(ctx.content_url(), "https://main--shop--acme.aem.page/forms/offer");
//! # Ok::<(), dasc_core::Error>(())
//! ```

use crate::{Error, Result};
use std::fmt;
use url::Url;

/// Delivery tier, selecting the origin's top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `preview` → `.aem.page`
    Preview,
    /// `review` → `.aem.reviews`
    Review,
    /// anything else → `.aem.live`
    Live,
}

impl Tier {
    /// Map a path segment to a tier; unknown segments mean `Live`.
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "preview" => Self::Preview,
            "review" => Self::Review,
            _ => Self::Live,
        }
    }

    /// Top-level domain of the tier's origin.
    #[must_use]
    pub const fn tld(self) -> &'static str {
        match self {
            Self::Preview => "page",
            Self::Review => "reviews",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preview => "preview",
            Self::Review => "review",
            Self::Live => "live",
        };
        f.write_str(name)
    }
}

/// Where a page's HTML lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginContext {
    /// Delivery tier.
    pub tier: Tier,
    /// Organization segment.
    pub org: String,
    /// Site segment.
    pub site: String,
    /// Origin base URL, without trailing slash.
    pub origin_url: String,
    /// Page path below the origin, without leading slash. May be empty.
    pub content_path: String,
}

impl OriginContext {
    /// Derive the context from a full request URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;
        Self::from_path(parsed.path())
    }

    /// Derive the context from a `/{tier}/{org}/{site}/{path…}` path.
    ///
    /// The first `.json` occurrence is dropped so `page.json` addresses `page`.
    pub fn from_path(path: &str) -> Result<Self> {
        let path = path.replacen(".json", "", 1);
        let path = path.strip_prefix('/').unwrap_or(&path);

        let mut segments = path.split('/');
        let tier = Tier::from_segment(segments.next().unwrap_or_default());
        let org = segments.next().unwrap_or_default().to_string();
        let site = segments.next().unwrap_or_default().to_string();
        let content_path = segments.collect::<Vec<_>>().join("/");

        if org.is_empty() && site.is_empty() {
            return Err(Error::InvalidUrl("Usage: /tld/org/site/path".to_string()));
        }

        let origin_url = format!("https://main--{site}--{org}.aem.{}", tier.tld());
        Ok(Self {
            tier,
            org,
            site,
            origin_url,
            content_path,
        })
    }

    /// Replace the derived origin, e.g. with a mirror or a local server.
    #[must_use]
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin_url = origin.trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the page HTML.
    #[must_use]
    pub fn content_url(&self) -> String {
        format!("{}/{}", self.origin_url, self.content_path)
    }
}

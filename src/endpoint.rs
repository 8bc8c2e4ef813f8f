//! Endpoint descriptors used by every API call-site.

use reqwest::{Method, Url};

/// Method, path and query of a single API call.
///
/// Path segments are appended to the client's base URL and percent-encoded,
/// so IDs containing `/` or spaces stay inside their segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub(crate) fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    pub(crate) fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub(crate) fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub(crate) fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub(crate) fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PATCH, segments)
    }

    pub(crate) fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter.
    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Resolve against `base`, which must be able to carry path segments.
    ///
    /// The client checks this when it is built, so a base that cannot is
    /// returned unchanged apart from the query.
    pub(crate) fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://app.nanonets.com/api/v4").unwrap()
    }

    #[test]
    fn appends_segments_to_base_path() {
        let endpoint = Endpoint::get(["workflows", "wf-1", "documents"]);
        assert_eq!(
            endpoint.url(&base()).as_str(),
            "https://app.nanonets.com/api/v4/workflows/wf-1/documents"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_base() {
        let base = Url::parse("http://127.0.0.1:8080/api/v4/").unwrap();
        let endpoint = Endpoint::get(["workflows"]);
        assert_eq!(
            endpoint.url(&base).as_str(),
            "http://127.0.0.1:8080/api/v4/workflows"
        );
    }

    #[test]
    fn percent_encodes_ids() {
        let endpoint = Endpoint::delete(["workflows", "a/b c"]);
        assert_eq!(
            endpoint.url(&base()).as_str(),
            "https://app.nanonets.com/api/v4/workflows/a%2Fb%20c"
        );
    }

    #[test]
    fn renders_query_in_insertion_order() {
        let endpoint = Endpoint::get(["workflows", "wf", "documents"])
            .query("page", 2)
            .query("limit", 50);
        let url = endpoint.url(&base());
        assert_eq!(url.query(), Some("page=2&limit=50"));
        assert_eq!(endpoint.method, Method::GET);
    }
}

use url::Url;

/// Handle to the enclosing API client, as seen by entity constructors
///
/// Entities never perform requests themselves. They only borrow the context while being
/// built, to resolve the API endpoints they link to (a user's lists, a title's record).
/// Nothing is stored: the resulting entities are plain owned values.
pub trait ClientContext {
    /// Root of the versioned API, e.g. `https://api.bibliocommons.com/v1/`
    fn base_url(&self) -> &Url;

    /// Resolves an endpoint below [`base_url`](Self::base_url) from path segments.
    ///
    /// Segments are percent-encoded, so identifiers containing `/` or spaces stay a single
    /// segment. A base that cannot carry a path (`mailto:`...) comes back unchanged;
    /// `biblio::client::Client::from_env` refuses such bases.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url().clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl<C: ClientContext + ?Sized> ClientContext for &C {
    fn base_url(&self) -> &Url {
        (**self).base_url()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        (**self).endpoint(segments)
    }
}

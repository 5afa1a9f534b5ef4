//! Page Dispatch
//!
//! Maps the browser's URL state to the page that should be rendered.
//! Rendering code matches on [`PageVariant`] and never inspects the URL itself.

/// Paths that render the checkout page
pub const CHECKOUT_PATHS: [&str; 2] = ["/", "/billing-link"];

/// Which page to render for the current URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageVariant {
    /// Card-on-file checkout with the optional phone field
    Checkout,

    /// Static confirmation shown after the provider redirects back
    Success { session_id: Option<String> },

    /// Unknown path without a success flag
    NotFound,
}

impl PageVariant {
    /// Resolve a page from a pathname and a query string.
    ///
    /// `query` may be given with or without its leading `?`. A `success=true`
    /// parameter wins regardless of path.
    pub fn from_url(path: &str, query: &str) -> Self {
        let mut success = false;
        let mut session_id = None;

        for (key, value) in query_pairs(query) {
            match key {
                "success" => success = value == "true",
                "session_id" if !value.is_empty() => session_id = Some(value.to_string()),
                _ => {}
            }
        }

        if success {
            return Self::Success { session_id };
        }

        if is_checkout_path(path) {
            Self::Checkout
        } else {
            Self::NotFound
        }
    }

    /// Page title shown in the document head
    pub fn title(&self) -> &'static str {
        match self {
            Self::Checkout => "Save a card on file",
            Self::Success { .. } => "Card saved",
            Self::NotFound => "Page not found",
        }
    }
}

fn is_checkout_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    CHECKOUT_PATHS.contains(&normalized)
}

fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_paths() {
        assert_eq!(PageVariant::from_url("/", ""), PageVariant::Checkout);
        assert_eq!(PageVariant::from_url("", ""), PageVariant::Checkout);
        assert_eq!(PageVariant::from_url("/billing-link", ""), PageVariant::Checkout);
        assert_eq!(PageVariant::from_url("/billing-link/", "?foo=bar"), PageVariant::Checkout);
    }

    #[test]
    fn test_success_flag_wins_on_any_path() {
        let expected = PageVariant::Success {
            session_id: Some("cs_test_123".into()),
        };
        assert_eq!(
            PageVariant::from_url("/", "?success=true&session_id=cs_test_123"),
            expected
        );
        assert_eq!(
            PageVariant::from_url("/somewhere/else", "session_id=cs_test_123&success=true"),
            expected
        );
    }

    #[test]
    fn test_success_without_session_id() {
        assert_eq!(
            PageVariant::from_url("/billing-link", "?success=true"),
            PageVariant::Success { session_id: None }
        );
        assert_eq!(
            PageVariant::from_url("/", "?success=true&session_id="),
            PageVariant::Success { session_id: None }
        );
    }

    #[test]
    fn test_success_flag_must_be_true() {
        assert_eq!(PageVariant::from_url("/", "?success=false"), PageVariant::Checkout);
        assert_eq!(PageVariant::from_url("/", "?success"), PageVariant::Checkout);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(PageVariant::from_url("/pricing", ""), PageVariant::NotFound);
        assert_eq!(PageVariant::from_url("/billing-link/extra", ""), PageVariant::NotFound);
    }
}

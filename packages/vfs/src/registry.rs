//! Scheme → wrapper dispatch table.

use std::collections::HashMap;

use crate::{Error, StreamWrapper, Uri, WrapperType};

/// Factory producing a fresh wrapper instance for each dispatch.
pub type WrapperFactory = Box<dyn Fn() -> Box<dyn StreamWrapper> + Send + Sync>;

struct Registration {
    wrapper_type: WrapperType,
    factory: WrapperFactory,
}

/// The scheme → wrapper mapping.
///
/// The registry is configuration owned by the caller: wrappers are
/// scheme-agnostic and rely on this table for dispatch, so the same
/// wrapper implementation can serve several schemes (`http`, `https`).
///
/// # Example
///
/// ```ignore
/// let mut registry = WrapperRegistry::new();
/// registry.register("http", WrapperType::READ | WrapperType::REMOTE, || {
///     Box::new(HttpStreamWrapper::new(HttpClientFactory::new()))
/// });
///
/// let uri = Uri::parse("http://example.com/file.txt")?;
/// let mut wrapper = registry.wrapper_for(&uri)?;
/// ```
#[derive(Default)]
pub struct WrapperRegistry {
    entries: HashMap<String, Registration>,
}

impl WrapperRegistry {
    pub fn new() -> Self {
        WrapperRegistry::default()
    }

    /// Register a wrapper factory for a scheme, replacing any previous
    /// registration.
    pub fn register<F>(&mut self, scheme: impl Into<String>, wrapper_type: WrapperType, factory: F)
    where
        F: Fn() -> Box<dyn StreamWrapper> + Send + Sync + 'static,
    {
        self.entries.insert(
            scheme.into(),
            Registration {
                wrapper_type,
                factory: Box::new(factory),
            },
        );
    }

    /// Produce a fresh wrapper for the URI's scheme, with the URI already
    /// set on it.
    pub fn wrapper_for(&self, uri: &Uri) -> Result<Box<dyn StreamWrapper>, Error> {
        let registration =
            self.entries
                .get(uri.scheme())
                .ok_or_else(|| Error::UnknownScheme {
                    scheme: uri.scheme().to_string(),
                })?;

        let mut wrapper = (registration.factory)();
        wrapper.set_uri(uri.clone());
        Ok(wrapper)
    }

    /// The capability bits registered for a scheme.
    pub fn wrapper_type(&self, scheme: &str) -> Option<WrapperType> {
        self.entries
            .get(scheme)
            .map(|registration| registration.wrapper_type)
    }

    pub fn is_registered(&self, scheme: &str) -> bool {
        self.entries.contains_key(scheme)
    }

    /// Whether a scheme denotes a network-accessible resource.
    pub fn is_remote(&self, scheme: &str) -> bool {
        self.wrapper_type(scheme)
            .is_some_and(|wrapper_type| wrapper_type.contains(WrapperType::REMOTE))
    }

    /// Registered schemes, in no particular order.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OpenOptions, OpenedStream, StatFlags, StatRecord};

    struct FakeWrapper {
        uri: Option<Uri>,
    }

    impl StreamWrapper for FakeWrapper {
        fn wrapper_type(&self) -> WrapperType {
            WrapperType::READ | WrapperType::REMOTE
        }

        fn name(&self) -> &'static str {
            "fake"
        }

        fn description(&self) -> &'static str {
            "fake wrapper for registry tests"
        }

        fn set_uri(&mut self, uri: Uri) {
            self.uri = Some(uri);
        }

        fn uri(&self) -> Option<&Uri> {
            self.uri.as_ref()
        }

        fn open(
            &mut self,
            _uri: &Uri,
            mode: &str,
            _options: OpenOptions,
        ) -> Result<OpenedStream, Error> {
            Err(Error::UnsupportedMode {
                mode: mode.to_string(),
            })
        }

        fn url_stat(
            &mut self,
            _uri: &Uri,
            _flags: StatFlags,
        ) -> Result<Option<StatRecord>, Error> {
            Ok(None)
        }
    }

    fn remote_registry() -> WrapperRegistry {
        let mut registry = WrapperRegistry::new();
        registry.register("http", WrapperType::READ | WrapperType::REMOTE, || {
            Box::new(FakeWrapper { uri: None })
        });
        registry.register("https", WrapperType::READ | WrapperType::REMOTE, || {
            Box::new(FakeWrapper { uri: None })
        });
        registry
    }

    #[test]
    fn dispatch_sets_uri_on_fresh_wrapper() {
        let registry = remote_registry();
        let uri = Uri::parse("http://example.com/file.txt").unwrap();

        let wrapper = registry.wrapper_for(&uri).unwrap();
        assert_eq!(wrapper.uri(), Some(&uri));
        assert_eq!(
            wrapper.external_url().as_deref(),
            Some("http://example.com/file.txt")
        );
        assert_eq!(
            wrapper.realpath().as_deref(),
            Some("http://example.com/file.txt")
        );
    }

    #[test]
    fn unknown_scheme_is_an_error() {
        let registry = remote_registry();
        let uri = Uri::parse("ftp://example.com/file.txt").unwrap();

        assert!(matches!(
            registry.wrapper_for(&uri),
            Err(Error::UnknownScheme { .. })
        ));
    }

    #[test]
    fn remote_classification_follows_type_bits() {
        let mut registry = remote_registry();
        registry.register("local", WrapperType::LOCAL_NORMAL, || {
            Box::new(FakeWrapper { uri: None })
        });

        assert!(registry.is_remote("http"));
        assert!(registry.is_remote("https"));
        assert!(!registry.is_remote("local"));
        assert!(!registry.is_remote("ftp"));

        assert!(registry.is_registered("local"));
        assert!(!registry.is_registered("ftp"));
    }
}

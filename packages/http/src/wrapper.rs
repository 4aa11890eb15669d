//! HTTP(S) stream wrapper.

use std::time::Duration;

use reqwest::blocking::Response;
use tracing::{debug, warn};
use url::Url;

use remotefs_vfs::{
    Error as VfsError, OpenMode, OpenOptions, OpenedStream, RemoteStream, StatFlags, StatRecord,
    StreamOption, StreamWrapper, Uri, WrapperType,
};

use crate::body::HttpBody;
use crate::client::HttpClientFactory;
use crate::error::Error;

/// Read-only stream wrapper over HTTP(S) resources.
///
/// The wrapper is scheme-agnostic; the registry decides which schemes
/// dispatch here. Each open and each stat is a fresh single-shot GET
/// through the injected [`HttpClientFactory`].
///
/// One wrapper instance belongs to a single logical file handle at a
/// time: it tracks the current URI and a pending read-timeout option, and
/// hands out fresh [`HttpBody`] handles from [`StreamWrapper::open`].
pub struct HttpStreamWrapper {
    factory: HttpClientFactory,
    uri: Option<Uri>,
    timeout: Option<Duration>,
}

impl HttpStreamWrapper {
    pub fn new(factory: HttpClientFactory) -> Self {
        HttpStreamWrapper {
            factory,
            uri: None,
            timeout: None,
        }
    }

    /// The read timeout that will apply to the next request, if one was
    /// set through [`StreamWrapper::set_option`].
    pub fn read_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Issue a single-shot GET; error statuses count as transport
    /// failures.
    fn fetch(&self, uri: &Uri) -> Result<Response, Error> {
        let url = Url::parse(uri.as_str())?;
        let client = self.factory.client(self.timeout)?;
        debug!(uri = %uri, "GET");
        let response = client.get(url).send()?.error_for_status()?;
        Ok(response)
    }
}

impl StreamWrapper for HttpStreamWrapper {
    fn wrapper_type(&self) -> WrapperType {
        // Readable and remote, but hidden: no VISIBLE bit.
        WrapperType::READ | WrapperType::REMOTE
    }

    fn name(&self) -> &'static str {
        "HTTP stream wrapper"
    }

    fn description(&self) -> &'static str {
        "Read-only access to HTTP(S) resources"
    }

    fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    fn open(&mut self, uri: &Uri, mode: &str, options: OpenOptions) -> Result<OpenedStream, VfsError> {
        if OpenMode::parse(mode).is_none() {
            if options.report_errors {
                warn!(mode, "write modes are not supported for HTTP stream wrappers");
            }
            return Err(VfsError::UnsupportedMode {
                mode: mode.to_string(),
            });
        }

        let response = self.fetch(uri).map_err(|error| {
            if options.report_errors {
                warn!(uri = %uri, error = %error, "failed to open remote stream");
            }
            VfsError::from(error)
        })?;

        self.uri = Some(uri.clone());
        let opened_path = if options.use_path {
            Some(uri.clone())
        } else {
            None
        };

        Ok(OpenedStream {
            stream: Box::new(HttpBody::from_response(response)),
            opened_path,
        })
    }

    fn url_stat(&mut self, uri: &Uri, flags: StatFlags) -> Result<Option<StatRecord>, VfsError> {
        // Always a fresh GET; never reuses an open stream.
        match self.fetch(uri) {
            Ok(response) => {
                self.uri = Some(uri.clone());
                let body = HttpBody::from_response(response);
                Ok(Some(body.stat()))
            }
            Err(error) if flags.quiet => {
                debug!(uri = %uri, error = %error, "stat failed under quiet flag");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    fn set_option(&mut self, option: StreamOption) -> bool {
        match option {
            StreamOption::ReadTimeout {
                seconds,
                microseconds,
            } => {
                self.timeout =
                    Some(Duration::from_secs(seconds) + Duration::from_micros(u64::from(microseconds)));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper() -> HttpStreamWrapper {
        HttpStreamWrapper::new(HttpClientFactory::new())
    }

    #[test]
    fn uri_accessors_mirror_the_uri() {
        let mut wrapper = wrapper();
        assert!(wrapper.uri().is_none());
        assert!(wrapper.external_url().is_none());

        let uri = Uri::parse("http://example.com/file.txt").unwrap();
        wrapper.set_uri(uri.clone());
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
    fn dirname_uses_instance_uri_when_absent() {
        let mut wrapper = wrapper();
        assert!(wrapper.dirname(None).is_none());

        wrapper.set_uri(Uri::parse("http://example.com/directory/test.txt").unwrap());
        assert_eq!(
            wrapper.dirname(None).unwrap().as_str(),
            "http://example.com/directory"
        );

        let other = Uri::parse("http://example.com/directory/directory2/test.txt").unwrap();
        assert_eq!(
            wrapper.dirname(Some(&other)).unwrap().as_str(),
            "http://example.com/directory/directory2"
        );
    }

    #[test]
    fn read_timeout_option_is_stored_for_the_next_request() {
        let mut wrapper = wrapper();
        assert!(wrapper.read_timeout().is_none());

        assert!(wrapper.set_option(StreamOption::ReadTimeout {
            seconds: 2,
            microseconds: 500_000,
        }));
        assert_eq!(
            wrapper.read_timeout(),
            Some(Duration::new(2, 500_000_000))
        );
    }

    #[test]
    fn other_options_are_rejected_silently() {
        let mut wrapper = wrapper();
        assert!(!wrapper.set_option(StreamOption::Blocking { enabled: true }));
        assert!(!wrapper.set_option(StreamOption::WriteBuffer { size: 4096 }));
        assert!(wrapper.read_timeout().is_none());
    }

    #[test]
    fn wrapper_is_readable_remote_and_hidden() {
        let wrapper = wrapper();
        let wrapper_type = wrapper.wrapper_type();
        assert!(wrapper_type.contains(WrapperType::READ));
        assert!(wrapper_type.contains(WrapperType::REMOTE));
        assert!(!wrapper_type.contains(WrapperType::WRITE));
        assert!(!wrapper_type.contains(WrapperType::VISIBLE));
    }
}

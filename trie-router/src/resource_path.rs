/// Abstraction over types that carry a request path.
///
/// [`Router::resolve`](crate::Router::resolve) accepts any implementor, so callers can route
/// directly on whatever their transport hands them without first copying the path into a `String`.
pub trait ResourcePath {
    fn path(&self) -> &str;
}

impl ResourcePath for str {
    fn path(&self) -> &str {
        self
    }
}

impl<T: ResourcePath + ?Sized> ResourcePath for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}

impl ResourcePath for String {
    fn path(&self) -> &str {
        self.as_str()
    }
}

impl ResourcePath for bytestring::ByteString {
    fn path(&self) -> &str {
        self
    }
}

#[cfg(feature = "http")]
impl ResourcePath for http::Uri {
    fn path(&self) -> &str {
        self.path()
    }
}

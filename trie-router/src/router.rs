use tracing::debug;

use crate::{
    node::Node, params::Params, template::PathTemplate, validator::ValidatorRegistry,
    ResourcePath, RouterError,
};

/// Method and path router.
///
/// Routes are `(method, path template)` pairs mapped to a value of the generic type `T`, usually
/// a handler identifier. Templates are stored in a segment trie; see [`resolve`](Self::resolve)
/// for the matching rules.
///
/// Registration methods take `&mut self` and [`resolve`](Self::resolve) takes `&self`, so a router
/// is configured once and can then be shared between threads (it is `Send + Sync` whenever `T`
/// is) without any locking.
///
/// # Examples
/// ```
/// use trie_router::Router;
///
/// let mut router = Router::new();
/// router.add_validator("int", "^[0-9]+$").unwrap();
/// router.add_route("GET", "/items/{n:int}", 1).unwrap();
/// router.add_route("GET", "/items/new", 2).unwrap();
///
/// let (handler, params) = router.resolve("GET", "/items/42").unwrap();
/// assert_eq!(*handler, 1);
/// assert_eq!(params, [("n", "42")]);
///
/// assert_eq!(*router.resolve("GET", "/items/new").unwrap().0, 2);
/// assert!(router.resolve("GET", "/items/4a").is_none());
/// assert!(router.resolve("POST", "/items/42").is_none());
/// ```
#[derive(Debug)]
pub struct Router<T> {
    root: Node<T>,
    validators: ValidatorRegistry,
    ignore_trailing_slashes: bool,
    len: usize,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Router {
            root: Node::default(),
            validators: ValidatorRegistry::new(),
            ignore_trailing_slashes: false,
            len: 0,
        }
    }
}

impl<T> Router<T> {
    /// Constructs an empty router that treats `/path` and `/path/` as distinct.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a regex validator usable as `{param:name}` in later routes.
    ///
    /// The pattern must match the whole segment; it is anchored at both ends.
    pub fn add_validator(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
    ) -> Result<(), RouterError> {
        self.validators.add(name, pattern)
    }

    /// Registers a predicate validator usable as `{param:name}` in later routes.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::Router;
    /// let mut router = Router::new();
    /// router.add_validator_fn("lower", |s| s.chars().all(|c| c.is_ascii_lowercase())).unwrap();
    /// router.add_route("GET", "/tags/{tag:lower}", ()).unwrap();
    ///
    /// assert!(router.resolve("GET", "/tags/rust").is_some());
    /// assert!(router.resolve("GET", "/tags/Rust").is_none());
    /// ```
    pub fn add_validator_fn<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RouterError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validators.add_fn(name, f)
    }

    /// Checks `candidate` against a registered validator.
    pub fn validate(&self, name: &str, candidate: &str) -> Result<bool, RouterError> {
        self.validators.validate(name, candidate)
    }

    /// Returns the validators known to this router.
    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// Registers `value` for `method` requests matching `template`.
    ///
    /// Validators referenced by typed parameters are looked up now, so they must be registered
    /// first. The same template may be registered once per method. A second registration for the
    /// same method fails, including when the two templates differ only in parameter names.
    ///
    /// On error the router is left unchanged.
    pub fn add_route(&mut self, method: &str, template: &str, value: T) -> Result<(), RouterError> {
        let template = PathTemplate::parse(template)?;

        debug!("registering route {} {}", method, template.pattern());

        self.root
            .insert(method, template, value, &self.validators)?;
        self.len += 1;

        Ok(())
    }

    /// Makes [`resolve`](Self::resolve) treat `/path` and `/path/` alike.
    ///
    /// Only affects resolution, so it may be called before or after routes are added. The root
    /// path `/` is exempt and only ever matches a route registered as `/`.
    pub fn set_ignore_trailing_slashes(&mut self) {
        debug!("ignoring trailing slashes");
        self.ignore_trailing_slashes = true;
    }

    /// Returns `true` if trailing slashes are ignored during resolution.
    pub fn ignores_trailing_slashes(&self) -> bool {
        self.ignore_trailing_slashes
    }

    /// Finds the route matching `method` and `path`.
    ///
    /// Returns the registered value and the bound parameters in template order. Returns `None`
    /// when nothing matches, including when the path matches but only for other methods.
    ///
    /// The path is split into `/`-delimited segments and the trie is walked one segment at a
    /// time. Candidates for each segment, in order:
    /// 1. a static child whose text equals the segment;
    /// 1. typed parameter children whose validator accepts the segment, in registration order;
    /// 1. the untyped parameter child.
    ///
    /// Parameters never bind empty segments. A static match is final, so given `/a/b/c` and
    /// `/a/{x}/d`, the path `/a/b/d` does not resolve: the static `b` is taken and has no `d`
    /// below it. Parameter candidates are not final: if the rest of the path fails under a typed
    /// child, the next accepting typed child and then the untyped child are tried. Given
    /// `/users/{id:int}/events` and `/users/{login}/starred`, the path `/users/123/starred`
    /// resolves to the latter.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::Router;
    /// let mut router = Router::new();
    /// router.add_route("GET", "/users/{id}", "user").unwrap();
    /// router.add_route("GET", "/users/me", "me").unwrap();
    ///
    /// assert_eq!(*router.resolve("GET", "/users/me").unwrap().0, "me");
    ///
    /// let (handler, params) = router.resolve("GET", "/users/42").unwrap();
    /// assert_eq!(*handler, "user");
    /// assert_eq!(&params["id"], "42");
    /// ```
    pub fn resolve<'a, P>(&'a self, method: &str, path: &'a P) -> Option<(&'a T, Params<'a>)>
    where
        P: ResourcePath + ?Sized,
    {
        self.root
            .find(method, path.path(), self.ignore_trailing_slashes)
    }

    /// Returns number of registered routes, counting each method separately.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every registered `(method, template, value)`, ordered by template then method.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &PathTemplate, &T)> {
        let mut endpoints = Vec::with_capacity(self.len);
        self.root.collect(&mut endpoints);

        endpoints.sort_unstable_by(|(m1, e1), (m2, e2)| {
            (e1.template.pattern(), *m1).cmp(&(e2.template.pattern(), *m2))
        });

        endpoints
            .into_iter()
            .map(|(method, endpoint)| (method, &endpoint.template, &endpoint.value))
    }
}

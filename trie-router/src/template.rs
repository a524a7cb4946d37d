use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use crate::RouterError;

/// One `/`-delimited piece of a [`PathTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text; must equal the path segment exactly.
    Static(String),

    /// `{name}`; binds any non-empty path segment.
    Param(String),

    /// `{name:validator}`; binds a non-empty path segment accepted by the named validator.
    TypedParam { name: String, validator: String },
}

impl Segment {
    /// Returns the parameter name, or `None` for static segments.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::TypedParam { name, .. } => Some(name),
        }
    }

    fn parse(raw: &str, template: &str) -> Result<Self, RouterError> {
        let inner = match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(inner) => inner,
            None => return Ok(Segment::Static(raw.to_owned())),
        };

        let invalid = |reason| RouterError::InvalidTemplate {
            template: template.to_owned(),
            reason,
        };

        let (name, validator) = match inner.split_once(':') {
            Some((name, validator)) => (name, Some(validator)),
            None => (inner, None),
        };

        if name.is_empty() {
            return Err(invalid("parameter name is empty"));
        }

        Ok(match validator {
            None => Segment::Param(name.to_owned()),
            Some("") => return Err(invalid("validator name is empty")),
            Some(validator) => Segment::TypedParam {
                name: name.to_owned(),
                validator: validator.to_owned(),
            },
        })
    }
}

/// Parsed route path such as `/repos/{owner}/{repo}/issues/{number:int}`.
///
/// A template must start with `/`. Everything after the leading slash is split on `/`, so a
/// trailing slash produces an empty final segment: `/user/` has segments `["user", ""]` and the
/// root `/` has the single segment `[""]`.
///
/// # Examples
/// ```
/// use trie_router::{PathTemplate, Segment};
///
/// let tpl = PathTemplate::parse("/users/{id:int}/repos").unwrap();
/// assert_eq!(tpl.segments()[0], Segment::Static("users".to_owned()));
/// assert_eq!(tpl.param_names().collect::<Vec<_>>(), ["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    pattern: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template string.
    ///
    /// Fails if the template does not start with `/`, contains an empty parameter or validator
    /// name, or binds the same parameter name twice. Validator names are not checked here.
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let segments = match split_path(pattern) {
            Some(segments) => segments,
            None => {
                return Err(RouterError::InvalidTemplate {
                    template: pattern.to_owned(),
                    reason: "template must start with `/`",
                })
            }
        };

        let segments = segments
            .map(|raw| Segment::parse(raw, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let tpl = PathTemplate {
            pattern: pattern.to_owned(),
            segments,
        };

        let mut seen = Vec::new();
        for name in tpl.param_names() {
            if seen.contains(&name) {
                return Err(RouterError::DuplicateParameterName {
                    template: pattern.to_owned(),
                    name: name.to_owned(),
                });
            }
            seen.push(name);
        }

        Ok(tpl)
    }

    /// Returns the template string this was parsed from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns parameter names, left to right.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Assembles a concrete path using a closure that maps parameter names to values.
    fn build_path<F, I>(&self, path: &mut String, mut vars: F) -> bool
    where
        F: FnMut(&str) -> Option<I>,
        I: AsRef<str>,
    {
        for segment in &self.segments {
            path.push('/');

            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) | Segment::TypedParam { name, .. } => match vars(name) {
                    Some(val) => path.push_str(val.as_ref()),
                    None => return false,
                },
            }
        }

        true
    }

    /// Assembles a concrete path from parameter values given in declaration order.
    ///
    /// Returns `true` on success. Values are not checked against validators.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::PathTemplate;
    /// let mut s = String::new();
    /// let tpl = PathTemplate::parse("/user/{id}/post/{title}").unwrap();
    ///
    /// assert!(tpl.render_from_iter(&mut s, &["123", "my-post"]));
    /// assert_eq!(s, "/user/123/post/my-post");
    /// ```
    pub fn render_from_iter<I>(&self, path: &mut String, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut iter = values.into_iter();
        self.build_path(path, |_| iter.next())
    }

    /// Assembles a concrete path from a map of parameter values.
    ///
    /// Returns `true` on success.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::HashMap;
    /// # use trie_router::PathTemplate;
    /// let mut s = String::new();
    /// let tpl = PathTemplate::parse("/user/{id:int}/post/{title}").unwrap();
    ///
    /// let mut map = HashMap::new();
    /// map.insert("id", "123");
    /// map.insert("title", "my-post");
    ///
    /// assert!(tpl.render_from_map(&mut s, &map));
    /// assert_eq!(s, "/user/123/post/my-post");
    /// ```
    pub fn render_from_map<K, V, S>(&self, path: &mut String, values: &HashMap<K, V, S>) -> bool
    where
        K: Borrow<str> + Eq + Hash,
        V: AsRef<str>,
        S: BuildHasher,
    {
        self.build_path(path, |name| values.get(name))
    }
}

/// Splits a path or template into segments, dropping the leading `/`.
///
/// Returns `None` if `path` does not start with `/`.
pub(crate) fn split_path(path: &str) -> Option<std::str::Split<'_, char>> {
    path.strip_prefix('/').map(|rest| rest.split('/'))
}

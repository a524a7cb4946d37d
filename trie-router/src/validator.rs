use std::{fmt, sync::Arc};

use ahash::AHashMap;

use crate::{
    re::{self, Regex},
    RouterError,
};

/// A named predicate that a typed path parameter must satisfy.
///
/// Validators are cheap to clone; clones share the same compiled pattern or closure.
#[derive(Clone)]
pub struct Validator(Inner);

#[derive(Clone)]
enum Inner {
    Regex(Regex),
    Fn(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Validator {
    /// Compiles a validator that accepts strings fully matching `pattern`.
    ///
    /// The pattern is anchored at both ends, so `[0-9]+` and `^[0-9]+$` behave the same and
    /// partial matches are rejected.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::Validator;
    /// let int = Validator::regex("[0-9]+").unwrap();
    /// assert!(int.is_match("42"));
    /// assert!(!int.is_match("42a"));
    /// ```
    pub fn regex(pattern: &str) -> Result<Self, crate::RegexError> {
        re::anchored(pattern).map(|re| Validator(Inner::Regex(re)))
    }

    /// Wraps an arbitrary predicate.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::Validator;
    /// let short = Validator::from_fn(|s| s.len() <= 3);
    /// assert!(short.is_match("abc"));
    /// assert!(!short.is_match("abcd"));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Validator(Inner::Fn(Arc::new(f)))
    }

    /// Returns `true` if `candidate` satisfies this validator.
    #[inline]
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.0 {
            Inner::Regex(re) => re.is_match(candidate),
            Inner::Fn(f) => f(candidate),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Regex(re) => f.debug_tuple("Validator").field(&re.as_str()).finish(),
            Inner::Fn(_) => f.debug_tuple("Validator").field(&"<fn>").finish(),
        }
    }
}

/// Name to [`Validator`] mapping consulted when routes with typed parameters are registered.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: AHashMap<String, Validator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as a regex validator.
    ///
    /// # Examples
    /// ```
    /// # use trie_router::ValidatorRegistry;
    /// let mut validators = ValidatorRegistry::new();
    /// validators.add("int", "^[0-9]+$").unwrap();
    ///
    /// assert!(validators.validate("int", "123").unwrap());
    /// assert!(!validators.validate("int", "12a").unwrap());
    /// assert!(validators.add("int", "[0-9]+").is_err());
    /// ```
    pub fn add(&mut self, name: impl Into<String>, pattern: &str) -> Result<(), RouterError> {
        let name = name.into();
        self.ensure_vacant(&name)?;

        match Validator::regex(pattern) {
            Ok(validator) => {
                self.insert(name, validator);
                Ok(())
            }
            Err(source) => Err(RouterError::InvalidValidatorPattern { name, source }),
        }
    }

    /// Registers `name` as a predicate validator.
    pub fn add_fn<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RouterError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        self.ensure_vacant(&name)?;
        self.insert(name, Validator::from_fn(f));
        Ok(())
    }

    /// Checks `candidate` against the validator registered as `name`.
    pub fn validate(&self, name: &str, candidate: &str) -> Result<bool, RouterError> {
        self.lookup(name).map(|v| v.is_match(candidate))
    }

    /// Returns the validator registered as `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    /// Like [`get`](Self::get) but reports a missing validator as an error.
    pub(crate) fn lookup(&self, name: &str) -> Result<&Validator, RouterError> {
        self.get(name)
            .ok_or_else(|| RouterError::UnknownValidator(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    fn ensure_vacant(&self, name: &str) -> Result<(), RouterError> {
        if self.contains(name) {
            return Err(RouterError::DuplicateValidator(name.to_owned()));
        }

        Ok(())
    }

    fn insert(&mut self, name: String, validator: Validator) {
        tracing::debug!("registered validator `{}`: {:?}", name, validator);
        self.validators.insert(name, validator);
    }
}

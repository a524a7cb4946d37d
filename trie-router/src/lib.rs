//! Segment trie HTTP path router.
//!
//! Routes map an HTTP method plus a path template to a value, typically a handler identifier.
//! Templates are made of `/`-separated segments, each one of:
//! - literal text, e.g. `users`;
//! - an untyped parameter `{name}`, binding any non-empty segment;
//! - a typed parameter `{name:validator}`, binding a segment only if the named validator accepts
//!   it. Validators are registered up front with [`Router::add_validator`] (an anchored regex) or
//!   [`Router::add_validator_fn`] (any predicate).
//!
//! Static segments take precedence over typed parameters, which take precedence over untyped
//! ones. See [`Router::resolve`] for the full matching rules.
//!
//! ```
//! use trie_router::Router;
//!
//! let mut router = Router::new();
//! router.add_validator("int", "^[0-9]+$")?;
//! router.add_route("GET", "/repos/{owner}/{repo}/issues/{number:int}", "issue")?;
//! router.add_route("GET", "/repos/{owner}/{repo}", "repo")?;
//!
//! let (handler, params) = router.resolve("GET", "/repos/rust-lang/rust/issues/1").unwrap();
//! assert_eq!(*handler, "issue");
//! assert_eq!(params, [("owner", "rust-lang"), ("repo", "rust"), ("number", "1")]);
//!
//! assert!(router.resolve("GET", "/repos/rust-lang/rust/issues/one").is_none());
//! # Ok::<_, trie_router::RouterError>(())
//! ```

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(missing_debug_implementations)]

mod error;
mod node;
mod params;
mod re;
mod resource_path;
mod router;
mod template;
mod validator;

pub use self::error::RouterError;
pub use self::params::Params;
pub use self::re::RegexError;
pub use self::resource_path::ResourcePath;
pub use self::router::Router;
pub use self::template::{PathTemplate, Segment};
pub use self::validator::{Validator, ValidatorRegistry};

//! Registration errors.

use derive_more::{Display, Error};

use crate::re::RegexError;

/// Errors raised while configuring a [`Router`](crate::Router).
///
/// All of these indicate a mistake in the routing table itself and are only produced during
/// registration. Failing to find a route at request time is not an error; see
/// [`Router::resolve`](crate::Router::resolve).
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum RouterError {
    /// A validator with this name is already registered.
    #[display("validator `{_0}` is already registered")]
    DuplicateValidator(#[error(not(source))] String),

    /// A typed parameter refers to a validator that was never registered.
    #[display("validator `{_0}` is not registered")]
    UnknownValidator(#[error(not(source))] String),

    /// Validator pattern failed to compile.
    #[display("validator `{name}` has an invalid pattern: {source}")]
    InvalidValidatorPattern {
        name: String,
        source: RegexError,
    },

    /// Path template could not be parsed.
    #[display("invalid path template `{template}`: {reason}")]
    InvalidTemplate {
        template: String,
        reason: &'static str,
    },

    /// The same parameter name occurs twice in one path template.
    #[display("parameter `{name}` appears more than once in `{template}`")]
    DuplicateParameterName {
        template: String,
        name: String,
    },

    /// A route with the same method and shape is already registered.
    #[display("route {method} `{template}` conflicts with existing route `{existing}`")]
    RouteConflict {
        method: String,
        template: String,
        existing: String,
    },
}

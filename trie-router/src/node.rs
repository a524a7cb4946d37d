use std::str::Split;

use ahash::AHashMap;
use tracing::trace;

use crate::{
    params::Params,
    template::{split_path, PathTemplate, Segment},
    validator::{Validator, ValidatorRegistry},
    RouterError,
};

/// Terminal record for one method of one route.
#[derive(Debug)]
pub(crate) struct Endpoint<T> {
    pub(crate) value: T,
    pub(crate) template: PathTemplate,
}

#[derive(Debug)]
struct TypedChild<T> {
    /// Validator name from the template; children are shared by name.
    name: String,
    validator: Validator,
    node: Node<T>,
}

/// One segment position in the routing trie.
///
/// Parameter names are stored on the [`Endpoint`], not on the node, so routes sharing a
/// parameter position may name it differently.
#[derive(Debug)]
pub(crate) struct Node<T> {
    statics: AHashMap<String, Node<T>>,

    /// Tried in registration order.
    typed: Vec<TypedChild<T>>,

    param: Option<Box<Node<T>>>,

    endpoints: AHashMap<String, Endpoint<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            statics: AHashMap::new(),
            typed: Vec::new(),
            param: None,
            endpoints: AHashMap::new(),
        }
    }
}

impl<T> Node<T> {
    /// Inserts a route below this node.
    ///
    /// All checks happen before the trie is touched: a route that conflicts with an existing one
    /// necessarily walks existing nodes only, and unknown validators are rejected up front.
    pub(crate) fn insert(
        &mut self,
        method: &str,
        template: PathTemplate,
        value: T,
        validators: &ValidatorRegistry,
    ) -> Result<(), RouterError> {
        for segment in template.segments() {
            if let Segment::TypedParam { validator, .. } = segment {
                validators.lookup(validator)?;
            }
        }

        let mut node = self;

        for segment in template.segments() {
            node = match segment {
                Segment::Static(text) => node.statics.entry(text.clone()).or_default(),

                Segment::Param(_) => &mut **node.param.get_or_insert_with(Box::default),

                Segment::TypedParam { validator, .. } => {
                    let idx = match node.typed.iter().position(|c| c.name == *validator) {
                        Some(idx) => idx,
                        None => {
                            node.typed.push(TypedChild {
                                name: validator.clone(),
                                validator: validators.lookup(validator)?.clone(),
                                node: Node::default(),
                            });
                            node.typed.len() - 1
                        }
                    };

                    &mut node.typed[idx].node
                }
            };
        }

        if let Some(existing) = node.endpoints.get(method) {
            return Err(RouterError::RouteConflict {
                method: method.to_owned(),
                template: template.pattern().to_owned(),
                existing: existing.template.pattern().to_owned(),
            });
        }

        node.endpoints
            .insert(method.to_owned(), Endpoint { value, template });

        Ok(())
    }

    /// Resolves `path` below this node.
    ///
    /// A static child matching a segment is final. Otherwise parameter children are tried in
    /// order, typed ones in registration order and then the untyped one, until one of them
    /// leads to an endpoint.
    pub(crate) fn find<'a>(
        &'a self,
        method: &str,
        path: &'a str,
        ignore_trailing_slash: bool,
    ) -> Option<(&'a T, Params<'a>)> {
        // `/` and `//` keep their slash so the root route stays distinct
        let path = match path.strip_suffix('/') {
            Some(stripped) if ignore_trailing_slash && stripped.len() > 1 => stripped,
            _ => path,
        };

        let segments = match split_path(path) {
            Some(segments) => segments,
            None => {
                trace!("path {:?} does not start with `/`", path);
                return None;
            }
        };

        let mut params = Params::default();

        let endpoint = match self.descend(method, segments, ignore_trailing_slash, &mut params) {
            Some(endpoint) => endpoint,
            None => {
                trace!("no {} route matches {:?}", method, path);
                return None;
            }
        };

        params.set_names(endpoint.template.param_names());

        Some((&endpoint.value, params))
    }

    fn descend<'a>(
        &'a self,
        method: &str,
        mut segments: Split<'a, char>,
        ignore_trailing_slash: bool,
        params: &mut Params<'a>,
    ) -> Option<&'a Endpoint<T>> {
        let segment = match segments.next() {
            Some(segment) => segment,
            None => return self.endpoint(method, ignore_trailing_slash),
        };

        if let Some(node) = self.statics.get(segment) {
            return node.descend(method, segments, ignore_trailing_slash, params);
        }

        // parameters never bind empty segments
        if segment.is_empty() {
            return None;
        }

        let bound = params.len();
        params.push("", segment);

        for typed in self.typed.iter().filter(|c| c.validator.is_match(segment)) {
            let found = typed
                .node
                .descend(method, segments.clone(), ignore_trailing_slash, params);

            if found.is_some() {
                return found;
            }

            params.truncate(bound + 1);
        }

        if let Some(node) = &self.param {
            let found = node.descend(method, segments, ignore_trailing_slash, params);

            if found.is_some() {
                return found;
            }
        }

        params.truncate(bound);
        None
    }

    #[inline]
    fn endpoint(&self, method: &str, ignore_trailing_slash: bool) -> Option<&Endpoint<T>> {
        match self.endpoints.get(method) {
            Some(endpoint) => Some(endpoint),
            // route registered with a trailing slash
            None if ignore_trailing_slash => self
                .statics
                .get("")
                .and_then(|node| node.endpoints.get(method)),
            None => None,
        }
    }

    /// Collects every endpoint in this subtree.
    pub(crate) fn collect<'a>(&'a self, out: &mut Vec<(&'a str, &'a Endpoint<T>)>) {
        out.extend(
            self.endpoints
                .iter()
                .map(|(method, endpoint)| (method.as_str(), endpoint)),
        );

        for node in self.statics.values() {
            node.collect(out);
        }

        for typed in &self.typed {
            typed.node.collect(out);
        }

        if let Some(node) = &self.param {
            node.collect(out);
        }
    }
}

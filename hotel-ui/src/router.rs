//! Client-side page router
//!
//! Routes are tried in declaration order against the current location. Path
//! patterns follow the path-to-regexp conventions:
//!
//! - `/rooms` literal, case-insensitive
//! - `/reservations/:id` named segment
//! - `/reservations/:id(\d+)` named segment constrained by a regex
//! - `/files/(.*)` unnamed group, bound as `"0"`, `"1"`, ...
//! - `:name?`, `:name*`, `:name+` optional / zero-or-more / one-or-more
//! - `*` anything
//!
//! A trailing slash on the location is tolerated. When the navigation context
//! already carries an error, the router ignores the pathname and resolves the
//! error path instead.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use regex::Regex;
use thiserror::Error;

/// Parameters bound by a matched pattern
pub type Params = BTreeMap<String, String>;

/// Where navigation goes when the context carries an error
pub const DEFAULT_ERROR_PATH: &str = "/error";

/// Routing failure, shown to the user by the error page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Not found")]
    NotFound,

    #[error("{message}")]
    Failed { status: u16, message: String },
}

impl RouteError {
    pub fn failed(status: u16, message: impl Into<String>) -> Self {
        Self::Failed {
            status,
            message: message.into(),
        }
    }

    /// HTTP-like status code
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Failed { status, .. } => *status,
        }
    }
}

/// Malformed path pattern
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unbalanced group in path pattern {pattern:?}")]
    UnbalancedGroup { pattern: String },

    #[error("empty group in path pattern {pattern:?}")]
    EmptyGroup { pattern: String },

    #[error("invalid path pattern {pattern:?}: {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(ParamToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamToken {
    name: String,
    prefix: Option<char>,
    pattern: String,
    optional: bool,
    repeat: bool,
}

/// Compiled path pattern
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
    /// (parameter name, capture group name)
    keys: Vec<(String, String)>,
}

impl PathPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let mut tokens = tokenize(pattern)?;

        // non-strict: a trailing delimiter in the pattern is optional
        if let Some(Token::Literal(last)) = tokens.last_mut() {
            if last.ends_with('/') {
                last.pop();
                if last.is_empty() {
                    tokens.pop();
                }
            }
        }

        let mut source = String::from("(?i)^");
        let mut keys = Vec::new();
        for token in &tokens {
            match token {
                Token::Literal(text) => source.push_str(&regex::escape(text)),
                Token::Param(param) => {
                    let group = format!("p{}", keys.len());
                    source.push_str(&param_regex(param, &group));
                    keys.push((param.name.clone(), group));
                }
            }
        }
        source.push_str("/?$");

        let regex = Regex::new(&source).map_err(|e| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            keys,
        })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a path, returning the bound parameters
    ///
    /// Optional parameters that did not participate in the match are absent.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;
        let params = self
            .keys
            .iter()
            .filter_map(|(name, group)| {
                captures
                    .name(group)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Match `uri` against a one-off pattern
pub fn match_uri(pattern: &str, uri: &str) -> Result<Option<Params>, PatternError> {
    Ok(PathPattern::compile(pattern)?.matches(uri))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut unnamed = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            literal.push(chars.get(i + 1).copied().unwrap_or('\\'));
            i += 2;
            continue;
        }

        let named = c == ':' && chars.get(i + 1).is_some_and(|n| is_name_char(*n));
        if !named && c != '(' && c != '*' {
            literal.push(c);
            i += 1;
            continue;
        }

        let prefix = match literal.chars().last() {
            Some(p @ ('/' | '.')) => {
                literal.pop();
                Some(p)
            }
            _ => None,
        };
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }

        if c == '*' {
            i += 1;
            tokens.push(Token::Param(ParamToken {
                name: next_ordinal(&mut unnamed),
                prefix,
                pattern: ".*".to_string(),
                optional: false,
                repeat: false,
            }));
            continue;
        }

        let name = if named {
            i += 1;
            let start = i;
            while i < chars.len() && is_name_char(chars[i]) {
                i += 1;
            }
            Some(chars[start..i].iter().collect::<String>())
        } else {
            None
        };

        let group = if chars.get(i) == Some(&'(') {
            let (group, next) = read_group(&chars, i, pattern)?;
            i = next;
            Some(group)
        } else {
            None
        };

        let modifier = match chars.get(i) {
            Some(m @ ('?' | '*' | '+')) => {
                i += 1;
                Some(*m)
            }
            _ => None,
        };

        let delimiter = prefix.unwrap_or('/');
        tokens.push(Token::Param(ParamToken {
            name: name.unwrap_or_else(|| next_ordinal(&mut unnamed)),
            prefix,
            pattern: group
                .unwrap_or_else(|| format!("[^{}]+?", regex::escape(&delimiter.to_string()))),
            optional: matches!(modifier, Some('?' | '*')),
            repeat: matches!(modifier, Some('*' | '+')),
        }));
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn next_ordinal(counter: &mut usize) -> String {
    let name = counter.to_string();
    *counter += 1;
    name
}

/// Read a parenthesised group starting at `open`; returns its body and the
/// index just past the closing parenthesis.
fn read_group(chars: &[char], open: usize, pattern: &str) -> Result<(String, usize), PatternError> {
    let mut depth = 1;
    let mut body = String::new();
    let mut i = open + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                body.push('\\');
                if let Some(next) = chars.get(i + 1) {
                    body.push(*next);
                }
                i += 2;
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    if body.is_empty() {
                        return Err(PatternError::EmptyGroup {
                            pattern: pattern.to_string(),
                        });
                    }
                    return Ok((body, i + 1));
                }
            }
            _ => {}
        }
        body.push(chars[i]);
        i += 1;
    }

    Err(PatternError::UnbalancedGroup {
        pattern: pattern.to_string(),
    })
}

fn param_regex(param: &ParamToken, group: &str) -> String {
    let prefix = param
        .prefix
        .map(|p| regex::escape(&p.to_string()))
        .unwrap_or_default();
    let pattern = &param.pattern;

    let capture = if param.repeat {
        format!("(?P<{group}>(?:{pattern})(?:{prefix}(?:{pattern}))*)")
    } else {
        format!("(?P<{group}>(?:{pattern}))")
    };

    if param.optional {
        format!("(?:{prefix}{capture})?")
    } else {
        format!("{prefix}{capture}")
    }
}

/// Navigation context handed to route actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    pub pathname: String,
    /// Raw query string, without the leading `?`
    pub query: Option<String>,
    pub params: Params,
    pub error: Option<RouteError>,
}

impl RouteContext {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Default::default()
        }
    }

    /// Split a location such as `/rooms?floor=2#top` into its parts
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        let without_hash = location.split('#').next().unwrap_or_default();
        let (path, query) = match without_hash.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (without_hash, None),
        };
        let pathname = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            pathname,
            query,
            ..Default::default()
        }
    }

    pub fn with_error(mut self, error: RouteError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

type Action<T> =
    Arc<dyn Fn(RouteContext) -> BoxFuture<'static, Result<Option<T>, RouteError>> + Send + Sync>;

/// A path pattern and the action producing its page
///
/// An action returning `Ok(None)` declines the location and lets the next
/// matching route try.
pub struct Route<T> {
    pattern: PathPattern,
    action: Action<T>,
}

impl<T: Send + 'static> Route<T> {
    pub fn new<F, Fut>(path: &str, action: F) -> Result<Self, PatternError>
    where
        F: Fn(RouteContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>, RouteError>> + Send + 'static,
    {
        Ok(Self {
            pattern: PathPattern::compile(path)?,
            action: Arc::new(move |context| action(context).boxed()),
        })
    }

    /// Route whose page is built without waiting on anything
    pub fn page<F>(path: &str, render: F) -> Result<Self, PatternError>
    where
        F: Fn(RouteContext) -> T + Send + Sync + 'static,
    {
        Self::new(path, move |context| {
            let page = render(context);
            async move { Ok(Some(page)) }
        })
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("pattern", &self.pattern.as_str()).finish()
    }
}

/// Ordered route table
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
    error_path: String,
}

impl<T: Send + 'static> Router<T> {
    pub fn new(routes: Vec<Route<T>>) -> Self {
        Self {
            routes,
            error_path: DEFAULT_ERROR_PATH.to_string(),
        }
    }

    pub fn with_error_path(mut self, path: impl Into<String>) -> Self {
        self.error_path = path.into();
        self
    }

    pub fn error_path(&self) -> &str {
        &self.error_path
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// Resolve the context to the page of the first matching route
    ///
    /// Action failures are returned as-is; when no route produces a page the
    /// result is [`RouteError::NotFound`].
    pub async fn resolve(&self, context: RouteContext) -> Result<T, RouteError> {
        let uri = if context.error.is_some() {
            self.error_path.as_str()
        } else {
            context.pathname.as_str()
        };

        for route in &self.routes {
            let Some(params) = route.pattern.matches(uri) else {
                continue;
            };
            tracing::trace!(pattern = %route.pattern, uri, "Route matched");

            let route_context = RouteContext {
                params,
                ..context.clone()
            };
            if let Some(page) = (route.action)(route_context).await? {
                return Ok(page);
            }
        }

        Err(RouteError::NotFound)
    }
}

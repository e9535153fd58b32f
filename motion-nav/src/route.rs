//! # Route 模块
//!
//! 路由模式、命名参数与深层链接。
//!
//! ## 路由格式
//!
//! ```text
//! profile/{id}                 路径参数（必需）
//! search?query={query}         查询参数（可缺省，取默认值或 null）
//! app://example.com/item/{id}  深层链接
//! ```
//!
//! 占位符必须独占一个路径段；格式错误在注册时以 [`NavError::MalformedRoute`] 返回。

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// 解析后的路由参数
///
/// 值为 `None` 表示可空参数取了 null。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arguments(BTreeMap<String, Option<String>>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取参数值；参数不存在或为 null 时返回 `None`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.as_deref())
    }

    /// 参数是否存在（包括取 null 的可空参数）
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 命名参数声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    /// 缺省时使用的默认值
    #[serde(default)]
    pub default_value: Option<String>,
    /// 是否允许为 null
    #[serde(default)]
    pub nullable: bool,
}

impl NamedArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            nullable: false,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Argument(String),
}

/// 路由模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    /// 查询参数：(查询键, 参数名)
    query: Vec<(String, String)>,
}

impl RoutePattern {
    /// 解析路由模式
    pub fn parse(pattern: &str) -> NavResult<Self> {
        let malformed = |message: &str| NavError::MalformedRoute {
            route: pattern.to_string(),
            message: message.to_string(),
        };

        if pattern.trim().is_empty() {
            return Err(malformed("路由为空"));
        }

        let (path, query) = match pattern.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (pattern, None),
        };

        let mut names: Vec<&str> = Vec::new();
        let mut segments = Vec::new();
        for segment in path.split('/') {
            if segment.is_empty() {
                return Err(malformed("存在空的路径段"));
            }
            match placeholder(segment) {
                Some(Ok(name)) => {
                    if names.contains(&name) {
                        return Err(malformed("参数名重复"));
                    }
                    names.push(name);
                    segments.push(Segment::Argument(name.to_string()));
                }
                Some(Err(message)) => return Err(malformed(message)),
                None => segments.push(Segment::Literal(segment.to_string())),
            }
        }

        let mut query_args = Vec::new();
        if let Some(query) = query {
            for pair in query.split('&') {
                let Some((key, value)) = pair.split_once('=') else {
                    return Err(malformed("查询参数必须形如 key={name}"));
                };
                if key.is_empty() {
                    return Err(malformed("查询键为空"));
                }
                let name = match placeholder(value) {
                    Some(Ok(name)) => name,
                    Some(Err(message)) => return Err(malformed(message)),
                    None => return Err(malformed("查询参数必须形如 key={name}")),
                };
                if names.contains(&name) {
                    return Err(malformed("参数名重复"));
                }
                names.push(name);
                query_args.push((key.to_string(), name.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            query: query_args,
        })
    }

    /// 原始模式字符串
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 模式中出现的全部参数名（路径参数在前）
    pub fn argument_names(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Argument(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .chain(self.query.iter().map(|(_, name)| name.as_str()))
    }

    /// 匹配实际路由，返回捕获到的参数
    ///
    /// 缺省的查询参数不会出现在结果中，由 [`resolve_arguments`] 补齐。
    pub fn matches(&self, route: &str) -> Option<BTreeMap<String, String>> {
        let (path, query) = match route.split_once('?') {
            Some((path, query)) => (path, query),
            None => (route, ""),
        };

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Argument(_) if part.is_empty() => return None,
                Segment::Argument(name) => {
                    captured.insert(name.clone(), part.to_string());
                }
            }
        }

        let actual: BTreeMap<&str, &str> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();
        for (key, name) in &self.query {
            if let Some(value) = actual.get(key.as_str()) {
                captured.insert(name.clone(), (*value).to_string());
            }
        }
        Some(captured)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 识别 `{name}` 占位符
///
/// 返回 `None` 表示普通字面量。
fn placeholder(segment: &str) -> Option<Result<&str, &'static str>> {
    if !segment.contains(['{', '}']) {
        return None;
    }
    let Some(name) = segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Some(Err("参数占位符必须独占一个路径段"));
    };
    if name.is_empty() {
        return Some(Err("参数名为空"));
    }
    if name.contains(['{', '}']) {
        return Some(Err("花括号不匹配"));
    }
    Some(Ok(name))
}

/// 将捕获结果与参数声明合并为 [`Arguments`]
///
/// 模式中缺省的参数依次取默认值、null（可空时）；两者都没有时报错。
/// 声明了默认值但未出现在模式中的参数也会被加入。
pub fn resolve_arguments(
    pattern: &RoutePattern,
    mut captured: BTreeMap<String, String>,
    declared: &[NamedArgument],
) -> NavResult<Arguments> {
    let mut arguments = Arguments::new();
    for name in pattern.argument_names() {
        if let Some(value) = captured.remove(name) {
            arguments.insert(name, Some(value));
            continue;
        }
        match declared.iter().find(|arg| arg.name == name) {
            Some(NamedArgument {
                default_value: Some(default),
                ..
            }) => arguments.insert(name, Some(default.clone())),
            Some(NamedArgument { nullable: true, .. }) => arguments.insert(name, None),
            _ => {
                return Err(NavError::MissingArgument {
                    route: pattern.as_str().to_string(),
                    name: name.to_string(),
                });
            }
        }
    }
    for arg in declared {
        if !arguments.contains(&arg.name)
            && let Some(default) = &arg.default_value
        {
            arguments.insert(arg.name.clone(), Some(default.clone()));
        }
    }
    Ok(arguments)
}

/// 深层链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// `scheme://host` 部分，无 scheme 时为空
    prefix: String,
    pattern: Option<RoutePattern>,
}

impl DeepLink {
    /// 由 URI 模式创建，如 `app://example.com/item/{id}`
    pub fn uri(uri_pattern: &str) -> NavResult<Self> {
        let (prefix, path) = split_uri(uri_pattern);
        let pattern = match path {
            Some(path) => Some(RoutePattern::parse(path)?),
            None if prefix.is_empty() => {
                return Err(NavError::MalformedRoute {
                    route: uri_pattern.to_string(),
                    message: "深层链接为空".to_string(),
                });
            }
            None => None,
        };
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// 深层链接的路由模式（不含 `scheme://host`）
    pub fn pattern(&self) -> Option<&RoutePattern> {
        self.pattern.as_ref()
    }

    /// 匹配实际 URI
    pub fn matches(&self, uri: &str) -> Option<BTreeMap<String, String>> {
        let (prefix, path) = split_uri(uri);
        if prefix != self.prefix {
            return None;
        }
        match (&self.pattern, path) {
            (Some(pattern), Some(path)) => pattern.matches(path),
            (None, None) => Some(BTreeMap::new()),
            _ => None,
        }
    }
}

/// 拆分为 (`scheme://host`, 路径)
fn split_uri(uri: &str) -> (&str, Option<&str>) {
    let Some(scheme_end) = uri.find("://") else {
        return ("", Some(uri).filter(|path| !path.is_empty()));
    };
    let after_scheme = scheme_end + 3;
    match uri[after_scheme..].find('/') {
        Some(slash) => {
            let split = after_scheme + slash;
            let path = &uri[split + 1..];
            (&uri[..split], Some(path).filter(|path| !path.is_empty()))
        }
        None => (uri, None),
    }
}

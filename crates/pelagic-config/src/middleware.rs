use serde::{Deserialize, Serialize};

/// Origin the CMS serves its own uploads from.
pub const MEDIA_ORIGIN: &str = "http://localhost:1337";

/// One entry of the HTTP middleware chain, in the order requests traverse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "name", content = "config", rename_all = "camelCase")]
pub enum Middleware {
    Logger,
    Errors,
    Security(SecurityConfig),
    Cors,
    PoweredBy,
    Query,
    Body,
    Session,
    Favicon,
    Public,
}

impl Middleware {
    /// Registered name of the middleware.
    pub fn name(&self) -> &'static str {
        match self {
            Middleware::Logger => "logger",
            Middleware::Errors => "errors",
            Middleware::Security(_) => "security",
            Middleware::Cors => "cors",
            Middleware::PoweredBy => "poweredBy",
            Middleware::Query => "query",
            Middleware::Body => "body",
            Middleware::Session => "session",
            Middleware::Favicon => "favicon",
            Middleware::Public => "public",
        }
    }
}

/// Security headers middleware settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    pub content_security_policy: ContentSecurityPolicy,
}

/// Content-Security-Policy directives. Order is preserved when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContentSecurityPolicy {
    /// Merge with the platform's default directives instead of replacing them.
    #[serde(default = "default_true")]
    pub use_defaults: bool,
    #[serde(default)]
    pub directives: Vec<CspDirective>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CspDirective {
    pub name: String,
    pub sources: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl CspDirective {
    pub fn new(name: &str, sources: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ContentSecurityPolicy {
    /// Look up a directive by name.
    pub fn directive(&self, name: &str) -> Option<&CspDirective> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// Render as a `Content-Security-Policy` header value.
    pub fn header_value(&self) -> String {
        self.directives
            .iter()
            .map(|d| {
                if d.sources.is_empty() {
                    d.name.clone()
                } else {
                    format!("{} {}", d.name, d.sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        let media_sources = ["'self'", "data:", "blob:", MEDIA_ORIGIN, "https:"];
        Self {
            use_defaults: true,
            directives: vec![
                CspDirective::new("img-src", &media_sources),
                CspDirective::new("media-src", &media_sources),
                CspDirective::new("script-src", &["'self'", "'unsafe-inline'", "'unsafe-eval'"]),
                CspDirective::new("style-src", &["'self'", "'unsafe-inline'"]),
            ],
        }
    }
}

/// Ordered middleware chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct MiddlewareStack(pub Vec<Middleware>);

impl Default for MiddlewareStack {
    fn default() -> Self {
        Self(vec![
            Middleware::Logger,
            Middleware::Errors,
            Middleware::Security(SecurityConfig {
                content_security_policy: ContentSecurityPolicy::default(),
            }),
            Middleware::Cors,
            Middleware::PoweredBy,
            Middleware::Query,
            Middleware::Body,
            Middleware::Session,
            Middleware::Favicon,
            Middleware::Public,
        ])
    }
}

impl MiddlewareStack {
    pub fn iter(&self) -> impl Iterator<Item = &Middleware> {
        self.0.iter()
    }

    /// Names in chain order.
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(Middleware::name).collect()
    }

    /// The CSP of the first security middleware, if any.
    pub fn content_security_policy(&self) -> Option<&ContentSecurityPolicy> {
        self.0.iter().find_map(|m| match m {
            Middleware::Security(cfg) => Some(&cfg.content_security_policy),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_order() {
        let stack = MiddlewareStack::default();
        assert_eq!(
            stack.names(),
            vec![
                "logger", "errors", "security", "cors", "poweredBy", "query", "body", "session",
                "favicon", "public"
            ]
        );
    }

    #[test]
    fn default_csp_allows_local_media_origin() {
        let stack = MiddlewareStack::default();
        let csp = stack.content_security_policy().unwrap();
        assert!(csp.use_defaults);

        let img = csp.directive("img-src").unwrap();
        let media = csp.directive("media-src").unwrap();
        assert!(img.sources.contains(&MEDIA_ORIGIN.to_string()));
        assert_eq!(img.sources, media.sources);
        assert!(csp.directive("connect-src").is_none());
    }

    #[test]
    fn header_value_keeps_directive_order() {
        let csp = ContentSecurityPolicy {
            use_defaults: false,
            directives: vec![
                CspDirective::new("style-src", &["'self'"]),
                CspDirective::new("upgrade-insecure-requests", &[]),
                CspDirective::new("img-src", &["'self'", "data:"]),
            ],
        };
        assert_eq!(
            csp.header_value(),
            "style-src 'self'; upgrade-insecure-requests; img-src 'self' data:"
        );
    }

    #[test]
    fn default_header_value() {
        let csp = ContentSecurityPolicy::default();
        assert_eq!(
            csp.header_value(),
            "img-src 'self' data: blob: http://localhost:1337 https:; \
             media-src 'self' data: blob: http://localhost:1337 https:; \
             script-src 'self' 'unsafe-inline' 'unsafe-eval'; \
             style-src 'self' 'unsafe-inline'"
        );
    }

    #[test]
    fn stack_serializes_with_name_tags() {
        let stack = MiddlewareStack(vec![Middleware::Logger, Middleware::PoweredBy]);
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "logger" }, { "name": "poweredBy" }])
        );

        let back: MiddlewareStack = serde_json::from_value(json).unwrap();
        assert_eq!(back, stack);
    }

    #[test]
    fn stack_without_security_has_no_csp() {
        let stack = MiddlewareStack(vec![Middleware::Logger]);
        assert!(stack.content_security_policy().is_none());
    }
}

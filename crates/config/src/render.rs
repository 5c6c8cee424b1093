//! Env-file rendering for one module and deployment environment.
//!
//! Responsibilities:
//! - Flatten a resolved `Settings` tree into grouped `KEY=value` lines.
//! - Select module-specific values (database, consumer group, service ports).
//!
//! Does NOT handle:
//! - Loading or resolving settings (see `loader`).
//! - Writing the file to disk (the caller decides where it goes).
//!
//! Invariants:
//! - Output is a pure function of its inputs; the timestamp is passed in.
//! - Optional lines (Qdrant API key, Kafka SASL, encryption) are omitted when empty.
//! - Values a dotenv reader would misread (whitespace, `#`, quotes, `$`, `\`) are double-quoted.
//! - Service registry blocks follow the registry's key order and list only non-zero ports.

use std::borrow::Cow;
use std::fmt::Display;

use crate::module::ModuleId;
use crate::types::Settings;

const RULE: &str =
    "# ============================================================================";

/// Default file name for a generated env file: `.env.<module>.<environment>`.
pub fn default_output_name(module: &str, environment: &str) -> String {
    format!(".env.{module}.{environment}")
}

/// Double-quote `value` when a dotenv reader would otherwise cut it short or
/// rewrite it. Inside the quotes `\`, `"` and `$` are backslash-escaped and a
/// newline is written as `\n`.
fn quote_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\' | '$'));
    if !needs_quotes {
        return value.into();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted.into()
}

struct EnvWriter {
    out: String,
}

impl EnvWriter {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.blank();
        self.line(RULE);
        self.line(&format!("# {title}"));
        self.line(RULE);
    }

    fn group(&mut self, title: &str) {
        self.blank();
        self.line(&format!("# {title}"));
    }

    fn var(&mut self, key: &str, value: impl Display) {
        let value = value.to_string();
        self.line(&format!("{key}={}", quote_value(&value)));
    }

    fn var_if_set(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.var(key, value);
        }
    }

    fn port_if_set(&mut self, key: &str, port: u16) {
        if port != 0 {
            self.var(key, port);
        }
    }
}

/// Render the env file for `module` in `environment`.
pub fn render_env_file(
    settings: &Settings,
    module: ModuleId,
    environment: &str,
    timestamp: &str,
) -> String {
    let module = module.effective();
    let mut w = EnvWriter::new();

    w.line(&format!("# Generated environment file for {module} module"));
    w.line(&format!("# Environment: {environment}"));
    w.line(&format!("# Generated at: {timestamp}"));

    render_environment(&mut w, settings, environment);
    render_databases(&mut w, settings, module);
    render_messaging(&mut w, settings, module);
    render_search(&mut w, settings);
    render_monitoring(&mut w, settings);
    render_realtime(&mut w, settings);
    render_security(&mut w, settings);
    render_services(&mut w, settings);
    render_features(&mut w, settings);
    render_module(&mut w, settings, module);

    w.out
}

fn render_environment(w: &mut EnvWriter, settings: &Settings, environment: &str) {
    let env = &settings.environment;
    w.section("ENVIRONMENT");
    w.var("ENVIRONMENT", environment);
    w.var("DEBUG", env.debug);
    w.var("HOT_RELOAD", env.hot_reload);
}

fn render_databases(w: &mut EnvWriter, settings: &Settings, module: ModuleId) {
    let pg = &settings.database.postgresql;
    let purpose = module.database_purpose();
    w.section("DATABASE CONNECTIONS");

    w.group("PostgreSQL");
    w.var("DB_HOST", &pg.host);
    w.var("DB_PORT", pg.port);
    w.var("DB_USER", &pg.username);
    w.var("DB_PASSWORD", pg.password.expose());
    w.var("DB_SSL_MODE", &pg.ssl_mode);
    w.var("DB_MAX_CONNECTIONS", pg.max_connections);
    w.var("DB_CONNECTION_TIMEOUT", pg.connection_timeout);
    w.var("DB_MAX_OPEN_CONNECTIONS", pg.pool.max_open_connections());
    w.var("DB_MAX_IDLE_CONNECTIONS", pg.pool.max_idle_connections());
    w.line("# Module-specific database");
    w.var("DB_NAME", pg.databases.get(purpose));
    w.var("DATABASE_URL", pg.connection_string_for(purpose));

    let mongo = &settings.database.mongodb;
    w.group("MongoDB");
    w.var("MONGODB_HOST", &mongo.host);
    w.var("MONGODB_PORT", mongo.port);
    w.var("MONGODB_USER", &mongo.username);
    w.var("MONGODB_PASSWORD", mongo.password.expose());
    w.var("MONGODB_AUTH_SOURCE", &mongo.auth_source);
    w.var("MONGODB_MAX_POOL_SIZE", mongo.options.max_pool_size());
    w.var("MONGODB_URL", mongo.connection_string("analytics"));

    let redis = &settings.cache.redis;
    w.group("Redis");
    w.var("REDIS_HOST", &redis.host);
    w.var("REDIS_PORT", redis.port);
    w.var("REDIS_PASSWORD", redis.password.expose());
    w.var("REDIS_URL", redis.connection_string("cache"));

    let qdrant = &settings.vector_database.qdrant;
    w.group("Qdrant");
    w.var("QDRANT_HOST", &qdrant.host);
    w.var("QDRANT_HTTP_PORT", qdrant.http_port);
    w.var("QDRANT_GRPC_PORT", qdrant.grpc_port);
    w.var_if_set("QDRANT_API_KEY", qdrant.api_key.expose());
    w.var("QDRANT_URL", qdrant.http_url());
}

fn render_messaging(w: &mut EnvWriter, settings: &Settings, module: ModuleId) {
    let kafka = &settings.message_broker.kafka;
    w.section("MESSAGE BROKERS");

    w.group("Kafka");
    w.var("KAFKA_BROKERS", kafka.broker_list());
    w.var("KAFKA_SECURITY_PROTOCOL", &kafka.security_protocol);
    w.var_if_set("KAFKA_SASL_MECHANISM", &kafka.sasl_mechanism);
    w.var_if_set("KAFKA_SASL_USERNAME", &kafka.sasl_username);
    w.var_if_set("KAFKA_SASL_PASSWORD", kafka.sasl_password.expose());

    let topics = &kafka.topics;
    w.group("Kafka Topics");
    w.var("KAFKA_TOPIC_AUTH", &topics.auth_events);
    w.var("KAFKA_TOPIC_USER", &topics.user_events);
    w.var("KAFKA_TOPIC_BUSINESS", &topics.business_events);
    w.var("KAFKA_TOPIC_SYSTEM", &topics.system_events);
    w.var("KAFKA_TOPIC_AI", &topics.ai_events);
    w.var("KAFKA_TOPIC_NOTIFICATIONS", &topics.notification_events);

    w.group("Module-specific consumer group");
    w.var(
        "KAFKA_CONSUMER_GROUP",
        kafka.consumer_groups.consumer_group_for(module),
    );
}

fn render_search(w: &mut EnvWriter, settings: &Settings) {
    let es = &settings.search.elasticsearch;
    w.section("SEARCH & ANALYTICS");

    w.group("Elasticsearch");
    w.var("ELASTICSEARCH_HOST", &es.host);
    w.var("ELASTICSEARCH_PORT", es.port);
    w.var("ELASTICSEARCH_USERNAME", &es.username);
    w.var("ELASTICSEARCH_PASSWORD", es.password.expose());
    w.var("ELASTICSEARCH_USE_SSL", es.scheme == "https");
    w.var("ELASTICSEARCH_VERIFY_CERTS", es.verify_certs);
    w.var("ELASTICSEARCH_URL", es.authenticated_url());
}

fn render_monitoring(w: &mut EnvWriter, settings: &Settings) {
    let monitoring = &settings.monitoring;
    w.section("MONITORING & OBSERVABILITY");

    let prometheus = &monitoring.prometheus;
    w.group("Prometheus");
    w.var("PROMETHEUS_HOST", &prometheus.host);
    w.var("PROMETHEUS_PORT", prometheus.port);
    w.var(
        "PROMETHEUS_URL",
        format!("http://{}:{}", prometheus.host, prometheus.port),
    );

    let grafana = &monitoring.grafana;
    w.group("Grafana");
    w.var("GRAFANA_HOST", &grafana.host);
    w.var("GRAFANA_PORT", grafana.port);
    w.var("GRAFANA_USERNAME", &grafana.username);
    w.var("GRAFANA_PASSWORD", grafana.password.expose());
    w.var(
        "GRAFANA_URL",
        format!(
            "http://{}:{}@{}:{}",
            grafana.username,
            grafana.password.expose(),
            grafana.host,
            grafana.port
        ),
    );

    let jaeger = &monitoring.jaeger;
    w.group("Jaeger");
    w.var("JAEGER_HOST", &jaeger.host);
    w.var("JAEGER_PORT", jaeger.port);
    w.var("JAEGER_GRPC_PORT", jaeger.grpc_port);
    w.var("JAEGER_HTTP_PORT", jaeger.http_port);
    w.var("JAEGER_AGENT_HOST", &jaeger.agent_host);
    w.var("JAEGER_AGENT_PORT", jaeger.agent_port);
    w.var(
        "JAEGER_ENDPOINT",
        format!("http://{}:{}/api/traces", jaeger.host, jaeger.http_port),
    );

    let logging = &settings.logging;
    w.group("Logging");
    w.var("LOG_LEVEL", &logging.level);
    w.var("LOG_FORMAT", &logging.format);
    w.var("LOG_OUTPUT", &logging.output);
}

fn render_realtime(w: &mut EnvWriter, settings: &Settings) {
    let ws = &settings.realtime.websocket;
    w.section("REAL-TIME COMMUNICATION");

    w.group("WebSocket");
    w.var("WEBSOCKET_HOST", &ws.host);
    w.var("WEBSOCKET_PORT", ws.port);
    w.var("WEBSOCKET_PATH", &ws.path);
    let scheme = if ws.ssl { "https" } else { "http" };
    w.var("WEBSOCKET_URL", format!("{scheme}://{}:{}", ws.host, ws.port));
    w.var("WEBSOCKET_CORS_ORIGINS", ws.cors_origins.join(","));
}

fn render_security(w: &mut EnvWriter, settings: &Settings) {
    let security = &settings.security;
    w.section("SECURITY");

    let jwt = &security.jwt;
    w.group("JWT");
    w.var("JWT_SECRET", jwt.secret.expose());
    w.var("JWT_ACCESS_EXPIRY", jwt.access_expiry);
    w.var("JWT_REFRESH_EXPIRY", jwt.refresh_expiry);
    w.var("JWT_ALGORITHM", &jwt.algorithm);

    let cors = &security.cors;
    w.group("CORS");
    w.var("ALLOWED_ORIGINS", cors.allowed_origins.join(","));
    w.var("ALLOWED_METHODS", cors.allowed_methods.join(","));
    w.var("ALLOWED_HEADERS", cors.allowed_headers.join(","));
    w.var("ALLOW_CREDENTIALS", cors.allow_credentials);

    let rate = &security.rate_limiting;
    w.group("Rate Limiting");
    w.var("RATE_LIMITING_ENABLED", rate.enabled);
    w.var("RATE_LIMIT_RPM", rate.requests_per_minute);
    w.var("RATE_LIMIT_BURST", rate.burst_size);

    let encryption = &security.encryption;
    if !encryption.key.is_empty() {
        w.group("Encryption");
        w.var("ENCRYPTION_KEY", encryption.key.expose());
        w.var("ENCRYPTION_ALGORITHM", &encryption.algorithm);
    }
}

fn render_services(w: &mut EnvWriter, settings: &Settings) {
    w.section("SERVICE DISCOVERY");

    for (name, service) in &settings.services {
        let prefix = name.to_ascii_uppercase();
        w.group(name);
        w.var(&format!("{prefix}_HOST"), &service.host);
        w.port_if_set(&format!("{prefix}_HTTP_PORT"), service.http_port);
        w.port_if_set(&format!("{prefix}_GRPC_PORT"), service.grpc_port);
        w.port_if_set(&format!("{prefix}_PORT"), service.port);
        w.var_if_set(&format!("{prefix}_HEALTH_ENDPOINT"), &service.health_endpoint);
    }
}

fn render_features(w: &mut EnvWriter, settings: &Settings) {
    w.section("FEATURE FLAGS");
    for (flag, enabled) in settings.features.flags() {
        w.var(&format!("FEATURE_{}_ENABLED", flag.to_ascii_uppercase()), enabled);
    }
}

fn render_module(w: &mut EnvWriter, settings: &Settings, module: ModuleId) {
    w.section("MODULE-SPECIFIC CONFIGURATIONS");

    w.group("Module identification");
    w.var("MODULE_NAME", module);
    w.var("SERVICE_NAME", format!("{module}-service"));

    let service = settings.service_for(module);
    if module == ModuleId::Frontend {
        let api = settings.service_for(ModuleId::Auth);
        let ws = &settings.realtime.websocket;
        w.group("Frontend specific");
        w.var("PORT", service.port);
        w.var(
            "NEXT_PUBLIC_API_URL",
            format!("http://{}:{}", api.host, api.http_port),
        );
        w.var(
            "NEXT_PUBLIC_WEBSOCKET_URL",
            format!("{}:{}", ws.host, ws.port),
        );
    } else {
        w.group(&format!("{module} service specific"));
        w.var("GRPC_PORT", service.grpc_port);
        w.var("HTTP_PORT", service.http_port);
    }
}

//! Root route: documentation payload or landing page.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;

use mailgate_core::proxy::{RouteSpec, ROUTES};
use mailgate_types::{CredentialPolicy, IndexMode};

use crate::state::AppState;

const LANDING_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub path: String,
    pub method: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IndexDoc {
    pub name: &'static str,
    pub version: &'static str,
    pub credential_policy: CredentialPolicy,
    pub authentication: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

impl From<&RouteSpec> for EndpointDoc {
    fn from(route: &RouteSpec) -> Self {
        Self { path: route.display_path(), method: route.method, description: route.description }
    }
}

fn authentication_hint(policy: CredentialPolicy) -> &'static str {
    match policy {
        CredentialPolicy::Static => "No client credential needed; the gateway holds the upstream key.",
        CredentialPolicy::PerRequest => "Send your mail API key in the X-API-Key header.",
    }
}

pub fn index_doc(policy: CredentialPolicy) -> IndexDoc {
    IndexDoc {
        name: "mailgate",
        version: env!("CARGO_PKG_VERSION"),
        credential_policy: policy,
        authentication: authentication_hint(policy),
        endpoints: ROUTES.iter().map(EndpointDoc::from).collect(),
    }
}

pub fn render_landing(policy: CredentialPolicy) -> String {
    let rows = ROUTES
        .iter()
        .map(|route| {
            format!(
                "      <tr><td>{}</td><td><code>{}</code></td><td>{}</td></tr>",
                route.method,
                route.display_path(),
                route.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    LANDING_TEMPLATE
        .replace("{{VERSION}}", env!("CARGO_PKG_VERSION"))
        .replace("{{AUTH}}", authentication_hint(policy))
        .replace("{{ROUTES}}", &rows)
}

pub async fn get_index(State(state): State<AppState>) -> Response {
    let config = state.config();
    match config.index_mode {
        IndexMode::Docs => Json(index_doc(config.credential_policy)).into_response(),
        IndexMode::Landing => Html(render_landing(config.credential_policy)).into_response(),
    }
}

//! The one forwarding handler shared by every route in the table.

use axum::extract::rejection::PathRejection;
use axum::extract::{MatchedPath, Path, State};
use axum::Extension;

use mailgate_types::GatewayError;

use crate::error::GatewayRejection;
use crate::proxy::middleware::Credential;
use crate::proxy::routes::UpstreamPath;
use crate::proxy::server::GatewayState;
use crate::proxy::upstream::UpstreamReply;

/// Forward the matched route to the same-shaped upstream path.
///
/// Path parameters arrive percent-decoded and are substituted in template
/// order. A parameter that cannot be decoded is answered with 400 and never
/// forwarded.
pub async fn handle_relay(
    State(state): State<GatewayState>,
    Extension(credential): Extension<Credential>,
    matched: MatchedPath,
    params: Result<Path<Vec<String>>, PathRejection>,
) -> Result<UpstreamReply, GatewayRejection> {
    let params = path_params(params)?;
    let upstream_path = UpstreamPath::from_template(matched.as_str(), &params)?;

    tracing::debug!("[Relay] {} -> {}", matched.as_str(), upstream_path);

    let reply = state.upstream.forward(&upstream_path, credential.expose()).await?;
    Ok(reply)
}

fn path_params(
    params: Result<Path<Vec<String>>, PathRejection>,
) -> Result<Vec<String>, GatewayError> {
    match params {
        Ok(Path(values)) => Ok(values),
        // Routes without placeholders carry no parameters at all.
        Err(PathRejection::MissingPathParams(_)) => Ok(Vec::new()),
        Err(rejection) => {
            tracing::info!("[Relay] Rejected path parameters: {}", rejection.body_text());
            Err(GatewayError::InvalidPathParameter { message: rejection.body_text() })
        },
    }
}

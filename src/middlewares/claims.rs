use crate::StateTrait;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::Instrument;

pub async fn get_claims<S: StateTrait>(
    State(state): State<S>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .and_then(|header| state.jwt().get_claims(header.token()).ok());

    let Some(claims) = claims else {
        return next.run(request).await;
    };

    let span = info_span!(
        "claims",
        user_id = claims.sub.to_string(),
        role = ?claims.role,
    );

    request.extensions_mut().insert(claims);

    next.run(request).instrument(span).await
}

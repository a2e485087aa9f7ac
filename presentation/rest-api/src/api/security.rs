use std::sync::Arc;

use auth::JwtTokenService;
use business::domain::shared::identity::Identity;
use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

/// HS256 bearer token issued by `/auth/login` or `/auth/register`.
///
/// The token service is read from request data, so the app must be built
/// with `.data(Arc<JwtTokenService>)`.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub Identity);

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<Identity> {
    let Some(tokens) = req.data::<Arc<JwtTokenService>>() else {
        tracing::error!("token service is not registered as request data");
        return None;
    };

    match tokens.verify(&bearer.token) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::warn!(error = %e, "bearer token rejected");
            None
        }
    }
}

use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use business::domain::shared::value_objects::UserId;

/// Identity of the caller, taken from the `X-User-Id` header.
///
/// Identity is trusted as sent; verifying it belongs to an upstream gateway.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-User-Id",
    key_in = "header",
    checker = "actor_checker"
)]
pub struct ActorId(pub UserId);

async fn actor_checker(_req: &Request, api_key: ApiKey) -> Option<UserId> {
    let actor = parse_actor(&api_key.key);
    if actor.is_none() {
        tracing::warn!("Rejected request with a blank X-User-Id header");
    }
    actor
}

fn parse_actor(raw: &str) -> Option<UserId> {
    UserId::parse(raw)
}

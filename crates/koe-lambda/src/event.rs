//! Lambda イベントと koe-core エンベロープの相互変換
//!
//! claims は `requestContext.authorizer.jwt.claims` に入ってくる。
//! どの階層が欠けていても anonymous に落ちる（エラーにしない）。

use lambda_http::aws_lambda_events::apigw::ApiGatewayRequestAuthorizer;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt, Response};

use koe_core::app::request::{ConvertEvent, IdentityClaims};
use koe_core::app::response::{ApiResponse, ALLOW_ANY_ORIGIN};

/// Lambda の Request を ConvertEvent に変換
pub fn convert_event(request: &Request) -> ConvertEvent {
    let body = match request.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).ok(),
    };
    let claims = match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV2(context)) => {
            claims_from_authorizer(context.authorizer.as_ref())
        }
        _ => IdentityClaims::absent(),
    };
    ConvertEvent { body, claims }
}

pub(crate) fn claims_from_authorizer(
    authorizer: Option<&ApiGatewayRequestAuthorizer>,
) -> IdentityClaims {
    authorizer
        .and_then(|authorizer| authorizer.jwt.as_ref())
        .map(|jwt| IdentityClaims::new(jwt.claims.clone()))
        .unwrap_or_else(IdentityClaims::absent)
}

/// ApiResponse を Lambda の Response に変換
pub fn render(response: ApiResponse) -> Result<Response<Body>, lambda_http::Error> {
    Response::builder()
        .status(response.status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ANY_ORIGIN)
        .body(Body::Text(response.body.to_string()))
        .map_err(Into::into)
}

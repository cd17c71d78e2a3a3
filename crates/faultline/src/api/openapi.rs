//! OpenAPI document

use faultline_api::responses::{
    EndpointResponse, ErrorResponse, HealthResponse, InnerSuccessResponse, SuccessResponse,
};
use utoipa::OpenApi;

use crate::api::controllers::{v1, v2};
use crate::api::error::ApiError;
use crate::api::system;

#[derive(OpenApi)]
#[openapi(
    info(title = "faultline", description = "Scoped and global failure translation"),
    paths(
        system::health,
        v1::give_me_success,
        v1::give_me_handled_exception,
        v1::give_me_handled_globally_exception,
        v1::give_me_unhandled_exception,
        v2::give_me_success,
        v2::give_me_handled_exception,
        v2::give_me_handled_globally_exception,
        v2::give_me_unhandled_exception,
    ),
    components(schemas(
        SuccessResponse,
        InnerSuccessResponse,
        ErrorResponse,
        EndpointResponse,
        HealthResponse,
        ApiError,
    )),
    tags(
        (name = "system", description = "Daemon status"),
        (name = "v1", description = "Handler with a scoped translator"),
        (name = "v2", description = "Handler relying on global translation only"),
    )
)]
pub struct ApiDoc;

use crate::api;
use crate::services::ClassificationResult;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::info::api_info,
        api::bfhl::process_data,
        api::bfhl::health_check,
    ),
    components(
        schemas(
            api::bfhl::BfhlRequest,
            api::bfhl::BfhlResponse,
            api::bfhl::HealthResponse,
            api::error::ErrorResponse,
            ClassificationResult,
        )
    ),
    tags(
        (name = "bfhl", description = "BFHL token classification API")
    )
)]
pub struct ApiDoc;

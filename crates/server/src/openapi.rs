use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateAdRequest {
    /// At most 32 characters.
    pub title: String,
    pub description: String,
    /// At most 255 characters.
    pub owner: String,
}

#[derive(ToSchema)]
pub struct CreatedAdDoc {
    /// Always `ok`.
    pub status: String,
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: String,
}

#[derive(ToSchema)]
pub struct AdViewDoc {
    pub title: String,
    /// ISO-8601 timestamp assigned at insert.
    pub creation_time: String,
    pub description: String,
    pub owner: String,
}

#[derive(ToSchema)]
pub struct DeletedDoc {
    /// Always `success`.
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ViolationDoc {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    /// Always `error`.
    pub status: String,
    /// A plain message, or a list of violations for rejected payloads.
    #[schema(value_type = Object)]
    pub message: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::market::create,
        crate::routes::market::get,
        crate::routes::market::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreateAdRequest,
            CreatedAdDoc,
            AdViewDoc,
            DeletedDoc,
            ViolationDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "market")
    )
)]
pub struct ApiDoc;

//! OpenAPI document served under /api-docs.

use utoipa::OpenApi;

use crate::auth::dto::{LoginRequest, LoginResponse, SignupRequest};
use crate::error::StatusMessage;
use crate::sports::dto::{CreateSportRequest, Sport, UpdateSportRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sportsfuel API",
        description = "API to manage sports data",
        version = "1.0.0"
    ),
    paths(
        crate::sports::handlers::list_sports,
        crate::sports::handlers::get_sport,
        crate::sports::handlers::create_sport,
        crate::sports::handlers::update_sport,
        crate::sports::handlers::delete_sport,
        crate::auth::handlers::signup,
        crate::auth::handlers::login,
    ),
    components(schemas(
        Sport,
        CreateSportRequest,
        UpdateSportRequest,
        SignupRequest,
        LoginRequest,
        LoginResponse,
        StatusMessage,
    )),
    tags(
        (name = "sports", description = "Sports data management"),
        (name = "auth", description = "User signup and login"),
    )
)]
pub struct ApiDoc;

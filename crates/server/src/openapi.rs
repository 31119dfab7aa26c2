use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CreateEmployeeDoc { pub name: String, pub role: String }

#[derive(ToSchema)]
pub struct UpdateEmployeeDoc { pub name: Option<String>, pub role: Option<String> }

#[derive(ToSchema)]
pub struct EmployeeDoc { pub id: i32, pub name: String, pub role: String }

#[derive(ToSchema)]
pub struct EmployeeListItemDoc { pub id: i32, pub name: String, pub role: String, pub projects: Vec<String> }

#[derive(ToSchema)]
pub struct CreateProjectDoc { pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct UpdateProjectDoc { pub name: Option<String>, pub description: Option<String> }

#[derive(ToSchema)]
pub struct ProjectDoc { pub id: i32, pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct ProjectListItemDoc { pub id: i32, pub name: String, pub description: Option<String>, pub employees: Vec<String> }

#[derive(ToSchema)]
pub struct AssignDoc { pub project_id: i32, pub employee_id: i32 }

#[derive(ToSchema)]
pub struct AssignmentDoc { pub project_id: i32, pub employee_id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::list,
        crate::routes::employees::update,
        crate::routes::employees::patch,
        crate::routes::employees::delete,
        crate::routes::projects::create,
        crate::routes::projects::list,
        crate::routes::projects::update,
        crate::routes::projects::patch,
        crate::routes::projects::delete,
        crate::routes::assignments::assign,
        crate::routes::assignments::list,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            CreateEmployeeDoc,
            UpdateEmployeeDoc,
            EmployeeDoc,
            EmployeeListItemDoc,
            CreateProjectDoc,
            UpdateProjectDoc,
            ProjectDoc,
            ProjectListItemDoc,
            AssignDoc,
            AssignmentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees"),
        (name = "projects"),
        (name = "assignments")
    )
)]
pub struct ApiDoc;

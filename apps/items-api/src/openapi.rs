//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service metadata; operations come from the domain docs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD API for items stored in MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation served at `/api-docs/openapi.json`
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_items::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_operations_are_documented() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Items API");

        let collection = doc.paths.paths.get("/items/").unwrap();
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let member = doc.paths.paths.get("/items/{name}").unwrap();
        assert!(member.get.is_some());
        assert!(member.put.is_some());
        assert!(member.delete.is_some());
    }
}

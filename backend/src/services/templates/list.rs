use super::catalog::TemplateCatalog;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/templates`.
///
/// Returns the full catalog as a JSON array. The catalog is immutable, so
/// this never fails.
pub(crate) async fn process(catalog: web::Data<TemplateCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.all())
}

#[cfg(test)]
mod tests {
    use crate::services::templates::catalog::TemplateCatalog;
    use crate::services::templates::configure_routes;
    use actix_web::{test, web, App};
    use common::model::template::Template;

    #[actix_web::test]
    async fn lists_every_built_in_template() {
        let catalog = web::Data::new(TemplateCatalog::with_defaults());
        let app =
            test::init_service(App::new().app_data(catalog).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let templates: Vec<Template> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(templates.len(), 3);
        assert!(templates.iter().any(|t| t.id == "corporate-169-clean"));
        assert!(templates.iter().all(|t| t.preset.is_object()));
    }
}

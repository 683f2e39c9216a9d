use actix_web::web;

pub mod anonymous_user;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/anonymous_user")
            .service(anonymous_user::get_default)
            .service(anonymous_user::get_by_id),
    );
}

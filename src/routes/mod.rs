pub mod auth;
pub mod health;
pub mod items;
pub mod lists;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::signup)
            .service(auth::login),
    )
    .service(
        web::scope("/lists")
            .service(lists::create_list)
            .service(lists::get_lists)
            .service(lists::share_list)
            .service(lists::delete_list)
            .service(items::create_item)
            .service(items::read_items),
    )
    .service(
        web::scope("/items")
            .service(items::update_item)
            .service(items::delete_item),
    );
}

pub mod auth;
pub mod boards;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        web::scope("/boards")
            .service(boards::get_boards)
            .service(boards::create_board)
            .service(boards::delete_board),
    );
}

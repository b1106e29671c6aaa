use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;

/// Wins as plain text. Unknown players and players without a win
/// both come back as 404 with a body of 0.
pub async fn score(house: web::Data<House>, path: web::Path<String>) -> impl Responder {
    match house.store().score(&path.into_inner()) {
        0 => HttpResponse::NotFound().body("0"),
        wins => HttpResponse::Ok().body(wins.to_string()),
    }
}

pub async fn win(house: web::Data<House>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match house.store().record(&name) {
        Ok(()) => HttpResponse::Accepted().finish(),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn league(house: web::Data<House>) -> impl Responder {
    HttpResponse::Ok().json(house.store().league())
}

pub async fn game(house: web::Data<House>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(house.page().html().to_string())
}

pub async fn enter(house: web::Data<House>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            house.bridge(session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::BadRequest()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

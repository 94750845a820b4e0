use actix_web::{delete, post, web, HttpResponse, Responder};
use uuid::Uuid;

// Restore and permanent destroy have never been wired up: the live product
// only ever exposed the trash listing, and these endpoints answer with an
// empty 200 without touching storage.
//
// TODO: restoring needs an undelete operation on the topic repository before
// these can do anything.

#[post("/api/trash/topics/restore")]
pub async fn restore_trash_topics_handler() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[delete("/api/trash/topics")]
pub async fn destroy_trash_topics_handler() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[post("/api/trash/topics/{topic_id}/restore")]
pub async fn restore_trash_topic_handler(path: web::Path<Uuid>) -> impl Responder {
    let _ = path.into_inner();
    HttpResponse::Ok().finish()
}

#[delete("/api/trash/topics/{topic_id}")]
pub async fn destroy_trash_topic_handler(path: web::Path<Uuid>) -> impl Responder {
    let _ = path.into_inner();
    HttpResponse::Ok().finish()
}

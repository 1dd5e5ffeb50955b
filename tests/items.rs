use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{http::header, test, web, App};
use dotenv::dotenv;
use listshare::models::{TodoItem, TodoList};
use listshare::routes;
use listshare::routes::health;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

struct TestUser {
    token: String,
}

async fn setup_pool() -> Option<PgPool> {
    dotenv().ok();
    if std::env::var("JWT_SECRET").is_err() {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
    }

    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping integration test");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

async fn signup_and_login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> Result<TestUser, String> {
    let req_signup = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(&json!({ "email": email, "password": password }))
        .to_request();
    let resp_signup = test::call_service(app, req_signup).await;
    if !resp_signup.status().is_success() {
        return Err(format!("Failed to sign up: {}", resp_signup.status()));
    }

    let req_login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": email, "password": password }))
        .to_request();
    let resp_login = test::call_service(app, req_login).await;
    if !resp_login.status().is_success() {
        return Err(format!("Failed to log in: {}", resp_login.status()));
    }
    let token_response: listshare::auth::TokenResponse = test::read_body_json(resp_login).await;

    Ok(TestUser {
        token: token_response.access_token,
    })
}

async fn cleanup_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query(
        "DELETE FROM todo_items WHERE list_id IN
         (SELECT id FROM todo_lists WHERE owner_id IN (SELECT id FROM users WHERE email = $1))",
    )
    .bind(email)
    .execute(pool)
    .await;
    let _ = sqlx::query(
        "DELETE FROM collaborators WHERE list_id IN
         (SELECT id FROM todo_lists WHERE owner_id IN (SELECT id FROM users WHERE email = $1))",
    )
    .bind(email)
    .execute(pool)
    .await;
    let _ = sqlx::query(
        "DELETE FROM collaborators WHERE user_id IN (SELECT id FROM users WHERE email = $1)",
    )
    .bind(email)
    .execute(pool)
    .await;
    let _ = sqlx::query(
        "DELETE FROM todo_lists WHERE owner_id IN (SELECT id FROM users WHERE email = $1)",
    )
    .bind(email)
    .execute(pool)
    .await;
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header()
                        .max_age(3600),
                )
                .wrap(Logger::default())
                .service(health::health)
                .service(
                    web::scope("/api")
                        .wrap(listshare::auth::AuthMiddleware)
                        .configure(routes::config),
                ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_item_partial_update() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let app = test_app!(pool);

    let email = "item_patch@example.com";
    cleanup_user(&pool, email).await;

    let user = signup_and_login(&app, email, "patchPw123")
        .await
        .expect("Failed to set up user");

    let req = test::TestRequest::post()
        .uri("/api/lists")
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Patch list" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let list: TodoList = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/lists/{}/items", list.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Original title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let item: TodoItem = test::read_body_json(resp).await;
    assert!(!item.is_complete);

    // Patch only is_complete: title must stay
    let req = test::TestRequest::patch()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "is_complete": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let patched: TodoItem = test::read_body_json(resp).await;
    assert!(patched.is_complete);
    assert_eq!(patched.title, "Original title");

    // Patch only title: completion flag must stay
    let req = test::TestRequest::patch()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Renamed title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let patched: TodoItem = test::read_body_json(resp).await;
    assert_eq!(patched.title, "Renamed title");
    assert!(patched.is_complete);

    // Empty patch changes nothing
    let req = test::TestRequest::patch()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let unchanged: TodoItem = test::read_body_json(resp).await;
    assert_eq!(unchanged.title, "Renamed title");
    assert!(unchanged.is_complete);

    // Empty title in a patch is rejected before the store is touched
    let req = test::TestRequest::patch()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    cleanup_user(&pool, email).await;
}

#[actix_rt::test]
async fn test_item_delete_and_missing_item() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let app = test_app!(pool);

    let email = "item_delete@example.com";
    cleanup_user(&pool, email).await;

    let user = signup_and_login(&app, email, "deletePw123")
        .await
        .expect("Failed to set up user");

    let req = test::TestRequest::post()
        .uri("/api/lists")
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Delete list" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let list: TodoList = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/lists/{}/items", list.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Doomed item" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let item: TodoItem = test::read_body_json(resp).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NO_CONTENT);

    // Deleting again: the item is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/items/{}", item.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    // Patching a never-existing item is also a 404
    let req = test::TestRequest::patch()
        .uri(&format!("/api/items/{}", Uuid::new_v4()))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "is_complete": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    // The list reads back empty
    let req = test::TestRequest::get()
        .uri(&format!("/api/lists/{}/items", list.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let items: Vec<TodoItem> = test::read_body_json(resp).await;
    assert!(items.is_empty());

    cleanup_user(&pool, email).await;
}

#[actix_rt::test]
async fn test_items_keep_insertion_order() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let app = test_app!(pool);

    let email = "item_order@example.com";
    cleanup_user(&pool, email).await;

    let user = signup_and_login(&app, email, "orderPw123")
        .await
        .expect("Failed to set up user");

    let req = test::TestRequest::post()
        .uri("/api/lists")
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .set_json(&json!({ "title": "Ordered list", "type": "checklist" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let list: TodoList = test::read_body_json(resp).await;
    assert_eq!(list.list_type, "checklist");

    let titles = ["first", "second", "third"];
    for title in titles {
        let req = test::TestRequest::post()
            .uri(&format!("/api/lists/{}/items", list.id))
            .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
            .set_json(&json!({ "title": title }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/lists/{}/items", list.id))
        .append_header((header::AUTHORIZATION, format!("Bearer {}", user.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let items: Vec<TodoItem> = test::read_body_json(resp).await;
    let fetched: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(fetched, titles);

    cleanup_user(&pool, email).await;
}

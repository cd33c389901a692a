use axum_test::{TestResponse, TestServer};
use fake::{faker, Fake};
use reading_server::models::view::user::UserView;
use reading_server::routes::auth_routes::AuthSuccessResponse;
use serde_json::json;

pub const TEST_PASSWORD: &str = "some3242paSs#$";

#[allow(dead_code)]
pub async fn register_user(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
) -> TestResponse {
    server
        .post("/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await
}

#[allow(dead_code)]
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/auth/login")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .await
}

// registers a random user and returns its view (id is the full record id)
#[allow(dead_code)]
pub async fn create_fake_register_user(server: &TestServer) -> UserView {
    let username = faker::internet::en::Username().fake::<String>();
    let suffix = (100_000..999_999).fake::<u32>();
    let email = format!("{}_{}@example.com", username.to_lowercase(), suffix);

    let response = register_user(server, &username, &email, TEST_PASSWORD).await;
    response.assert_status_success();
    response.json::<AuthSuccessResponse>().user
}

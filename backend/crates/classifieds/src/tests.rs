//! Router-level tests for the classifieds crate
//! Drives the full HTTP surface against the in-memory repository.

#[cfg(test)]
mod http_tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::ClassifiedsConfig;
    use crate::infra::memory::InMemoryClassifiedsRepository;
    use crate::presentation::router::classifieds_router_generic;

    fn app() -> Router {
        classifieds_router_generic(
            InMemoryClassifiedsRepository::new(),
            ClassifiedsConfig::for_tests(),
        )
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    async fn register(app: &Router, email: &str, password: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/user",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }

    async fn create_advert(app: &Router, auth: &str, title: &str, description: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/advert",
            Some(auth),
            Some(json!({ "title": title, "description": description })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let app = app();

        let a = register(&app, "a@x.com", "p1").await;
        let advert = create_advert(&app, "a@x.com:p1", "Car", "Used").await;
        let advert_uri = format!("/advert/{}", advert["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::GET, &advert_uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["owner"]["email"], "a@x.com");
        assert_eq!(body["owner"]["id"], a["id"]);

        register(&app, "b@x.com", "p2").await;
        let (status, body) = send(
            &app,
            Method::PATCH,
            &advert_uri,
            Some("b@x.com:p2"),
            Some(json!({ "title": "Stolen" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["error"],
            "You do not have permission to edit this advert"
        );

        let (status, body) = send(
            &app,
            Method::PATCH,
            &advert_uri,
            Some("a@x.com:p1"),
            Some(json!({ "description": "Updated" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Car");
        assert_eq!(body["description"], "Updated");
        assert_eq!(body["creation_date"], advert["creation_date"]);

        let user_uri = format!("/user/{}", a["id"].as_str().unwrap());
        let (status, body) = send(&app, Method::DELETE, &user_uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "User and all associated adverts deleted successfully"
        );

        let (status, body) = send(&app, Method::GET, &advert_uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Advert not found");

        let (status, _) = send(&app, Method::GET, &user_uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let app = app();
        let created = register(&app, "a@x.com", "p1").await;
        assert_eq!(created["email"], "a@x.com");
        assert!(created.get("password").is_none());
        assert!(created.get("password_hash").is_none());

        let uri = format!("/user/{}", created["id"].as_str().unwrap());
        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);

        let (status, body) = send(&app, Method::GET, "/user/email/a@x.com", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);

        let (status, body) = send(&app, Method::GET, "/user/email/z@x.com", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_advert_round_trip() {
        let app = app();
        register(&app, "a@x.com", "p1").await;
        let created = create_advert(&app, "a@x.com:p1", "Bike", "Red, 3 gears").await;

        let uri = format!("/advert/{}", created["id"].as_str().unwrap());
        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);
        assert_eq!(body["title"], "Bike");
        assert_eq!(body["description"], "Red, 3 gears");
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let app = app();
        register(&app, "a@x.com", "p1").await;

        for password in ["p1", "different", ""] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/user",
                None,
                Some(json!({ "email": "a@x.com", "password": password })),
            )
            .await;
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body["error"], "User already exists");
        }
    }

    #[tokio::test]
    async fn test_registration_requires_fields() {
        let app = app();

        for body in [json!({ "email": "a@x.com" }), json!({ "password": "p1" }), json!({})] {
            let (status, body) = send(&app, Method::POST, "/user", None, Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Missing email or password");
        }

        let (status, _) = send(
            &app,
            Method::POST,
            "/user",
            None,
            Some(json!({ "email": "not-an-email", "password": "p1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/user")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_created_user_can_authenticate() {
        let app = app();
        for (email, password) in [
            ("a@x.com", "p1"),
            ("first.last@example.co.jp", "with:colons:inside"),
            ("b@x.com", "日本語のパスワード"),
        ] {
            register(&app, email, password).await;
            let auth = format!("{email}:{password}");
            create_advert(&app, &auth, "Car", "Used").await;
        }
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let app = app();
        register(&app, "a@x.com", "p1").await;
        let body = json!({ "title": "Car", "description": "Used" });

        let (wrong_status, wrong_body) = send(
            &app,
            Method::POST,
            "/advert",
            Some("a@x.com:wrong"),
            Some(body.clone()),
        )
        .await;
        let (unknown_status, unknown_body) = send(
            &app,
            Method::POST,
            "/advert",
            Some("ghost@x.com:p1"),
            Some(body),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, unknown_body);
        assert_eq!(wrong_body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_credential_header_errors() {
        let app = app();
        let body = json!({ "title": "Car", "description": "Used" });

        let (status, resp) = send(&app, Method::POST, "/advert", None, Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp["error"], "Authorization header is missing");

        let (status, resp) = send(&app, Method::POST, "/advert", Some("a@x.com"), Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp["error"], "Invalid authorization header");
    }

    #[tokio::test]
    async fn test_advert_requires_fields() {
        let app = app();
        register(&app, "a@x.com", "p1").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/advert",
            Some("a@x.com:p1"),
            Some(json!({ "title": "Car" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields");

        let (status, _) = send(
            &app,
            Method::POST,
            "/advert",
            Some("a@x.com:p1"),
            Some(json!({ "title": "t".repeat(81), "description": "Used" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_advert_patch() {
        let app = app();
        register(&app, "a@x.com", "p1").await;
        let advert = create_advert(&app, "a@x.com:p1", "Car", "Used").await;
        let uri = format!("/advert/{}", advert["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::PATCH, &uri, Some("a@x.com:p1"), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");
    }

    #[tokio::test]
    async fn test_advert_patch_with_only_unknown_keys() {
        let app = app();
        register(&app, "a@x.com", "p1").await;
        let advert = create_advert(&app, "a@x.com:p1", "Car", "Used").await;
        let uri = format!("/advert/{}", advert["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some("a@x.com:p1"),
            Some(json!({ "foo": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");

        let (_, stored) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(stored["title"], "Car");
        assert_eq!(stored["description"], "Used");
    }

    #[tokio::test]
    async fn test_email_without_domain_dot() {
        let app = app();
        let user = register(&app, "admin@localhost", "p1").await;
        assert_eq!(user["email"], "admin@localhost");

        let (status, found) = send(&app, Method::GET, "/user/email/admin@localhost", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["id"], user["id"]);

        let advert = create_advert(&app, "admin@localhost:p1", "Car", "Used").await;
        assert_eq!(advert["owner"]["email"], "admin@localhost");
    }

    #[tokio::test]
    async fn test_only_owner_deletes_advert() {
        let app = app();
        register(&app, "a@x.com", "p1").await;
        register(&app, "b@x.com", "p2").await;
        let advert = create_advert(&app, "a@x.com:p1", "Car", "Used").await;
        let uri = format!("/advert/{}", advert["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::DELETE, &uri, Some("b@x.com:p2"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["error"],
            "You do not have permission to delete this advert"
        );

        let (status, body) = send(&app, Method::DELETE, &uri, Some("a@x.com:p1"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "deleted" }));

        let (status, _) = send(&app, Method::DELETE, &uri, Some("a@x.com:p1"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_email_conflict_keeps_original() {
        let app = app();
        let a = register(&app, "a@x.com", "p1").await;
        register(&app, "b@x.com", "p2").await;
        let uri = format!("/user/{}", a["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            None,
            Some(json!({ "email": "b@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Email already in use");

        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_update_user() {
        let app = app();
        let a = register(&app, "a@x.com", "p1").await;
        let uri = format!("/user/{}", a["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            None,
            Some(json!({ "email": "c@x.com", "password": "p3" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "c@x.com");
        assert_eq!(body["id"], a["id"]);

        create_advert(&app, "c@x.com:p3", "Car", "Used").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/advert",
            Some("a@x.com:p1"),
            Some(json!({ "title": "Car", "description": "Used" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids() {
        let app = app();
        let missing = uuid::Uuid::new_v4();

        for uri in [
            format!("/user/{missing}"),
            "/user/not-a-uuid".to_string(),
            format!("/advert/{missing}"),
            "/advert/42".to_string(),
        ] {
            let (status, _) = send(&app, Method::GET, &uri, None, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }

        let (status, body) = send(&app, Method::DELETE, &format!("/user/{missing}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/user/{missing}"),
            None,
            Some(json!({ "email": "c@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_deleting_user_removes_every_advert() {
        let app = app();
        let a = register(&app, "a@x.com", "p1").await;
        register(&app, "b@x.com", "p2").await;

        let mine = [
            create_advert(&app, "a@x.com:p1", "Car", "Used").await,
            create_advert(&app, "a@x.com:p1", "Bike", "New").await,
        ];
        let theirs = create_advert(&app, "b@x.com:p2", "Sofa", "Comfy").await;

        let uri = format!("/user/{}", a["id"].as_str().unwrap());
        let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);

        for advert in &mine {
            let uri = format!("/advert/{}", advert["id"].as_str().unwrap());
            let (status, _) = send(&app, Method::GET, &uri, None, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        let uri = format!("/advert/{}", theirs["id"].as_str().unwrap());
        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
    }
}

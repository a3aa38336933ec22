mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use common::{fast_config, sample_catalog, TestApp};

fn titles(body: &Value) -> Vec<String> {
    body["workouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new(vec![], fast_config(true));
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "prenatal-fit");
}

#[tokio::test]
async fn test_list_orders_by_intensity() {
    let app = TestApp::new(sample_catalog(), fast_config(true));

    let (status, body) = app.get("/api/workouts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let intensities: Vec<_> = body["workouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["intensity_level"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(intensities, vec!["low", "low", "medium", "medium", "high"]);
}

#[tokio::test]
async fn test_get_single_workout() {
    let app = TestApp::new(sample_catalog(), fast_config(true));
    let workout = app.workouts.all()[2].clone();

    let (status, body) = app.get(&format!("/api/workouts/{}", workout.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workout"]["title"], workout.title);
    assert_eq!(body["workout"]["workout_type"], "pilates");

    let (status, body) = app.get(&format!("/api/workouts/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workout not found");

    let (status, _) = app.get("/api/workouts/12345").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_combines_criteria() {
    let app = TestApp::new(sample_catalog(), fast_config(true));

    let (status, body) = app.get("/api/workouts/filter?intensity=low").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Gentle Prenatal Yoga", "Seated Stretch"]);

    let (_, body) = app.get("/api/workouts/filter?duration=20").await;
    assert_eq!(titles(&body), vec!["Gentle Prenatal Yoga", "Seated Stretch"]);

    let (_, body) = app.get("/api/workouts/filter?type=cardio").await;
    assert_eq!(titles(&body), vec!["Low-Impact Cardio"]);

    let (_, body) = app
        .get("/api/workouts/filter?symptoms=fatigue,weak_in_general")
        .await;
    assert_eq!(
        titles(&body),
        vec!["Seated Stretch", "Low-Impact Cardio", "Power HIIT"]
    );

    let (_, body) = app
        .get("/api/workouts/filter?intensity=medium&symptoms=back_pain")
        .await;
    assert_eq!(titles(&body), vec!["Pilates Core"]);

    let (_, body) = app.get("/api/workouts/filter").await;
    assert_eq!(titles(&body).len(), 5);
}

#[tokio::test]
async fn test_filter_rejects_bad_values() {
    let app = TestApp::new(sample_catalog(), fast_config(true));

    for uri in [
        "/api/workouts/filter?intensity=extreme",
        "/api/workouts/filter?type=zumba",
        "/api/workouts/filter?duration=long",
        "/api/workouts/filter?symptoms=nausea,dizziness",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["success"], false);
    }
}

// Shared fixtures: in-memory repositories, a scripted text generator and a
// router harness.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use prenatal_fit::api::create_routes;
use prenatal_fit::config::RecommendationConfig;
use prenatal_fit::llm::TextGenerator;
use prenatal_fit::models::*;
use prenatal_fit::repositories::{
    CheckInRepository, FavoriteRepository, ProfileRepository, Repositories, WorkoutRepository,
};
use prenatal_fit::services::AppServices;

#[derive(Default)]
pub struct InMemoryWorkouts {
    workouts: Mutex<Vec<Workout>>,
}

impl InMemoryWorkouts {
    pub fn with(workouts: Vec<Workout>) -> Self {
        Self {
            workouts: Mutex::new(workouts),
        }
    }

    pub fn all(&self) -> Vec<Workout> {
        self.workouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkouts {
    async fn list_all(&self) -> Result<Vec<Workout>> {
        let mut workouts = self.all();
        workouts.sort_by(|a, b| {
            a.intensity_level
                .cmp(&b.intensity_level)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(workouts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>> {
        Ok(self.all().into_iter().find(|w| w.id == id))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workout>> {
        Ok(self.all().into_iter().filter(|w| ids.contains(&w.id)).collect())
    }

    async fn filter(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|w| filter.matches(w))
            .collect())
    }

    async fn insert(&self, workout: &NewWorkout) -> Result<Workout> {
        let created = Workout {
            id: Uuid::new_v4(),
            title: workout.title.clone(),
            youtube_url: workout.youtube_url.clone(),
            youtube_id: workout.youtube_id.clone(),
            duration: workout.duration,
            intensity_level: workout.intensity_level,
            workout_type: workout.workout_type,
            description: workout.description.clone(),
            good_for_symptoms: workout.good_for_symptoms.clone(),
            benefits: workout.benefits.clone(),
            trimester_suitability: workout.trimester_suitability.clone(),
            created_at: Utc::now(),
        };
        self.workouts.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub struct InMemoryCheckIns {
    check_ins: Mutex<Vec<CheckIn>>,
    pub fail_writes: Mutex<bool>,
}

impl InMemoryCheckIns {
    pub fn all(&self) -> Vec<CheckIn> {
        self.check_ins.lock().unwrap().clone()
    }

    pub fn push(&self, check_in: CheckIn) {
        self.check_ins.lock().unwrap().push(check_in);
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckIns {
    async fn create(&self, check_in: &NewCheckIn) -> Result<CheckIn> {
        if *self.fail_writes.lock().unwrap() {
            return Err(anyhow!("Failed to insert check-in: database is read-only"));
        }
        // Strictly increasing timestamps keep newest-first ordering stable
        let offset = self.check_ins.lock().unwrap().len() as i64;
        let created = CheckIn {
            id: Uuid::new_v4(),
            user_id: check_in.user_id,
            energy_level: check_in.energy_level,
            symptoms: check_in.symptoms.clone(),
            moods: check_in.moods.clone(),
            preferred_workout_type: check_in.preferred_workout_type,
            recommended_workout_ids: check_in.recommended_workout_ids.clone(),
            gemini_reasoning: Some(check_in.gemini_reasoning.clone()),
            created_at: Utc::now() + Duration::milliseconds(offset),
        };
        self.push(created.clone());
        Ok(created)
    }

    async fn list_by_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<CheckIn>> {
        let mut check_ins: Vec<_> = self
            .all()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect();
        check_ins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        check_ins.truncate(limit as usize);
        Ok(check_ins)
    }
}

pub struct InMemoryFavorites {
    favorites: Mutex<Vec<Favorite>>,
    workouts: Arc<InMemoryWorkouts>,
}

impl InMemoryFavorites {
    pub fn new(workouts: Arc<InMemoryWorkouts>) -> Self {
        Self {
            favorites: Mutex::new(Vec::new()),
            workouts,
        }
    }

    pub fn count(&self) -> usize {
        self.favorites.lock().unwrap().len()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavorites {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteWithWorkout>> {
        let catalog = self.workouts.all();
        let mut favorites: Vec<_> = self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| {
                let workout = catalog.iter().find(|w| w.id == f.workout_id)?.clone();
                Some(FavoriteWithWorkout {
                    id: f.id,
                    created_at: f.created_at,
                    workouts: workout.into(),
                })
            })
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(favorites)
    }

    async fn insert_if_absent(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Favorite>> {
        let mut favorites = self.favorites.lock().unwrap();
        if favorites
            .iter()
            .any(|f| f.user_id == user_id && f.workout_id == workout_id)
        {
            return Ok(None);
        }
        let favorite = Favorite {
            id: Uuid::new_v4(),
            user_id,
            workout_id,
            created_at: Utc::now() + Duration::milliseconds(favorites.len() as i64),
        };
        favorites.push(favorite.clone());
        Ok(Some(favorite))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let mut favorites = self.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        Ok((before - favorites.len()) as u64)
    }

    async fn delete_by_user_and_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<u64> {
        let mut favorites = self.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|f| !(f.user_id == user_id && f.workout_id == workout_id));
        Ok((before - favorites.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<Vec<UserProfile>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn create(&self, profile: &NewUserProfile) -> Result<Option<UserProfile>> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.user_id == profile.user_id) {
            return Ok(None);
        }
        let now = Utc::now();
        let created = UserProfile {
            id: Uuid::new_v4(),
            user_id: profile.user_id,
            display_name: profile.display_name.clone(),
            preferred_workout_types: profile.preferred_workout_types.clone(),
            preferred_duration: profile.preferred_duration,
            created_at: now,
            updated_at: now,
        };
        profiles.push(created.clone());
        Ok(Some(created))
    }

    async fn update(
        &self,
        user_id: Uuid,
        patch: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.iter_mut().find(|p| p.user_id == user_id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.display_name {
            profile.display_name = name.clone();
        }
        if let Some(types) = &patch.preferred_workout_types {
            profile.preferred_workout_types = types.clone();
        }
        if let Some(duration) = patch.preferred_duration {
            profile.preferred_duration = duration;
        }
        profile.updated_at = Utc::now();
        Ok(Some(profile.clone()))
    }
}

/// Replays queued answers in order; errors once the queue runs dry
#[derive(Default)]
pub struct ScriptedGenerator {
    answers: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn answer(&self, text: impl Into<String>) {
        self.answers.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.answers.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.answers.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("Gemini server error: no scripted answer")),
        }
    }
}

pub fn workout(
    title: &str,
    intensity: IntensityLevel,
    workout_type: WorkoutType,
    duration: i32,
    symptoms: Vec<SymptomType>,
) -> Workout {
    let youtube_id = title.to_lowercase().replace(' ', "-");
    Workout {
        id: Uuid::new_v4(),
        title: title.to_string(),
        youtube_url: format!("https://www.youtube.com/watch?v={}", youtube_id),
        youtube_id,
        duration,
        intensity_level: intensity,
        workout_type,
        description: format!("{} for the first trimester", title),
        good_for_symptoms: symptoms,
        benefits: Some(vec!["Feels good".to_string()]),
        trimester_suitability: Some(vec![1, 2, 3]),
        created_at: Utc::now(),
    }
}

pub fn sample_catalog() -> Vec<Workout> {
    vec![
        workout(
            "Gentle Prenatal Yoga",
            IntensityLevel::Low,
            WorkoutType::Yoga,
            20,
            vec![SymptomType::Nausea, SymptomType::BackPain],
        ),
        workout(
            "Seated Stretch",
            IntensityLevel::Low,
            WorkoutType::Stretching,
            10,
            vec![SymptomType::Nausea, SymptomType::Fatigue],
        ),
        workout(
            "Pilates Core",
            IntensityLevel::Medium,
            WorkoutType::Pilates,
            25,
            vec![SymptomType::BackPain],
        ),
        workout(
            "Low-Impact Cardio",
            IntensityLevel::Medium,
            WorkoutType::Cardio,
            30,
            vec![SymptomType::Fatigue],
        ),
        workout(
            "Power HIIT",
            IntensityLevel::High,
            WorkoutType::Hiit,
            30,
            vec![SymptomType::WeakInGeneral],
        ),
    ]
}

/// Model answer recommending `picks` in the given order
pub fn model_answer(picks: &[&Workout], message: &str) -> String {
    serde_json::json!({
        "recommendations": picks.iter().map(|w| serde_json::json!({
            "workout_id": w.id,
            "title": w.title,
            "reasoning": format!("{} suits how you feel today.", w.title),
        })).collect::<Vec<_>>(),
        "overall_message": message,
    })
    .to_string()
}

pub fn fast_config(fallback_enabled: bool) -> RecommendationConfig {
    RecommendationConfig {
        max_attempts: 2,
        initial_backoff_ms: 1,
        max_backoff_ms: 2,
        fallback_enabled,
        max_prompt_workouts: 100,
    }
}

pub struct TestApp {
    pub router: Router,
    pub workouts: Arc<InMemoryWorkouts>,
    pub check_ins: Arc<InMemoryCheckIns>,
    pub favorites: Arc<InMemoryFavorites>,
    pub profiles: Arc<InMemoryProfiles>,
    pub generator: Arc<ScriptedGenerator>,
}

impl TestApp {
    pub fn new(catalog: Vec<Workout>, config: RecommendationConfig) -> Self {
        let workouts = Arc::new(InMemoryWorkouts::with(catalog));
        let check_ins = Arc::new(InMemoryCheckIns::default());
        let favorites = Arc::new(InMemoryFavorites::new(workouts.clone()));
        let profiles = Arc::new(InMemoryProfiles::default());
        let generator = Arc::new(ScriptedGenerator::default());

        let repos = Repositories {
            workouts: workouts.clone(),
            check_ins: check_ins.clone(),
            favorites: favorites.clone(),
            profiles: profiles.clone(),
        };
        let services = AppServices::new(repos, generator.clone(), config);

        Self {
            router: create_routes(services),
            workouts,
            check_ins,
            favorites,
            profiles,
            generator,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");

        let request = match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}

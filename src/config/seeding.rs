use anyhow::Result;
use std::sync::Arc;

use crate::models::*;
use crate::repositories::WorkoutRepository;

/// Populates an empty catalog with a handful of first-trimester workouts
pub struct DatabaseSeeder {
    workouts: Arc<dyn WorkoutRepository>,
}

impl DatabaseSeeder {
    pub fn new(workouts: Arc<dyn WorkoutRepository>) -> Self {
        Self { workouts }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        let inserted = self.seed_workouts().await?;

        tracing::info!("Database seeding completed ({} workouts inserted)", inserted);
        Ok(())
    }

    /// Returns how many workouts were inserted. A non-empty catalog is left alone.
    pub async fn seed_workouts(&self) -> Result<usize> {
        if !self.workouts.list_all().await?.is_empty() {
            tracing::info!("Workout catalog already populated, skipping seed");
            return Ok(0);
        }

        let demo_workouts = demo_workouts();
        let count = demo_workouts.len();
        for workout in demo_workouts {
            let created = self.workouts.insert(&workout).await?;
            tracing::debug!("Seeded workout {} ({})", created.title, created.id);
        }

        Ok(count)
    }
}

fn video(youtube_id: &str) -> (String, String) {
    (
        format!("https://www.youtube.com/watch?v={}", youtube_id),
        youtube_id.to_string(),
    )
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

pub fn demo_workouts() -> Vec<NewWorkout> {
    let entries = [
        (
            "Gentle Prenatal Yoga Flow",
            "prenatalyoga1",
            20,
            IntensityLevel::Low,
            WorkoutType::Yoga,
            "A slow, breath-led flow that opens the hips and eases tension in the lower back.",
            vec![SymptomType::BackPain, SymptomType::Fatigue, SymptomType::Headaches],
            strings(&["Reduces stress", "Improves flexibility", "Supports better sleep"]),
        ),
        (
            "Seated Stretch for Nausea Days",
            "seatedstretch2",
            10,
            IntensityLevel::Low,
            WorkoutType::Stretching,
            "Chair-based stretches for days when standing feels like too much.",
            vec![
                SymptomType::Nausea,
                SymptomType::MorningSickness,
                SymptomType::Bloating,
            ],
            strings(&["Gentle on the stomach", "Relieves stiffness"]),
        ),
        (
            "Prenatal Pilates Core Basics",
            "pilatescore3",
            25,
            IntensityLevel::Medium,
            WorkoutType::Pilates,
            "Pelvic floor and deep core activation with modified Pilates moves.",
            vec![SymptomType::BackPain, SymptomType::Weakness, SymptomType::StomachPain],
            strings(&["Strengthens the pelvic floor", "Improves posture"]),
        ),
        (
            "Low-Impact Pregnancy Cardio",
            "lowimpactcardio4",
            20,
            IntensityLevel::Medium,
            WorkoutType::Cardio,
            "Steady marching, step touches and arm swings to lift energy without jumping.",
            vec![SymptomType::Fatigue, SymptomType::WeakInGeneral],
            strings(&["Boosts circulation", "Lifts mood"]),
        ),
        (
            "Lower Body Strength for Pregnancy",
            "legsstrength5",
            30,
            IntensityLevel::Medium,
            WorkoutType::Legs,
            "Squats, lunges and glute bridges that build leg strength for the months ahead.",
            vec![SymptomType::WeakLegs, SymptomType::SciaticaPain],
            strings(&["Builds leg strength", "Supports balance"]),
        ),
        (
            "First Trimester Full Body Strength",
            "fullbody6",
            35,
            IntensityLevel::High,
            WorkoutType::StrengthTraining,
            "Light dumbbell circuit covering arms, legs and core for energetic days.",
            vec![SymptomType::WeakArm, SymptomType::WeakLegs, SymptomType::WeakInGeneral],
            strings(&["Maintains muscle tone", "Builds stamina"]),
        ),
    ];

    entries
        .into_iter()
        .map(
            |(title, youtube_id, duration, intensity, workout_type, description, symptoms, benefits)| {
                let (youtube_url, youtube_id) = video(youtube_id);
                NewWorkout {
                    title: title.to_string(),
                    youtube_url,
                    youtube_id,
                    duration,
                    intensity_level: intensity,
                    workout_type,
                    description: description.to_string(),
                    good_for_symptoms: symptoms,
                    benefits,
                    trimester_suitability: Some(vec![1, 2, 3]),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockWorkoutRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn stored(workout: &NewWorkout) -> Workout {
        Workout {
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
        }
    }

    #[test]
    fn test_demo_catalog_covers_every_intensity() {
        let workouts = demo_workouts();
        for level in IntensityLevel::ALL {
            assert!(workouts.iter().any(|w| w.intensity_level == level));
        }
    }

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let mut repo = MockWorkoutRepository::new();
        let existing = stored(&demo_workouts()[0]);
        repo.expect_list_all()
            .returning(move || Ok(vec![existing.clone()]));
        repo.expect_insert().never();

        let seeder = DatabaseSeeder::new(Arc::new(repo));
        assert_eq!(seeder.seed_workouts().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_inserts_into_empty_catalog() {
        let mut repo = MockWorkoutRepository::new();
        repo.expect_list_all().returning(|| Ok(vec![]));
        repo.expect_insert()
            .times(demo_workouts().len())
            .returning(|w| Ok(stored(w)));

        let seeder = DatabaseSeeder::new(Arc::new(repo));
        assert_eq!(seeder.seed_workouts().await.unwrap(), 6);
    }
}

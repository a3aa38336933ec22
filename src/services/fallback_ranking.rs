//! Deterministic, rule-based workout ranking.
//!
//! Mirrors the rules the model is given in the prompt. Used to preselect
//! prompt candidates from a large catalog and to answer when the model's
//! output cannot be used.

use crate::models::{
    CheckInState, IntensityLevel, ModelRecommendation, MoodType, RecommendationOutput,
    RecommendationSource, Workout, WorkoutType,
};

const PREFERRED_TYPE_BONUS: i32 = 6;
const SYMPTOM_MATCH_BONUS: i32 = 2;
const MOOD_MATCH_BONUS: i32 = 2;
const TRIMESTER_PENALTY: i32 = 20;

const CALMING_TYPES: [WorkoutType; 3] =
    [WorkoutType::Yoga, WorkoutType::Stretching, WorkoutType::Pilates];
const ENERGIZING_TYPES: [WorkoutType; 3] = [
    WorkoutType::Cardio,
    WorkoutType::StrengthTraining,
    WorkoutType::Hiit,
];

fn intensity_score(energy_level: i16, intensity: IntensityLevel) -> i32 {
    use IntensityLevel::*;
    match (energy_level, intensity) {
        (..=2, Low) => 4,
        (..=2, Medium) => 0,
        (..=2, High) => -6,
        (3, Low) => 1,
        (3, Medium) => 4,
        (3, High) => -1,
        (_, Low) => 0,
        (_, Medium) => 3,
        (_, High) => 3,
    }
}

fn wants_calm(state: &CheckInState) -> bool {
    state.moods.iter().any(MoodType::wants_calm)
}

fn wants_energy(state: &CheckInState) -> bool {
    state.moods.iter().any(MoodType::wants_energy)
}

/// Higher is better
pub fn score_workout(state: &CheckInState, workout: &Workout) -> i32 {
    let mut score = intensity_score(state.energy_level, workout.intensity_level);

    score += SYMPTOM_MATCH_BONUS
        * state
            .symptoms
            .iter()
            .filter(|s| workout.helps_with(**s))
            .count() as i32;

    if wants_calm(state) && CALMING_TYPES.contains(&workout.workout_type) {
        score += MOOD_MATCH_BONUS;
    }
    if wants_energy(state) && ENERGIZING_TYPES.contains(&workout.workout_type) {
        score += MOOD_MATCH_BONUS;
    }
    if state.moods.contains(&MoodType::Lazy) && workout.intensity_level == IntensityLevel::Low {
        score += 1;
    }

    if state.preferred_workout_type == Some(workout.workout_type) {
        score += PREFERRED_TYPE_BONUS;
    }

    if !workout.suits_first_trimester() {
        score -= TRIMESTER_PENALTY;
    }

    score
}

/// Whole catalog, best first. Ties break on shorter duration, then title, then id.
pub fn rank_workouts<'a>(state: &CheckInState, catalog: &'a [Workout]) -> Vec<&'a Workout> {
    let mut scored: Vec<(i32, &Workout)> = catalog
        .iter()
        .map(|w| (score_workout(state, w), w))
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| a.duration.cmp(&b.duration))
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });

    scored.into_iter().map(|(_, w)| w).collect()
}

/// Keep the `limit` best candidates, in catalog order
pub fn preselect(state: &CheckInState, catalog: &[Workout], limit: usize) -> Vec<Workout> {
    if catalog.len() <= limit {
        return catalog.to_vec();
    }

    let keep: Vec<_> = rank_workouts(state, catalog)
        .into_iter()
        .take(limit)
        .map(|w| w.id)
        .collect();

    catalog
        .iter()
        .filter(|w| keep.contains(&w.id))
        .cloned()
        .collect()
}

fn describe(state: &CheckInState, workout: &Workout) -> String {
    let mut reasons = Vec::new();

    let intensity = workout.intensity_level.as_str();
    let energy_fit = intensity_score(state.energy_level, workout.intensity_level);
    if energy_fit > 0 {
        reasons.push(format!(
            "its {} intensity suits your energy level of {}/5",
            intensity, state.energy_level
        ));
    }

    let helped: Vec<String> = state
        .symptoms
        .iter()
        .filter(|s| workout.helps_with(**s))
        .map(|s| s.as_str().replace('_', " "))
        .collect();
    if !helped.is_empty() {
        reasons.push(format!("it can help with {}", helped.join(", ")));
    }

    if wants_calm(state) && CALMING_TYPES.contains(&workout.workout_type) {
        reasons.push("its calm pace can help settle your mood".to_string());
    } else if wants_energy(state) && ENERGIZING_TYPES.contains(&workout.workout_type) {
        reasons.push("it puts your good energy to use".to_string());
    }

    if state.preferred_workout_type == Some(workout.workout_type) {
        reasons.push(format!(
            "it is the {} session you asked for",
            workout.workout_type.label()
        ));
    }

    let mut text = format!(
        "{} is a {}-minute {} workout.",
        workout.title,
        workout.duration,
        workout.workout_type.label()
    );
    if reasons.is_empty() {
        text.push_str(" It is a gentle, first-trimester friendly option for today.");
    } else {
        text.push_str(&format!(" We picked it because {}.", reasons.join(" and ")));
    }
    text
}

fn overall_message(energy_level: i16) -> String {
    match energy_level {
        ..=2 => "Your energy is low today, so we kept things gentle. Listen to your body and rest whenever you need to.",
        3 => "You have a steady amount of energy today. These balanced sessions should keep you moving comfortably.",
        _ => "You're feeling energized today! Enjoy moving, stay hydrated and keep the effort comfortable.",
    }
    .to_string()
}

/// Build a complete recommendation set without the model
pub fn fallback_recommendations(
    state: &CheckInState,
    catalog: &[Workout],
    count: usize,
) -> RecommendationOutput {
    let recommendations = rank_workouts(state, catalog)
        .into_iter()
        .take(count)
        .map(|workout| ModelRecommendation {
            workout_id: workout.id,
            title: workout.title.clone(),
            reasoning: describe(state, workout),
        })
        .collect();

    RecommendationOutput {
        recommendations,
        overall_message: overall_message(state.energy_level),
        source: RecommendationSource::Fallback,
    }
}

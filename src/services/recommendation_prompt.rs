use anyhow::{Context, Result};
use std::fmt::Write;

use crate::models::{CheckInState, Workout};

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn response_template(count: usize) -> String {
    let entry = r#"    {
      "workout_id": "uuid-here",
      "title": "workout title",
      "reasoning": "why this workout is perfect for them (2-3 sentences)"
    }"#;
    let entries = vec![entry; count].join(",\n");

    format!(
        "{{\n  \"recommendations\": [\n{}\n  ],\n  \"overall_message\": \"A supportive, encouraging message for the user (2-3 sentences)\"\n}}",
        entries
    )
}

/// Prompt asking the model for the `count` best workouts out of `catalog`
pub fn build_recommendation_prompt(
    state: &CheckInState,
    catalog: &[Workout],
    count: usize,
) -> Result<String> {
    let catalog_json =
        serde_json::to_string_pretty(catalog).context("Failed to serialize workout catalog")?;

    let mut prompt = String::from(
        "You are a certified prenatal fitness expert helping a pregnant woman in her first trimester find safe workout videos.\n\n",
    );

    prompt.push_str("User's Current State:\n");
    writeln!(
        prompt,
        "- Energy Level: {}/5 (1=very low, 5=very high)",
        state.energy_level
    )?;
    writeln!(prompt, "- Symptoms: {}", join(&state.symptoms))?;
    writeln!(prompt, "- Moods: {}", join(&state.moods))?;
    if let Some(preferred) = state.preferred_workout_type {
        writeln!(prompt, "- Preferred Workout Type: {}", preferred)?;
    }

    write!(
        prompt,
        "\nAvailable Workouts (JSON):\n{}\n\n\
         Based on the user's energy level, symptoms, and moods, recommend the TOP {} most suitable workouts from the list above.\n\n\
         Consider:\n\
         1. Energy level: Low energy (1-2) → low intensity, Medium (3) → medium intensity, High (4-5) → medium/high intensity\n\
         2. Symptoms: Match workouts that specifically help with their symptoms\n\
         3. Moods: If anxious/fear → calming yoga/stretching, If energetic/productive → higher intensity\n\
         4. Preferred workout type: Prioritize if specified\n\
         5. Safety: Always prioritize first-trimester safety\n\n\
         Only use workout_id values that appear in the list above, and do not repeat a workout.\n\n\
         Respond in this EXACT JSON format (no markdown, just valid JSON):\n{}",
        catalog_json,
        count,
        response_template(count)
    )?;

    Ok(prompt)
}

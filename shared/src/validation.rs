//! Input validation functions
//!
//! Validators return `Err(message)` with a user-facing message; callers
//! attach the field name. Ranges are deliberately wide and only exclude
//! values no real person has.

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be positive".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age and convert it to whole years
/// Valid range: 1-150 years
pub fn validate_age_years(age: f64) -> Result<u32, String> {
    if age.is_nan() || age.is_infinite() {
        return Err("Age must be a valid number".to_string());
    }
    if age.fract() != 0.0 {
        return Err("Age must be a whole number of years".to_string());
    }
    if age <= 0.0 {
        return Err("Age must be positive".to_string());
    }
    if age > 150.0 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(age as u32)
}

/// Validate body fat percentage, exclusive of 0 and 100
pub fn validate_body_fat_percent(body_fat: f64) -> Result<(), String> {
    if body_fat.is_nan() || body_fat.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if body_fat <= 0.0 || body_fat >= 100.0 {
        return Err("Body fat must be between 0 and 100 percent".to_string());
    }
    Ok(())
}

/// Map wire field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "height" => "Height",
        "age" => "Age",
        "gender" => "Gender",
        "activityLevel" => "Activity Level",
        "healthGoal" => "Health Goal",
        "bodyFat" => "Body Fat",
        "formula" => "Formula",
        "targetCalories" => "Daily Calorie Target",
        _ => field_name,
    }
}

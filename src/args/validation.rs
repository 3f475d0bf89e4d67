use golf_stats_core::model::StatsMode;
use golf_stats_core::stats::HandicapConfig;
use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if any of the `;`-separated files is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    for file in file.split(';') {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

fn read_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid prefill document
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let json = read_json(file)?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the prefill format
/// format we expect is this:
/// { "courses": [{ "name": "Course", "tees": [{ "name": "White", "holes": 18, "par": 72, "rating": 71.2, "slope": 125 }, ...] }, ...]
/// , "rounds": [{ "user_id": <int>, "course": "Course", "tee": "White", "date": "2025-05-01", "holes": 18, "score": 88, ...
///   , "hole_scores": [{ "hole_number": 1, "par": 4, "score": 5, ... }, ...] }, ...]
/// }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    };
    let expected_keys = ["courses", "rounds"];
    for key in obj.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "The json file is not in the correct format. Expected keys: {expected_keys:?}"
            ));
        }
    }
    for key in expected_keys {
        if !obj.get(key).is_some_and(Value::is_array) {
            return Err(format!(
                "The json key {key} is not in the correct format. Expected an array."
            ));
        }
    }

    for course in json["courses"].as_array().into_iter().flatten() {
        if !course["name"].is_string() {
            return Err(
                "The json key courses.name is not in the correct format. Expected a string."
                    .to_string(),
            );
        }
        if !course["tees"].is_array() {
            return Err(
                "The json key courses.tees is not in the correct format. Expected an array."
                    .to_string(),
            );
        }
    }

    for round in json["rounds"].as_array().into_iter().flatten() {
        for key in ["user_id", "holes"] {
            if !round[key].is_i64() {
                return Err(format!(
                    "The json key rounds.{key} is not in the correct format. Expected a number."
                ));
            }
        }
        for key in ["course", "tee", "date"] {
            if !round[key].is_string() {
                return Err(format!(
                    "The json key rounds.{key} is not in the correct format. Expected a string."
                ));
            }
        }
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or the table fails validation
pub fn check_handicap_table(file: &str) -> Result<HandicapConfig, String> {
    let json = read_json(file)?;
    let config: HandicapConfig = serde_json::from_value(json)
        .map_err(|e| format!("The handicap table '{file}' is not in the correct format: {e}"))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// # Errors
///
/// Will return `Err` for anything other than `9`, `18` or `combined`
pub fn parse_mode(mode: &str) -> Result<StatsMode, String> {
    mode.parse().map_err(|e: golf_stats_core::CoreError| e.to_string())
}

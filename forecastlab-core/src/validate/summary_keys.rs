use super::ValidationError;
use crate::data::summary::json_kind;
use crate::domain::SummaryRecord;

/// Every required top-level key must be present; the first absent one is reported.
pub fn require_keys<S: AsRef<str>>(record: &SummaryRecord, keys: &[S]) -> Result<(), ValidationError> {
    match keys.iter().find(|k| !record.contains_key(k.as_ref())) {
        None => Ok(()),
        Some(key) => Err(ValidationError::MissingKey {
            artifact: record.path.clone(),
            key: key.as_ref().to_string(),
        }),
    }
}

/// The object under `field` must have, for each model name, at least one
/// key containing that name (case-sensitive substring).
pub fn require_sub_record_models<S: AsRef<str>>(
    record: &SummaryRecord,
    field: &str,
    models: &[S],
) -> Result<(), ValidationError> {
    let value = record.get(field).ok_or_else(|| ValidationError::MissingKey {
        artifact: record.path.clone(),
        key: field.to_string(),
    })?;
    let sub = value.as_object().ok_or_else(|| ValidationError::NotASubRecord {
        artifact: record.path.clone(),
        key: field.to_string(),
        found: json_kind(value),
    })?;

    for model in models {
        let model = model.as_ref();
        if !sub.keys().any(|k| k.contains(model)) {
            return Err(ValidationError::MissingModel {
                artifact: record.path.clone(),
                field: field.to_string(),
                model: model.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const TASK2_KEYS: [&str; 4] = ["arima_order", "lstm_window", "metrics", "best_model_by_rmse"];
    const MODELS: [&str; 2] = ["ARIMA", "LSTM"];

    fn record(value: Value) -> SummaryRecord {
        let Value::Object(fields) = value else {
            panic!("fixture must be an object")
        };
        SummaryRecord::new("task2_stats.json", fields)
    }

    fn complete() -> SummaryRecord {
        record(json!({
            "arima_order": [2, 1, 2],
            "lstm_window": 60,
            "metrics": {
                "ARIMA(2,1,2)": {"MAE": 18.1, "RMSE": 24.0, "MAPE": 6.2},
                "LSTM": {"MAE": 12.4, "RMSE": 16.9, "MAPE": 4.1}
            },
            "best_model_by_rmse": "LSTM"
        }))
    }

    #[test]
    fn test_complete_record_passes() {
        let rec = complete();
        assert_eq!(require_keys(&rec, &TASK2_KEYS), Ok(()));
        assert_eq!(require_sub_record_models(&rec, "metrics", &MODELS), Ok(()));
    }

    #[test]
    fn test_missing_top_level_key() {
        let rec = record(json!({"arima_order": [1, 1, 1], "metrics": {}}));
        let err = require_keys(&rec, &TASK2_KEYS).unwrap_err();
        assert_eq!(err.to_string(), "Missing key in task2_stats.json: lstm_window");
    }

    #[test]
    fn test_extra_keys_are_fine() {
        let mut rec = complete();
        rec.fields.insert("notes".into(), json!("extra"));
        assert_eq!(require_keys(&rec, &TASK2_KEYS), Ok(()));
    }

    #[test]
    fn test_metrics_missing_a_model() {
        let rec = record(json!({"metrics": {"ARIMA(1,1,1)": {}, "Naive": {}}}));
        let err = require_sub_record_models(&rec, "metrics", &MODELS).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingModel {
                artifact: "task2_stats.json".into(),
                field: "metrics".into(),
                model: "LSTM".into(),
            }
        );
        assert_eq!(err.to_string(), "task2_stats.json: LSTM metrics missing");
    }

    #[test]
    fn test_model_match_is_case_sensitive_substring() {
        let rec = record(json!({"metrics": {"auto_ARIMA": {}, "lstm": {}}}));
        assert!(require_sub_record_models(&rec, "metrics", &["ARIMA"]).is_ok());
        assert!(require_sub_record_models(&rec, "metrics", &["LSTM"]).is_err());
    }

    #[test]
    fn test_metrics_not_an_object() {
        let rec = record(json!({"metrics": [1, 2]}));
        assert!(matches!(
            require_sub_record_models(&rec, "metrics", &MODELS),
            Err(ValidationError::NotASubRecord {
                found: "an array",
                ..
            })
        ));
    }

    #[test]
    fn test_metrics_absent() {
        let rec = record(json!({}));
        assert!(matches!(
            require_sub_record_models(&rec, "metrics", &MODELS),
            Err(ValidationError::MissingKey { .. })
        ));
    }
}

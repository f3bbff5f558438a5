#[cfg(test)]
mod tests {
    use crate::errors::internal::{
        DatabaseError, InternalError, NarrativeError, RecordError, TokenError, Violations,
    };
    use sea_orm::DbErr;

    #[test]
    fn test_database_helper_keeps_operation_name() {
        let err = InternalError::database("count_cadets", DbErr::Custom("boom".to_string()));
        match &err {
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                assert_eq!(operation, "count_cadets");
            }
            _ => panic!("Expected Database error"),
        }
        assert!(err.to_string().contains("count_cadets"));
    }

    #[test]
    fn test_not_found_helper_builds_record_error() {
        let err = InternalError::not_found("Application", 9);
        assert!(matches!(
            err,
            InternalError::Record(RecordError::NotFound { entity: "Application", .. })
        ));
        assert_eq!(err.to_string(), "Application not found: 9");
    }

    #[test]
    fn test_domain_errors_are_transparent() {
        let err: InternalError = TokenError::invalid("bad signature").into();
        assert_eq!(err.to_string(), "Token is invalid: bad signature");

        let err: InternalError = NarrativeError::NotConfigured.into();
        assert!(err.to_string().contains("NARRATIVE_API_KEY"));
    }

    #[test]
    fn test_violations_collect_all_failures() {
        let mut violations = Violations::new();
        violations
            .not_blank("  ", "first_name")
            .percentage(Some(101.0), "fitness_progress")
            .percentage(Some(100.0), "academic_progress")
            .non_negative(Some(-1), "service_hours")
            .non_negative(None, "class_number");

        let err = violations.into_result().unwrap_err();
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "fitness_progress", "service_hours"]);
    }

    #[test]
    fn test_validation_error_lists_each_field() {
        let mut violations = Violations::new();
        violations.not_blank("", "last_name").non_negative(Some(-3), "class_number");

        let err: InternalError = violations.into_result().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Validation failed: last_name: must not be empty, class_number: must not be negative"
        );
    }

    #[test]
    fn test_empty_violations_pass() {
        assert!(Violations::new().into_result().is_ok());
    }
}

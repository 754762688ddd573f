#[cfg(test)]
mod tests {
    use super::super::dto::{
        ModeValueDto, ServiceResponseDto, SettingsDocumentDto, UserDto, UsersQuery,
    };
    use super::super::response::rejected;
    use chrono::{TimeZone, Utc};
    use user_settings_sdk::models::{SettingsDocument, User};
    use user_settings_sdk::response::ServiceResponse;

    #[test]
    fn test_settings_to_dto_conversion() {
        let dto: SettingsDocumentDto = SettingsDocument::default().into();

        assert!(!dto.display_dark);
        assert_eq!(
            dto.notifications["email"]["daily"],
            ModeValueDto::Token("enabled".to_owned())
        );
        assert_eq!(dto.notifications["mobilepush"].len(), 2);
    }

    #[test]
    fn test_user_to_dto_conversion() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let user = User {
            id: 9,
            name: "Dana".to_owned(),
            email: "dana@example.com".to_owned(),
            age: 30,
            created_at,
            updated_at: created_at,
        };

        let json = serde_json::to_value(UserDto::from(user)).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_success_envelope_omits_errors() {
        let dto: ServiceResponseDto<SettingsDocumentDto> =
            ServiceResponse::created("User settings updated", SettingsDocument::default()).into();

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["data"]["displayDark"], false);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let dto: ServiceResponseDto<SettingsDocumentDto> =
            ServiceResponse::<SettingsDocument>::not_found("User not found").into();

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["statusCode"], 404);
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_rejected_envelope() {
        let dto: ServiceResponseDto<()> = rejected("id", "must be a non-negative integer");

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "Invalid input: id");
        assert_eq!(json["errors"][0]["message"], "must be a non-negative integer");
    }

    #[test]
    fn test_users_query_filter_is_optional() {
        let query: UsersQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.filter, None);

        let query: UsersQuery = serde_json::from_str(r#"{"filter":"bob"}"#).unwrap();
        assert_eq!(query.filter.as_deref(), Some("bob"));
    }
}

use sea_orm::Value;
use serde::Deserialize;
use utoipa::ToSchema;

use domain::{IntoUpdateMap, UpdateMap};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateParams {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Multipart form accepted by the audio upload endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AudioUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub audio_file: Vec<u8>,
}

impl UpdateParams {
    /// A title, when given, must not be blank.
    pub fn has_blank_title(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
    }
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        if let Some(title) = self.title {
            update_map.insert(
                "title".to_string(),
                Some(Value::String(Some(Box::new(title)))),
            );
        }
        if let Some(description) = self.description {
            update_map.insert(
                "description".to_string(),
                Some(Value::String(Some(Box::new(description)))),
            );
        }
        update_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_params_only_map_provided_fields() {
        let params = UpdateParams {
            title: Some("Sprint review".to_string()),
            description: None,
        };

        let update_map = params.into_update_map();

        assert_eq!(
            update_map.get("title"),
            Some(&Value::String(Some(Box::new("Sprint review".to_string()))))
        );
        assert!(update_map.get("description").is_none());
    }

    #[test]
    fn empty_update_params_produce_an_empty_map() {
        let params = UpdateParams {
            title: None,
            description: None,
        };

        assert!(params.into_update_map().is_empty());
    }

    #[test]
    fn blank_title_is_detected() {
        let params = UpdateParams {
            title: Some("   ".to_string()),
            description: None,
        };

        assert!(params.has_blank_title());
    }
}

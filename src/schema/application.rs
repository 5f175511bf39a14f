use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/application/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease_version: Option<Value>,
    pub build_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec_path: Option<String>,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_info_minimal() {
        let info: ApplicationInfo = serde_json::from_value(json!({
            "version": "4.0.0",
            "buildVersion": "20240101",
            "platform": "darwin"
        }))
        .unwrap();
        assert_eq!(info.version, "4.0.0");
        assert!(info.prerelease_version.is_none());
        assert!(info.exec_path.is_none());
    }

    #[test]
    fn test_application_info_opaque_preferences() {
        let info: ApplicationInfo = serde_json::from_value(json!({
            "version": "4.0.0",
            "prereleaseVersion": "beta.3",
            "buildVersion": "20240101",
            "execPath": "/Applications/Eagle.app",
            "platform": "darwin",
            "preferences": {"general": {"language": "en"}, "shortcuts": [1, 2]}
        }))
        .unwrap();
        assert_eq!(info.preferences.unwrap()["general"]["language"], "en");
        assert_eq!(info.prerelease_version, Some(json!("beta.3")));
    }

    #[test]
    fn test_application_info_requires_platform() {
        let result = serde_json::from_value::<ApplicationInfo>(json!({
            "version": "4.0.0",
            "buildVersion": "20240101"
        }));
        assert!(result.is_err());
    }
}

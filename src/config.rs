use serde::Deserialize;
use std::fs;

fn default_known_brands() -> Vec<String> {
    [
        "michelin",
        "goodyear",
        "bridgestone",
        "pirelli",
        "continental",
        "hankook",
        "bfgoodrich",
        "dunlop",
        "yokohama",
        "falken",
    ]
    .iter()
    .map(|b| b.to_string())
    .collect()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub catalog_path: String,
    pub openai_api_key: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Lowercase tire brand names; anything else in a fitment clause is read
    /// as a vehicle make.
    #[serde(default = "default_known_brands")]
    pub known_brands: Vec<String>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_brand_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "catalog_path": "dataset.json", "openai_api_key": "sk-test" }"#,
        )
        .unwrap();
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert!(config.known_brands.iter().any(|b| b == "michelin"));
        assert_eq!(config.known_brands.len(), 10);
    }
}

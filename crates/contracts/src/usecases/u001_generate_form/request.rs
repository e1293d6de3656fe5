use serde::{Deserialize, Serialize};

/// Request to turn a free-text prompt into a form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFormRequest {
    /// Prompt exactly as the user typed it
    pub prompt: String,
}

impl GenerateFormRequest {
    /// Returns `None` when the prompt is empty or whitespace only.
    pub fn from_prompt(prompt: &str) -> Option<Self> {
        if prompt.trim().is_empty() {
            return None;
        }
        Some(Self {
            prompt: prompt.to_string(),
        })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_rejected() {
        assert!(GenerateFormRequest::from_prompt("").is_none());
        assert!(GenerateFormRequest::from_prompt("   ").is_none());
        assert!(GenerateFormRequest::from_prompt("\n\t ").is_none());
    }

    #[test]
    fn test_prompt_kept_untrimmed() {
        let request = GenerateFormRequest::from_prompt("  Contact form with name and email ")
            .expect("non-blank prompt");
        assert_eq!(request.prompt, "  Contact form with name and email ");
    }

    #[test]
    fn test_json_shape() {
        let request = GenerateFormRequest::from_prompt("Signup form").unwrap();
        assert_eq!(request.to_json().unwrap(), r#"{"prompt":"Signup form"}"#);
    }
}

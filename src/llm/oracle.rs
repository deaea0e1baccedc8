//! Birth-chart and daily-fact oracles with fixed fallbacks
//!
//! Both features are one-shot: no retries, no streaming. Any failure (no
//! client, transport error, malformed JSON) is logged and replaced by a
//! fixed fallback, so the caller always receives a complete value and the
//! screen never shows an error state. [`Fetched`] records which path was
//! taken without forcing callers to branch on it.

use crate::core::error::{QuestError, Result};
use crate::llm::client::LlmClient;
use serde::{Deserialize, Serialize};

/// Where a fetched value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// The model answered
    Live,
    /// The fixed fallback was substituted after a failure
    Fallback,
}

/// A complete value plus its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub source: FetchSource,
}

impl<T> Fetched<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            source: FetchSource::Live,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            source: FetchSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == FetchSource::Fallback
    }
}

/// The cosmic identity card for one child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChartSummary {
    pub sun_sign: String,
    pub moon_sign: String,
    pub ascendant: String,
    pub lucky_element: String,
    pub power_planet: String,
    pub kid_summary: String,
}

/// Fixed birth-chart card shown when generation fails
pub fn fallback_summary() -> BirthChartSummary {
    BirthChartSummary {
        sun_sign: "Unknown Star".to_string(),
        moon_sign: "Mystery Moon".to_string(),
        ascendant: "Rising Hero".to_string(),
        lucky_element: "Stardust".to_string(),
        power_planet: "Unknown".to_string(),
        kid_summary: "You are a unique and special mystery! \
                      Check your internet connection to reveal your true stars."
            .to_string(),
    }
}

/// Fixed daily fact shown when generation fails
pub const FALLBACK_FACT: &str = "Stars twinkle because of Earth's atmosphere!";

const SUMMARY_SYSTEM_PROMPT: &str = "You are a friendly, magical Indian Astrology expert for kids. \
    You create Cosmic Identity Cards. Approximate calculations are fine for this game. \
    Respond with a single JSON object and no other text.";

const FACT_SYSTEM_PROMPT: &str =
    "You are a friendly astronomy guide for young children. Answer in plain text.";

const FACT_USER_PROMPT: &str =
    "Tell me one fun, short, simple astronomy or astrology fact for a 7-year-old. Maximum 20 words.";

fn summary_prompt(date: &str, time: &str, place: &str) -> String {
    format!(
        "Create a \"Cosmic Identity Card\" for a child born on {date} at {time} in {place}.\n\
         Calculate their Sun Sign (Surya Rashi), Moon Sign (Chandra Rashi), and Ascendant (Lagna).\n\
         Return strictly this JSON schema:\n\
         {{\n\
           \"sunSign\": \"Sign Name (e.g. Leo)\",\n\
           \"moonSign\": \"Sign Name (e.g. Cancer)\",\n\
           \"ascendant\": \"Sign Name (e.g. Libra)\",\n\
           \"luckyElement\": \"Fire/Water/Air/Earth\",\n\
           \"powerPlanet\": \"Planet Name (e.g. Sun)\",\n\
           \"kidSummary\": \"A short, 2-sentence encouraging description of their personality for a 10-year-old.\"\n\
         }}"
    )
}

/// Extract the JSON object from a response that may carry surrounding prose
fn extract_json(response: &str) -> Result<&str> {
    let start = response
        .find('{')
        .ok_or_else(|| QuestError::LlmError("No JSON found in response".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| QuestError::LlmError("No closing brace found in response".into()))?;
    Ok(&response[start..=end])
}

/// Parse a model response into a summary record
fn parse_summary(response: &str) -> Result<BirthChartSummary> {
    let json = extract_json(response)?;
    let summary: BirthChartSummary = serde_json::from_str(json)?;
    Ok(summary)
}

/// Generate the birth-chart card; never fails, never blocks other screens
pub async fn generate_birth_chart_summary(
    client: Option<&LlmClient>,
    date: &str,
    time: &str,
    place: &str,
) -> Fetched<BirthChartSummary> {
    let Some(client) = client else {
        tracing::warn!("no LLM client configured, using fallback birth chart");
        return Fetched::fallback(fallback_summary());
    };

    let user = summary_prompt(date, time, place);
    let result = client.complete(SUMMARY_SYSTEM_PROMPT, &user).await;
    match result.and_then(|text| parse_summary(&text)) {
        Ok(summary) => Fetched::live(summary),
        Err(e) => {
            tracing::warn!(error = %e, "birth chart generation failed, using fallback");
            Fetched::fallback(fallback_summary())
        }
    }
}

/// Fetch the daily sky fact; never fails
pub async fn daily_sky_fact(client: Option<&LlmClient>) -> Fetched<String> {
    let Some(client) = client else {
        tracing::warn!("no LLM client configured, using fallback fact");
        return Fetched::fallback(FALLBACK_FACT.to_string());
    };

    match client.complete(FACT_SYSTEM_PROMPT, FACT_USER_PROMPT).await {
        Ok(text) if !text.trim().is_empty() => Fetched::live(text.trim().to_string()),
        Ok(_) => {
            tracing::warn!("daily fact came back empty, using fallback");
            Fetched::fallback(FALLBACK_FACT.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "daily fact fetch failed, using fallback");
            Fetched::fallback(FALLBACK_FACT.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_plain_json() {
        let response = r#"{
            "sunSign": "Leo",
            "moonSign": "Cancer",
            "ascendant": "Libra",
            "luckyElement": "Fire",
            "powerPlanet": "Sun",
            "kidSummary": "You shine bright!"
        }"#;
        let summary = parse_summary(response).unwrap();
        assert_eq!(summary.sun_sign, "Leo");
        assert_eq!(summary.power_planet, "Sun");
    }

    #[test]
    fn test_parse_summary_with_surrounding_text() {
        let response = "Here is your card:\n{\"sunSign\":\"Aries\",\"moonSign\":\"Pisces\",\
            \"ascendant\":\"Virgo\",\"luckyElement\":\"Water\",\"powerPlanet\":\"Mars\",\
            \"kidSummary\":\"Brave explorer!\"}\nEnjoy!";
        let summary = parse_summary(response).unwrap();
        assert_eq!(summary.sun_sign, "Aries");
        assert_eq!(summary.kid_summary, "Brave explorer!");
    }

    #[test]
    fn test_parse_summary_rejects_prose() {
        assert!(parse_summary("I cannot cast charts").is_err());
    }

    #[test]
    fn test_parse_summary_rejects_incomplete_record() {
        // Missing fields must not silently become a partial card.
        assert!(parse_summary(r#"{"sunSign": "Leo"}"#).is_err());
    }

    #[test]
    fn test_fallback_summary_is_deterministic() {
        assert_eq!(fallback_summary(), fallback_summary());
        let card = fallback_summary();
        assert_eq!(card.sun_sign, "Unknown Star");
        assert_eq!(card.moon_sign, "Mystery Moon");
        assert_eq!(card.ascendant, "Rising Hero");
        assert_eq!(card.lucky_element, "Stardust");
        assert_eq!(card.power_planet, "Unknown");
    }

    #[tokio::test]
    async fn test_no_client_yields_fallback_card() {
        let first = generate_birth_chart_summary(None, "2015-06-01", "12:00 PM", "Mumbai").await;
        let second = generate_birth_chart_summary(None, "2015-06-01", "12:00 PM", "Mumbai").await;
        assert!(first.is_fallback());
        assert_eq!(first.value, fallback_summary());
        assert_eq!(first.value, second.value);
    }

    #[tokio::test]
    async fn test_no_client_yields_fallback_fact() {
        let fact = daily_sky_fact(None).await;
        assert!(fact.is_fallback());
        assert_eq!(fact.value, FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_fallback() {
        // A client pointing at a closed local port fails fast; the oracle
        // must swallow it and hand back the fixed card.
        let client = LlmClient::new(
            "test-key".into(),
            "http://127.0.0.1:9/v1/chat/completions".into(),
            "test-model".into(),
        );
        let card = generate_birth_chart_summary(Some(&client), "2015-06-01", "12:00", "Pune").await;
        assert!(card.is_fallback());
        assert_eq!(card.value, fallback_summary());

        let fact = daily_sky_fact(Some(&client)).await;
        assert!(fact.is_fallback());
        assert_eq!(fact.value, FALLBACK_FACT);
    }

    #[test]
    fn test_prompt_carries_birth_details() {
        let prompt = summary_prompt("2014-03-09", "08:30", "Jaipur, India");
        assert!(prompt.contains("2014-03-09"));
        assert!(prompt.contains("08:30"));
        assert!(prompt.contains("Jaipur, India"));
    }
}

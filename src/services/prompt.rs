pub const DEFAULT_LANGUAGE: &str = "English";

/// Keys the client expects in the structured reply.
pub const EXPECTED_KEYS: [&str; 6] = [
    "possibleConditions",
    "earlySigns",
    "causes",
    "remedies",
    "yogaTips",
    "precautions",
];

pub fn build_prompt(message: &str, language: &str) -> String {
    format!(
        r#"The user says: "{message}" in {language}.
Provide a detailed health analysis in pure JSON format with these keys:
{{
  "possibleConditions": [array of possible conditions],
  "earlySigns": "string describing early signs",
  "causes": "string describing causes",
  "remedies": [array of recommended remedies],
  "yogaTips": "string with yoga tips",
  "precautions": "string with precautions"
}}
Respond in {language} and return ONLY the JSON object."#
    )
}

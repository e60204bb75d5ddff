use wasm_bindgen::JsValue;

/// Errors surfaced while mounting or configuring the card.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("no {0} available")]
    MissingGlobal(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid card config: {0}")]
    InvalidConfig(String),
    #[error("could not parse card config: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, CardError>;

impl From<JsValue> for CardError {
    fn from(value: JsValue) -> Self {
        CardError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<CardError> for JsValue {
    fn from(err: CardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(CardError::MissingGlobal("window").to_string(), "no window available");
        assert_eq!(
            CardError::InvalidConfig("fill_step must be 1..=100".into()).to_string(),
            "invalid card config: fill_step must be 1..=100"
        );
    }
}

use serde::{Deserialize, Serialize};

/// How worrying a predicted condition is, independent of the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionSeverity {
    Normal,
    Moderate,
    High,
    Unknown,
}

impl ConditionSeverity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Healthy" => ConditionSeverity::Normal,
            "Diabetes" | "Hypertension" | "Age_Related_Hypertension" => ConditionSeverity::Moderate,
            "Hypertension_Diabetes" | "Tachycardia" => ConditionSeverity::High,
            _ => ConditionSeverity::Unknown,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            ConditionSeverity::Normal => "Your health parameters are within normal ranges.",
            ConditionSeverity::Moderate => {
                "Moderate risk detected. Consider consulting a healthcare professional."
            }
            ConditionSeverity::High | ConditionSeverity::Unknown => {
                "High risk detected. Please seek medical advice promptly."
            }
        }
    }
}

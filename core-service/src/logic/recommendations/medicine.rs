use serde::{Deserialize, Serialize};

/// One suggested medicine. Display data only; never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub class: String,
    pub safety: String,
    pub mechanism: String,
}

impl Medicine {
    pub fn new(name: &str, class: &str, safety: &str, mechanism: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            safety: safety.to_string(),
            mechanism: mechanism.to_string(),
        }
    }
}

/// Built-in label → medicines data
pub(crate) fn default_entries() -> Vec<(&'static str, Vec<Medicine>)> {
    vec![
        (
            "Diabetes",
            vec![
                Medicine::new("Metformin 500mg", "Biguanide", "Low risk", "Decreases glucose production"),
                Medicine::new("Sitagliptin 100mg", "DPP4 Inhibitor", "Low risk", "Inhibits DPP4 enzyme"),
                Medicine::new("Glipizide 5mg", "Sulfonylurea", "Medium risk", "Stimulates insulin release"),
            ],
        ),
        (
            "Hypertension",
            vec![
                Medicine::new("Lisinopril 10mg", "ACE Inhibitor", "Low risk", "Blocks angiotensin conversion"),
                Medicine::new("Amlodipine 5mg", "Calcium Channel Blocker", "Low risk", "Blocks calcium channels"),
                Medicine::new("Metoprolol 50mg", "Beta Blocker", "Medium risk", "Blocks beta receptors"),
            ],
        ),
        (
            "Hypertension_Diabetes",
            vec![
                Medicine::new(
                    "Lisinopril/HCTZ Combo",
                    "ACE Inhibitor + Diuretic",
                    "Medium risk",
                    "Blood pressure control + diuretic effect",
                ),
                Medicine::new(
                    "Amlodipine/Metformin Combo",
                    "Calcium blocker + Biguanide",
                    "Low risk",
                    "Combined effect on BP and glucose",
                ),
            ],
        ),
        (
            "Tachycardia",
            vec![
                Medicine::new("Propranolol 40mg", "Beta Blocker", "Medium risk", "Slows heart rate"),
                Medicine::new("Diltiazem 120mg", "Calcium Channel Blocker", "Medium risk", "Reduces heart rate and BP"),
            ],
        ),
        (
            "Age_Related_Hypertension",
            vec![
                Medicine::new("Aspirin 81mg", "Antiplatelet", "Low risk", "Prevents blood clots"),
                Medicine::new("Atorvastatin 20mg", "Statin", "Low risk", "Lowers cholesterol"),
            ],
        ),
        (
            "Healthy",
            vec![
                Medicine::new("Multivitamin Daily", "Multivitamin", "Low risk", "Provides essential nutrients"),
                Medicine::new("Vitamin D3 1000IU", "Vitamin", "Low risk", "Supports bone health"),
                Medicine::new("Omega-3 Fish Oil", "Supplement", "Low risk", "Supports heart health"),
            ],
        ),
    ]
}

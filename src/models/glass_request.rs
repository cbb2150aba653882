use serde::{Deserialize, Serialize};

/// Flat record posted to the sheet API, keyed by sheet column header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassRequestRecord {
    #[serde(rename = "Request #")]
    pub request_number: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Project Code")]
    pub project_code: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "Project SQM")]
    pub project_sqm: f64,
    #[serde(rename = "Cutting list received")]
    pub cutting_list_received: String,
    #[serde(rename = "Glass Description")]
    pub glass_description: String,
    #[serde(rename = "Glass Height (mm)")]
    pub height_mm: f64,
    #[serde(rename = "Glass Width (mm)")]
    pub width_mm: f64,
    #[serde(rename = "Optimize Qty")]
    pub quantity: u32,
    #[serde(rename = "Wastage %")]
    pub wastage_percent: f64,
    #[serde(rename = "SQM")]
    pub sqm: f64,
    #[serde(rename = "Team 1 Remarks")]
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_sheet_headers() {
        let record = GlassRequestRecord {
            request_number: "012401-1".to_string(),
            date: "2024-01-15".to_string(),
            customer_name: "ACME".to_string(),
            project_code: "07".to_string(),
            project_name: "Tower A".to_string(),
            project_sqm: 1200.0,
            cutting_list_received: "Yes".to_string(),
            glass_description: "6mm Clear".to_string(),
            height_mm: 1000.0,
            width_mm: 500.0,
            quantity: 4,
            wastage_percent: 5.0,
            sqm: 2.0,
            remarks: String::new(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 14);
        assert_eq!(value["Request #"], "012401-1");
        assert_eq!(value["Project Code"], "07");
        assert_eq!(value["Glass Height (mm)"], 1000.0);
        assert_eq!(value["Optimize Qty"], 4);
        assert_eq!(value["Team 1 Remarks"], "");
    }
}

//! Outbound lead document

use crate::state::FormRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Fixed tag identifying this form as the origin of a lead
pub const SOURCE_TAG: &str = "Quetico Lead Gen Widget";

/// Body posted to the sink: every record field plus send metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadDocument {
    #[serde(flatten)]
    pub record: FormRecord,
    /// ISO-8601 instant of send, UTC with millisecond precision
    pub timestamp: String,
    pub source: String,
}

impl LeadDocument {
    pub fn new(record: FormRecord, sent_at: DateTime<Utc>) -> Self {
        Self {
            record,
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: SOURCE_TAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SetField;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_timestamp_format() {
        let sent_at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let document = LeadDocument::new(FormRecord::default(), sent_at);
        assert_eq!(document.timestamp, "2024-03-05T14:07:09.000Z");
        assert_eq!(document.source, SOURCE_TAG);
    }

    #[test]
    fn test_body_is_flat_object() {
        let mut record = FormRecord::default();
        record.name = "Jane Doe".to_string();
        record.business_type = "B2B/Wholesale".to_string();
        record.toggle(SetField::ShippingMethods, "Express");
        let sent_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let body = serde_json::to_value(LeadDocument::new(record, sent_at)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Jane Doe",
                "email": "",
                "company": "",
                "website": "",
                "phone": "",
                "monthlyOrders": "",
                "interests": [],
                "platforms": [],
                "shippingMethods": ["Express"],
                "businessType": "B2B/Wholesale",
                "location": "",
                "currentProvider": "",
                "inventorySize": "",
                "specialRequirements": "",
                "timestamp": "2024-01-01T00:00:00.000Z",
                "source": "Quetico Lead Gen Widget",
            })
        );
    }
}

//! Wire types for the Salesforce REST endpoints this client touches.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{ConvertLeadError, ConvertLeadResult};

/// OAuth2 password-grant token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub instance_url: String,
}

/// SOQL query envelope. Only the fields this client reads.
#[derive(Debug, Deserialize)]
pub struct LeadStatusQueryResponse {
    #[serde(default)]
    pub records: Vec<LeadStatusRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LeadStatusRecord {
    #[serde(rename = "MasterLabel")]
    pub master_label: String,
}

/// Request body for the standard convertLead invocable action.
#[derive(Debug, Serialize)]
pub struct ConvertLeadRequest<'a> {
    pub inputs: Vec<ConvertLeadInput<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertLeadInput<'a> {
    pub lead_id: &'a str,
    pub converted_status: &'a str,
    pub do_not_create_opportunity: bool,
}

/// One element of the convertLead action response array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertLeadActionResult {
    pub is_success: bool,
    #[serde(default)]
    pub output_values: Option<ConvertLeadOutputs>,
    #[serde(default)]
    pub errors: Vec<ActionError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertLeadOutputs {
    pub account_id: Option<String>,
    pub contact_id: Option<String>,
    pub opportunity_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionError {
    pub message: String,
    #[serde(default)]
    pub status_code: Option<String>,
}

impl From<ConvertLeadActionResult> for ConvertLeadResult {
    fn from(raw: ConvertLeadActionResult) -> Self {
        let outputs = raw.output_values.unwrap_or_default();
        Self {
            success: raw.is_success,
            account_id: outputs.account_id,
            contact_id: outputs.contact_id,
            opportunity_id: outputs.opportunity_id,
            errors: raw
                .errors
                .into_iter()
                .map(|e| ConvertLeadError { message: e.message })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_token_response() {
        let json = r#"{
            "access_token": "00Dxx!AQEA",
            "instance_url": "https://example.my.salesforce.com",
            "token_type": "Bearer"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "00Dxx!AQEA");
        assert_eq!(token.instance_url, "https://example.my.salesforce.com");
    }

    #[test]
    fn deserialize_lead_status_query() {
        let json = r#"{
            "totalSize": 1,
            "done": true,
            "records": [{"attributes": {"type": "LeadStatus"}, "MasterLabel": "Qualified"}]
        }"#;
        let response: LeadStatusQueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].master_label, "Qualified");
    }

    #[test]
    fn serialize_convert_lead_input_uses_remote_field_names() {
        let request = ConvertLeadRequest {
            inputs: vec![ConvertLeadInput {
                lead_id: "00Q000000000001AAA",
                converted_status: "Closed - Converted",
                do_not_create_opportunity: true,
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"][0]["leadId"], "00Q000000000001AAA");
        assert_eq!(json["inputs"][0]["doNotCreateOpportunity"], true);
    }

    #[test]
    fn successful_action_result_maps_output_values() {
        let json = r#"[{
            "actionName": "convertLead",
            "isSuccess": true,
            "outputValues": {"accountId": "001A", "contactId": "003C", "opportunityId": "006O"},
            "errors": []
        }]"#;
        let results: Vec<ConvertLeadActionResult> = serde_json::from_str(json).unwrap();
        let result = ConvertLeadResult::from(results.into_iter().next().unwrap());
        assert!(result.success);
        assert_eq!(result.account_id.as_deref(), Some("001A"));
        assert_eq!(result.contact_id.as_deref(), Some("003C"));
        assert_eq!(result.opportunity_id.as_deref(), Some("006O"));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn failed_action_result_carries_error_messages() {
        let json = r#"[{
            "actionName": "convertLead",
            "isSuccess": false,
            "outputValues": null,
            "errors": [{"statusCode": "INVALID_STATUS", "message": "Invalid Lead Status"}]
        }]"#;
        let results: Vec<ConvertLeadActionResult> = serde_json::from_str(json).unwrap();
        let result = ConvertLeadResult::from(results.into_iter().next().unwrap());
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Invalid Lead Status");
    }
}
